use leptos::prelude::*;

use crate::shared::site_config::SITE;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1 class="info-page__title">{SITE.about.title}</h1>
            <p class="info-page__intro">{SITE.about.intro}</p>

            <div class="info-page__cards">
                {SITE
                    .about
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="info-card">
                                <h2 class="info-card__title">{feature.title}</h2>
                                <p class="info-card__text">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <h2 class="info-page__subtitle">{"Наши преимущества"}</h2>
            <ul class="info-page__list">
                {SITE
                    .about
                    .advantages
                    .iter()
                    .map(|advantage| view! { <li>{*advantage}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
