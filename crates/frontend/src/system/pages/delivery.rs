use leptos::prelude::*;

use crate::shared::site_config::SITE;

#[component]
pub fn DeliveryPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1 class="info-page__title">{"Доставка"}</h1>
            <p class="info-page__intro">{SITE.delivery.description}</p>

            <div class="info-page__cards">
                {SITE
                    .delivery_methods
                    .iter()
                    .map(|method| {
                        view! {
                            <div class="info-card">
                                <h2 class="info-card__title">{method.title}</h2>
                                <p class="info-card__text">{method.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <h2 class="info-page__subtitle">{"Условия"}</h2>
            <ul class="info-page__list">
                {SITE
                    .delivery
                    .terms
                    .iter()
                    .map(|term| view! { <li>{*term}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
