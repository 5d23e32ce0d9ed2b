use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::site_config::SITE;

#[component]
pub fn PaymentPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1 class="info-page__title">{"Оплата"}</h1>

            <div class="info-page__cards">
                {SITE
                    .payment_methods
                    .iter()
                    .map(|method| {
                        view! {
                            <div class="info-card">
                                <h2 class="info-card__title">
                                    {icon(method.icon)}
                                    {method.name}
                                </h2>
                                <p class="info-card__text">{method.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
