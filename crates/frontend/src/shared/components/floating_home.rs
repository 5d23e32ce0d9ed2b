use leptos::prelude::*;

use crate::domain::a002_cart::use_cart;
use crate::routes::{Route, RouteLink};
use crate::shared::icons::icon;
use crate::shared::site_config::whatsapp_link;

/// Плавающая панель для мобильных: домой, корзина, WhatsApp.
#[component]
pub fn FloatingHomeButton() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="floating-bar">
            <RouteLink to=Route::catalog() class="floating-bar__button">
                {icon("home")}
            </RouteLink>
            <button
                class="floating-bar__button floating-bar__button--cart"
                title="Корзина"
                on:click=move |_| cart.toggle_open()
            >
                {icon("cart")}
                {move || {
                    let count = cart.total_items();
                    if count > 0 {
                        view! { <span class="floating-bar__badge">{count}</span> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </button>
            <a
                class="floating-bar__button floating-bar__button--whatsapp"
                href=whatsapp_link("Здравствуйте! Хочу сделать заказ.")
                target="_blank"
                rel="noopener noreferrer"
            >
                {icon("message-circle")}
            </a>
        </div>
    }
}
