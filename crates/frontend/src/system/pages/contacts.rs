use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::site_config::{phone_link, whatsapp_link, SITE};

#[component]
pub fn ContactsPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1 class="info-page__title">{"Контакты"}</h1>

            <div class="info-page__cards">
                <div class="info-card">
                    <h2 class="info-card__title">
                        {icon("phone")}
                        {"Телефон"}
                    </h2>
                    <a class="info-card__link" href=phone_link()>
                        {SITE.contacts.phone}
                    </a>
                </div>
                <div class="info-card">
                    <h2 class="info-card__title">
                        {icon("message-circle")}
                        {"WhatsApp"}
                    </h2>
                    <a
                        class="info-card__link"
                        href=whatsapp_link("Здравствуйте!")
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Написать в WhatsApp"}
                    </a>
                </div>
                <div class="info-card">
                    <h2 class="info-card__title">
                        {icon("mail")}
                        {"Почта"}
                    </h2>
                    <a class="info-card__link" href=format!("mailto:{}", SITE.contacts.email)>
                        {SITE.contacts.email}
                    </a>
                </div>
                <div class="info-card">
                    <h2 class="info-card__title">
                        {icon("map-pin")}
                        {"Адрес"}
                    </h2>
                    <p class="info-card__text">{SITE.contacts.address}</p>
                </div>
            </div>
        </div>
    }
}
