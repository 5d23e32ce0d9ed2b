use leptos::prelude::*;

use crate::routes::{Route, RouteLink};
use crate::shared::icons::icon;
use crate::shared::site_config::{phone_link, whatsapp_link, SITE};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <span class="footer__name">{SITE.company.name}</span>
                    <p class="footer__description">{SITE.company.description}</p>
                </div>

                <div class="footer__column">
                    <h3 class="footer__heading">{"Информация"}</h3>
                    <ul class="footer__links">
                        {SITE
                            .navigation
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <RouteLink to=Route::parse(link.href, "")>
                                            {link.name}
                                        </RouteLink>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h3 class="footer__heading">{"Контакты"}</h3>
                    <ul class="footer__links">
                        <li>
                            <a href=phone_link()>
                                {icon("phone")}
                                {SITE.contacts.phone}
                            </a>
                        </li>
                        <li>
                            <a
                                href=whatsapp_link("Здравствуйте!")
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {icon("message-circle")}
                                {"WhatsApp"}
                            </a>
                        </li>
                        <li>
                            <a href=format!("mailto:{}", SITE.contacts.email)>
                                {icon("mail")}
                                {SITE.contacts.email}
                            </a>
                        </li>
                        <li>
                            <span>
                                {icon("map-pin")}
                                {SITE.contacts.address}
                            </span>
                        </li>
                    </ul>
                </div>

                <div class="footer__column">
                    <h3 class="footer__heading">{"Доставка"}</h3>
                    <p class="footer__description">{SITE.delivery.description}</p>
                    <p class="footer__description">
                        {format!("Срок: {}", SITE.delivery.delivery_time)}
                    </p>
                </div>
            </div>

            <div class="footer__bottom">
                {move || format!("© {} {}. Все права защищены.", year, SITE.company.name)}
            </div>
        </footer>
    }
}
