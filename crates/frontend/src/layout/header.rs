use leptos::prelude::*;

use crate::domain::a002_cart::use_cart;
use crate::routes::{use_router, Route, RouteLink};
use crate::shared::icons::icon;
use crate::shared::site_config::{phone_link, SITE};

#[component]
pub fn Header() -> impl IntoView {
    let router = use_router();
    let cart = use_cart();
    let (query, set_query) = signal(String::new());
    let (menu_open, set_menu_open) = signal(false);

    let submit_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked().trim().to_string();
        router.navigate(Route::Catalog {
            search: if text.is_empty() { None } else { Some(text) },
        });
    };

    let nav_route = |href: &str| Route::parse(href, "");

    view! {
        <header class="header">
            <div class="header__top">
                <RouteLink to=Route::catalog() class="header__logo">
                    <img src=SITE.company.logo alt=SITE.company.name />
                    <div class="header__logo-text">
                        <span class="header__name">{SITE.company.name}</span>
                        <span class="header__slogan">{SITE.company.slogan}</span>
                    </div>
                </RouteLink>

                <form class="header__search" on:submit=submit_search>
                    <input
                        type="search"
                        placeholder="Поиск товаров..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <button type="submit" title="Найти">
                        {icon("search")}
                    </button>
                </form>

                <div class="header__actions">
                    <a class="header__phone" href=phone_link()>
                        {icon("phone")}
                        <span>{SITE.contacts.phone}</span>
                    </a>
                    <button
                        class="header__cart"
                        title="Корзина"
                        on:click=move |_| cart.toggle_open()
                    >
                        {icon("cart")}
                        {move || {
                            let count = cart.total_items();
                            if count > 0 {
                                view! { <span class="header__cart-badge">{count}</span> }
                                    .into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </button>
                    <button
                        class="header__menu-toggle"
                        title="Меню"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                    </button>
                </div>
            </div>

            <nav class=move || {
                if menu_open.get() {
                    "header__nav header__nav--open"
                } else {
                    "header__nav"
                }
            }>
                {SITE
                    .navigation
                    .iter()
                    .map(|link| {
                        let to = nav_route(link.href);
                        view! {
                            <RouteLink to=to class="header__nav-link">
                                {link.name}
                            </RouteLink>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
