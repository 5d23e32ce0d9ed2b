use contracts::domain::a002_cart::CartItem;
use leptos::prelude::*;

use crate::domain::a002_cart::checkout::checkout_link;
use crate::domain::a002_cart::use_cart;
use crate::shared::components::OptimizedImage;
use crate::shared::icons::icon;
use crate::shared::site_config::{format_price, SITE};

/// Выдвижная корзина. Открывается поверх любой страницы; оформление заказа —
/// переход в WhatsApp с готовым текстом.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = use_cart();

    view! {
        <Show when=move || cart.is_open.get()>
            <div class="cart-drawer">
                <div
                    class="cart-drawer__overlay"
                    on:click=move |_| cart.set_open(false)
                ></div>
                <div class="cart-drawer__panel">
                    <header class="cart-drawer__header">
                        <h2 class="cart-drawer__title">
                            {icon("cart")}
                            {move || format!("Корзина ({})", cart.total_items())}
                        </h2>
                        <button
                            class="cart-drawer__close"
                            title="Закрыть"
                            on:click=move |_| cart.set_open(false)
                        >
                            {icon("x")}
                        </button>
                    </header>

                    <Show
                        when=move || !cart.is_empty()
                        fallback=move || {
                            view! {
                                <div class="cart-drawer__empty">
                                    {icon("shopping-bag")}
                                    <p>{SITE.messages.empty_cart}</p>
                                    <button
                                        class="button button--primary"
                                        on:click=move |_| cart.set_open(false)
                                    >
                                        {"Перейти к покупкам"}
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="cart-drawer__items">
                            <For
                                each=move || cart.items()
                                key=|item| item.id.clone()
                                children=move |item| view! { <CartRow item=item /> }
                            />
                        </div>

                        <footer class="cart-drawer__footer">
                            <div class="cart-drawer__total">
                                <span>{"Итого:"}</span>
                                <span class="cart-drawer__total-price">
                                    {move || format_price(Some(cart.total_price()))}
                                </span>
                            </div>
                            <a
                                class="button button--primary cart-drawer__checkout"
                                href=move || checkout_link(&cart.snapshot())
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {icon("message-circle")}
                                {SITE.messages.checkout}
                            </a>
                            <div class="cart-drawer__actions">
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| cart.clear()
                                >
                                    {icon("trash")}
                                    {"Очистить"}
                                </button>
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| cart.set_open(false)
                                >
                                    {"Продолжить покупки"}
                                </button>
                            </div>
                        </footer>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CartRow(item: CartItem) -> impl IntoView {
    let cart = use_cart();
    let id = item.id.clone();
    let dec_id = id.clone();
    let inc_id = id.clone();
    let quantity = item.quantity;

    view! {
        <div class="cart-row">
            <div class="cart-row__image">
                <OptimizedImage src=item.img.clone() alt=item.name.clone() />
            </div>
            <div class="cart-row__info">
                <span class="cart-row__name">{item.name.clone()}</span>
                <span class="cart-row__price">{format_price(item.price)}</span>
                <div class="cart-row__stepper">
                    <button
                        class="cart-row__step"
                        title="Меньше"
                        on:click=move |_| cart.update_quantity(&dec_id, quantity - 1)
                    >
                        {icon("minus")}
                    </button>
                    <span class="cart-row__quantity">{quantity}</span>
                    <button
                        class="cart-row__step"
                        title="Больше"
                        on:click=move |_| cart.update_quantity(&inc_id, quantity + 1)
                    >
                        {icon("plus")}
                    </button>
                </div>
            </div>
            <div class="cart-row__line-total">
                {format_price(item.price.map(|p| p * quantity as f64))}
            </div>
            <button
                class="cart-row__remove"
                title="Удалить"
                on:click=move |_| cart.remove_item(&id)
            >
                {icon("trash")}
            </button>
        </div>
    }
}
