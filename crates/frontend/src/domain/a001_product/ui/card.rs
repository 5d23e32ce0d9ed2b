use contracts::domain::a001_product::Product;
use contracts::domain::a002_cart::CartItem;
use leptos::prelude::*;

use super::list::state::ViewMode;
use crate::domain::a002_cart::use_cart;
use crate::routes::{Route, RouteLink};
use crate::shared::components::OptimizedImage;
use crate::shared::icons::icon;
use crate::shared::site_config::{format_price, SITE};

/// Карточка товара в каталоге. `Grid` — плитка с фотографией, `Compact` —
/// узкая строка для режима списка.
#[component]
pub fn ProductCard(product: Product, view_mode: ViewMode) -> impl IntoView {
    let cart = use_cart();
    let cart_item = CartItem::new(
        product.id.clone(),
        product.name.clone(),
        product.price,
        product.img.clone(),
    );
    let add_to_cart = move |_| cart.add_item(cart_item.clone());

    let price = format_price(product.price);
    let category = product.category_label().to_string();
    let route = Route::Product(product.id.clone());

    // Имя попадает в два разных дочерних замыкания, поэтому клонируем заранее
    let image_alt = product.name.clone();

    match view_mode {
        ViewMode::Grid => view! {
            <article class="product-card">
                <RouteLink to=route.clone() class="product-card__image">
                    <OptimizedImage
                        src=product.img.clone()
                        alt=image_alt
                    />
                </RouteLink>
                <div class="product-card__body">
                    <span class="product-card__category">{category}</span>
                    {product
                        .producer
                        .clone()
                        .map(|producer| {
                            view! { <span class="product-card__producer">{producer}</span> }
                        })}
                    <RouteLink to=route class="product-card__name">
                        {product.name.clone()}
                    </RouteLink>
                    {product
                        .in_box
                        .clone()
                        .map(|in_box| {
                            view! {
                                <span class="product-card__in-box">
                                    {format!("В упаковке: {in_box}")}
                                </span>
                            }
                        })}
                    <div class="product-card__footer">
                        <span class="product-card__price">{price}</span>
                        <button
                            class="button button--primary product-card__add"
                            on:click=add_to_cart
                        >
                            {icon("cart")}
                            {SITE.messages.add_to_cart}
                        </button>
                    </div>
                </div>
            </article>
        }
        .into_any(),
        ViewMode::Compact => view! {
            <article class="product-card product-card--compact">
                <RouteLink to=route.clone() class="product-card__image product-card__image--small">
                    <OptimizedImage
                        src=product.img.clone()
                        alt=image_alt
                    />
                </RouteLink>
                <div class="product-card__row">
                    <RouteLink to=route class="product-card__name">
                        {product.name.clone()}
                    </RouteLink>
                    <span class="product-card__category">{category}</span>
                </div>
                <span class="product-card__price">{price}</span>
                <button
                    class="button button--primary product-card__add product-card__add--icon"
                    title=SITE.messages.add_to_cart
                    on:click=add_to_cart
                >
                    {icon("plus")}
                </button>
            </article>
        }
        .into_any(),
    }
}
