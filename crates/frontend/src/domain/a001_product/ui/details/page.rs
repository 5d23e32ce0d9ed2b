use contracts::domain::a001_product::Product;
use contracts::domain::a002_cart::CartItem;
use leptos::prelude::*;

use crate::domain::a001_product::use_catalog;
use crate::domain::a002_cart::use_cart;
use crate::routes::{use_router, Route, RouteLink};
use crate::shared::components::OptimizedImage;
use crate::shared::icons::icon;
use crate::shared::site_config::{format_price, SITE};

#[component]
pub fn ProductPage() -> impl IntoView {
    let catalog = use_catalog();
    let router = use_router();
    let cart = use_cart();

    let product_id = Memo::new(move |_| match router.route.get() {
        Route::Product(id) => id,
        _ => String::new(),
    });

    let (product, set_product) = signal(Option::<Product>::None);
    let (is_loading, set_is_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);

    // Перезагрузка при переходе на другой товар
    Effect::new(move |_| {
        let id = product_id.get();
        if id.is_empty() {
            return;
        }
        set_is_loading.set(true);
        set_not_found.set(false);
        set_product.set(None);
        leptos::task::spawn_local(async move {
            match catalog.product_by_id(&id).await {
                Ok(Some(found)) => {
                    set_product.set(Some(found));
                    set_is_loading.set(false);
                }
                Ok(None) => {
                    set_not_found.set(true);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("Не удалось загрузить товар {id}: {e}");
                    set_not_found.set(true);
                    set_is_loading.set(false);
                }
            }
        });
    });

    view! {
        <div class="product-page">
            {move || {
                if is_loading.get() {
                    return view! {
                        <div class="product-page__skeleton">
                            {icon("loader")}
                            {SITE.messages.loading}
                        </div>
                    }
                        .into_any();
                }
                if not_found.get() || product.with(|p| p.is_none()) {
                    return view! {
                        <div class="product-page__not-found">
                            {icon("package")}
                            <h1>{"Товар не найден"}</h1>
                            <p>{"Возможно, товар был удалён или ссылка устарела."}</p>
                            <RouteLink to=Route::catalog() class="button button--primary">
                                {icon("arrow-left")}
                                {"Вернуться в каталог"}
                            </RouteLink>
                        </div>
                    }
                        .into_any();
                }
                let Some(item) = product.get() else {
                    return view! { <></> }.into_any();
                };
                let cart_item = CartItem::new(
                    item.id.clone(),
                    item.name.clone(),
                    item.price,
                    item.img.clone(),
                );
                let category = item.category_label().to_string();
                view! {
                    <div class="product-page__content">
                        <nav class="breadcrumbs">
                            <RouteLink to=Route::catalog() class="breadcrumbs__link">
                                {"Каталог"}
                            </RouteLink>
                            <span class="breadcrumbs__separator">{icon("chevron-right")}</span>
                            <span class="breadcrumbs__link">{category.clone()}</span>
                            <span class="breadcrumbs__separator">{icon("chevron-right")}</span>
                            <span class="breadcrumbs__current">{item.name.clone()}</span>
                        </nav>

                        <div class="product-page__grid">
                            <div class="product-page__image">
                                <OptimizedImage src=item.img.clone() alt=item.name.clone() />
                            </div>
                            <div class="product-page__info">
                                <span class="product-page__category">{category}</span>
                                {item
                                    .producer
                                    .clone()
                                    .map(|producer| {
                                        view! {
                                            <span class="product-page__producer">
                                                {format!("Производитель: {producer}")}
                                            </span>
                                        }
                                    })}
                                <h1 class="product-page__name">{item.name.clone()}</h1>
                                <span class="product-page__price">
                                    {format_price(item.price)}
                                </span>
                                {item
                                    .in_box
                                    .clone()
                                    .map(|in_box| {
                                        view! {
                                            <span class="product-page__in-box">
                                                {format!("В упаковке: {in_box}")}
                                            </span>
                                        }
                                    })}
                                {item
                                    .description
                                    .clone()
                                    .map(|description| {
                                        view! {
                                            <p class="product-page__description">{description}</p>
                                        }
                                    })}
                                <button
                                    class="button button--primary product-page__add"
                                    on:click=move |_| cart.add_item(cart_item.clone())
                                >
                                    {icon("cart")}
                                    {SITE.messages.add_to_cart}
                                </button>
                            </div>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
