use contracts::domain::a001_product::{
    apply_filters, category_tree, manufacturer_facets, page_numbers, page_slice, total_pages,
    Product, PAGE_SIZE_OPTIONS,
};
use leptos::prelude::*;

use super::mobile::MobileFilters;
use super::sidebar::FilterSidebar;
use super::state::{create_state, ViewMode};
use crate::domain::a001_product::ui::card::ProductCard;
use crate::domain::a001_product::use_catalog;
use crate::routes::{use_router, Route};
use crate::shared::icons::icon;
use crate::shared::site_config::SITE;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = use_catalog();
    let router = use_router();
    let state = create_state();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // Функция загрузки каталога
    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match catalog.all_products().await {
                Ok(data) => {
                    set_products.set(data.as_ref().clone());
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };
    load();

    // Поисковый запрос приходит из адресной строки (`/?search=...`)
    let search = Memo::new(move |_| match router.route.get() {
        Route::Catalog { search } => search.unwrap_or_default(),
        _ => String::new(),
    });
    Effect::new(move |_| {
        let query = search.get();
        state.update(|s| s.set_query(query));
    });

    let filtered = Memo::new(move |_| {
        products.with(|items| state.with(|s| apply_filters(items, &s.selection)))
    });
    let manufacturers = Memo::new(move |_| products.with(|items| manufacturer_facets(items)));
    let tree = Memo::new(move |_| {
        products.with(|items| {
            state.with(|s| category_tree(items, &s.selection.manufacturers))
        })
    });

    let pages = Memo::new(move |_| {
        filtered.with(|items| state.with(|s| total_pages(items.len(), s.page_size)))
    });
    let page_items = Memo::new(move |_| {
        filtered.with(|items| state.with(|s| page_slice(items, s.page_size, s.page).to_vec()))
    });

    let page_title = move || {
        let query = search.get();
        if !query.is_empty() {
            return format!("Поиск: \"{query}\"");
        }
        state.with(|s| match s.selection.categories.as_slice() {
            [category] => category.clone(),
            _ => SITE.catalog.default_category.to_string(),
        })
    };

    let clear_filters = Callback::new(move |_: ()| {
        state.update(|s| s.clear_filters());
        if search.get_untracked().is_empty() {
            return;
        }
        router.navigate(Route::catalog());
    });

    let goto_page = move |page: usize| {
        state.update(|s| s.page = page);
        if let Some(w) = web_sys::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    view! {
        <div class="catalog-page">
            // Хлебные крошки
            <nav class="breadcrumbs">
                <button class="breadcrumbs__link" on:click=move |_| clear_filters.run(())>
                    {icon("home")}
                    {"Главная"}
                </button>
                <span class="breadcrumbs__separator">{icon("chevron-right")}</span>
                <span class="breadcrumbs__current">{page_title}</span>
            </nav>

            <div class="catalog-page__layout">
                <FilterSidebar
                    state=state
                    manufacturers=manufacturers
                    tree=tree
                    on_clear=clear_filters
                />

                <main class="catalog-page__content">
                    <div class="catalog-page__toolbar">
                        <h1 class="catalog-page__title">{page_title}</h1>
                        <MobileFilters
                            state=state
                            manufacturers=manufacturers
                            tree=tree
                            on_clear=clear_filters
                        />
                        <div class="catalog-page__toolbar-right">
                            <span class="catalog-page__count">
                                {move || format!("Найдено: {}", filtered.with(|f| f.len()))}
                            </span>
                            <label class="catalog-page__page-size">
                                {"Показывать по:"}
                                <select on:change=move |ev| {
                                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                        state.update(|s| s.set_page_size(size));
                                    }
                                }>
                                    {PAGE_SIZE_OPTIONS
                                        .iter()
                                        .map(|&size| {
                                            view! {
                                                <option
                                                    value=size
                                                    selected=move || state.with(|s| s.page_size == size)
                                                >
                                                    {size}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                        </div>
                    </div>

                    {move || {
                        if is_loading.get() {
                            return view! {
                                <div class="catalog-page__status">
                                    {icon("loader")}
                                    {SITE.messages.loading}
                                </div>
                            }
                                .into_any();
                        }
                        if error.get().is_some() {
                            return view! {
                                <div class="catalog-page__status catalog-page__status--error">
                                    <p>{"Ошибка загрузки товаров"}</p>
                                    <button class="button button--primary" on:click=move |_| load()>
                                        {"Повторить"}
                                    </button>
                                </div>
                            }
                                .into_any();
                        }
                        if filtered.with(|f| f.is_empty()) {
                            return view! {
                                <div class="catalog-page__status">
                                    {icon("package")}
                                    <p>{SITE.messages.no_products}</p>
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| clear_filters.run(())
                                    >
                                        {"Сбросить фильтры"}
                                    </button>
                                </div>
                            }
                                .into_any();
                        }
                        let view_mode = state.with(|s| s.view_mode);
                        let grid_class = match view_mode {
                            ViewMode::Grid => "product-grid",
                            ViewMode::Compact => "product-grid product-grid--compact",
                        };
                        view! {
                            <div class=grid_class>
                                {page_items
                                    .get()
                                    .into_iter()
                                    .map(|product| {
                                        view! { <ProductCard product=product view_mode=view_mode /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }}

                    // Пагинация
                    {move || {
                        let total = pages.get();
                        if is_loading.get() || total <= 1 {
                            return view! { <></> }.into_any();
                        }
                        let current = state.with(|s| s.page.min(total));
                        view! {
                            <nav class="pagination">
                                <button
                                    class="pagination__button"
                                    disabled={current <= 1}
                                    on:click=move |_| goto_page(current - 1)
                                >
                                    {icon("chevron-left")}
                                </button>
                                {page_numbers(current, total)
                                    .into_iter()
                                    .map(|page| {
                                        let active = page == current;
                                        view! {
                                            <button
                                                class=if active {
                                                    "pagination__button pagination__button--active"
                                                } else {
                                                    "pagination__button"
                                                }
                                                on:click=move |_| goto_page(page)
                                            >
                                                {page}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                                <button
                                    class="pagination__button"
                                    disabled={current >= total}
                                    on:click=move |_| goto_page(current + 1)
                                >
                                    {icon("chevron-right")}
                                </button>
                                <span class="pagination__summary">
                                    {format!("Страница {current} из {total}")}
                                </span>
                            </nav>
                        }
                            .into_any()
                    }}
                </main>
            </div>
        </div>
    }
}
