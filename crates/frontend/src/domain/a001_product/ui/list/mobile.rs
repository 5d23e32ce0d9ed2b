use contracts::domain::a001_product::{CategoryNode, FacetCount};
use leptos::prelude::*;

use super::facets::{CategoryTree, ProducerFilter};
use super::state::CatalogListState;
use crate::shared::icons::icon;

/// Мобильная шторка фильтров: кнопка в тулбаре открывает нижнюю панель с тем
/// же деревом категорий и списком производителей, что и в боковой панели.
/// Выбор применяется сразу, кнопка внизу просто закрывает шторку.
#[component]
pub fn MobileFilters(
    state: RwSignal<CatalogListState>,
    manufacturers: Memo<Vec<FacetCount>>,
    tree: Memo<Vec<CategoryNode>>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    let active_count = move || {
        state.with(|s| {
            s.selection.categories.len() + s.selection.types.len() + s.selection.manufacturers.len()
        })
    };

    view! {
        <div class="mobile-filters">
            <button
                class="button button--secondary mobile-filters__open"
                on:click=move |_| set_is_open.set(true)
            >
                {icon("sliders")}
                {"Фильтры"}
                {move || {
                    let count = active_count();
                    if count > 0 {
                        view! { <span class="mobile-filters__badge">{count}</span> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </button>

            <Show when=move || is_open.get()>
                <div
                    class="mobile-filters__overlay"
                    on:click=move |_| set_is_open.set(false)
                ></div>
                <div class="mobile-filters__sheet">
                    <div class="mobile-filters__header">
                        <h2 class="mobile-filters__title">{"Фильтры"}</h2>
                        <button
                            class="mobile-filters__close"
                            title="Закрыть"
                            on:click=move |_| set_is_open.set(false)
                        >
                            {icon("x")}
                        </button>
                    </div>

                    <div class="mobile-filters__body">
                        <div class="filter-sidebar__section">
                            <h3 class="filter-sidebar__section-title">{"Категории"}</h3>
                            <CategoryTree state=state tree=tree />
                        </div>
                        <div class="filter-sidebar__section">
                            <h3 class="filter-sidebar__section-title">{"Производители"}</h3>
                            <ProducerFilter state=state manufacturers=manufacturers />
                        </div>
                    </div>

                    <div class="mobile-filters__footer">
                        {move || {
                            if state.with(|s| s.selection.has_active_filters()) {
                                view! {
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| on_clear.run(())
                                    >
                                        {"Сбросить"}
                                    </button>
                                }
                                    .into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                        <button
                            class="button button--primary mobile-filters__apply"
                            on:click=move |_| set_is_open.set(false)
                        >
                            {"Показать товары"}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
