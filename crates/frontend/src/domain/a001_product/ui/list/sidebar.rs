use contracts::domain::a001_product::{CategoryNode, FacetCount};
use leptos::prelude::*;

use super::facets::{CategoryTree, ProducerFilter};
use super::state::{CatalogListState, ViewMode};
use crate::shared::icons::icon;

/// Боковая панель каталога: режим отображения, дерево категорий с типами и
/// список производителей с поиском. На узких экранах скрыта, там её заменяет
/// мобильная шторка фильтров.
#[component]
pub fn FilterSidebar(
    state: RwSignal<CatalogListState>,
    manufacturers: Memo<Vec<FacetCount>>,
    tree: Memo<Vec<CategoryNode>>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let (producers_open, set_producers_open) = signal(true);

    view! {
        <aside class="filter-sidebar">
            <div class="filter-sidebar__header">
                <h2 class="filter-sidebar__title">{"Фильтры"}</h2>
                {move || {
                    if state.with(|s| s.selection.has_active_filters()) {
                        view! {
                            <button
                                class="filter-sidebar__reset"
                                on:click=move |_| on_clear.run(())
                            >
                                {icon("x")}
                                {"Сброс"}
                            </button>
                        }
                            .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>

            // Режим отображения
            <div class="filter-sidebar__view-toggle">
                <button
                    class=move || {
                        if state.with(|s| s.view_mode == ViewMode::Grid) {
                            "view-toggle__button view-toggle__button--active"
                        } else {
                            "view-toggle__button"
                        }
                    }
                    title="Плитка"
                    on:click=move |_| state.update(|s| s.view_mode = ViewMode::Grid)
                >
                    {icon("layout-grid")}
                </button>
                <button
                    class=move || {
                        if state.with(|s| s.view_mode == ViewMode::Compact) {
                            "view-toggle__button view-toggle__button--active"
                        } else {
                            "view-toggle__button"
                        }
                    }
                    title="Список"
                    on:click=move |_| state.update(|s| s.view_mode = ViewMode::Compact)
                >
                    {icon("list")}
                </button>
            </div>

            // Категории
            <div class="filter-sidebar__section">
                <h3 class="filter-sidebar__section-title">{"Категории"}</h3>
                <CategoryTree state=state tree=tree />
            </div>

            // Производители
            <div class="filter-sidebar__section">
                <button
                    class="filter-sidebar__section-toggle"
                    on:click=move |_| set_producers_open.update(|open| *open = !*open)
                >
                    <h3 class="filter-sidebar__section-title">{"Производители"}</h3>
                    {move || {
                        if producers_open.get() {
                            icon("chevron-down")
                        } else {
                            icon("chevron-right")
                        }
                    }}
                </button>
                {move || {
                    if !producers_open.get() {
                        return view! { <></> }.into_any();
                    }
                    view! { <ProducerFilter state=state manufacturers=manufacturers /> }
                        .into_any()
                }}
            </div>
        </aside>
    }
}
