use contracts::domain::a001_product::{CategoryNode, FacetCount};
use leptos::prelude::*;

use super::state::CatalogListState;
use crate::shared::icons::icon;

/// Дерево категорий с раскрывающимися типами. Используется и в боковой
/// панели, и в мобильной шторке фильтров.
#[component]
pub fn CategoryTree(
    state: RwSignal<CatalogListState>,
    tree: Memo<Vec<CategoryNode>>,
) -> impl IntoView {
    view! {
        <ul class="category-tree">
            {move || {
                tree.get()
                    .into_iter()
                    .map(|node| {
                        let name = node.name.clone();
                        let has_types = node.has_types();
                        let selected = state
                            .with(|s| s.selection.categories.iter().any(|c| *c == node.name));
                        let expanded = state
                            .with(|s| s.expanded_category.as_deref() == Some(node.name.as_str()));
                        let click_name = name.clone();
                        view! {
                            <li class="category-tree__item">
                                <button
                                    class=if selected {
                                        "category-tree__button category-tree__button--active"
                                    } else {
                                        "category-tree__button"
                                    }
                                    on:click=move |_| {
                                        state
                                            .update(|s| s.click_category(&click_name, has_types))
                                    }
                                >
                                    {if has_types {
                                        if expanded {
                                            icon("chevron-down")
                                        } else {
                                            icon("chevron-right")
                                        }
                                    } else {
                                        view! { <></> }.into_any()
                                    }}
                                    <span class="category-tree__name">{name.clone()}</span>
                                    <span class="category-tree__count">{node.count}</span>
                                </button>
                                {if expanded {
                                    view! {
                                        <ul class="category-tree__types">
                                            {node
                                                .types
                                                .iter()
                                                .map(|t| {
                                                    let type_name = t.name.clone();
                                                    let type_selected = state
                                                        .with(|s| {
                                                            s.selection.types.iter().any(|sel| *sel == t.name)
                                                        });
                                                    view! {
                                                        <li>
                                                            <button
                                                                class=if type_selected {
                                                                    "category-tree__type category-tree__type--active"
                                                                } else {
                                                                    "category-tree__type"
                                                                }
                                                                on:click=move |_| {
                                                                    state.update(|s| s.click_type(&type_name))
                                                                }
                                                            >
                                                                <span class="category-tree__name">
                                                                    {t.name.clone()}
                                                                </span>
                                                                <span class="category-tree__count">{t.count}</span>
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

/// Список производителей с поиском и чекбоксами. Чекбоксы независимые,
/// в отличие от одиночного выбора в дереве категорий.
#[component]
pub fn ProducerFilter(
    state: RwSignal<CatalogListState>,
    manufacturers: Memo<Vec<FacetCount>>,
) -> impl IntoView {
    let visible_manufacturers = move || {
        let needle = state.with(|s| s.manufacturer_search.to_lowercase());
        manufacturers
            .get()
            .into_iter()
            .filter(|facet| needle.is_empty() || facet.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="filter-sidebar__producers">
            <div class="filter-sidebar__search">
                {icon("search")}
                <input
                    type="text"
                    placeholder="Поиск производителя"
                    prop:value=move || state.with(|s| s.manufacturer_search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.manufacturer_search = value);
                    }
                />
            </div>
            <ul class="producer-list">
                {move || {
                    visible_manufacturers()
                        .into_iter()
                        .map(|facet| {
                            let name = facet.name.clone();
                            let checked = state
                                .with(|s| {
                                    s.selection.manufacturers.iter().any(|m| *m == facet.name)
                                });
                            view! {
                                <li>
                                    <label class="producer-list__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| {
                                                state.update(|s| s.toggle_manufacturer(&name))
                                            }
                                        />
                                        <span class="producer-list__name">{facet.name.clone()}</span>
                                        <span class="producer-list__count">{facet.count}</span>
                                    </label>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
