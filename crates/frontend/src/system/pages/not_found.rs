use leptos::prelude::*;

use crate::routes::{Route, RouteLink};
use crate::shared::icons::icon;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="info-page info-page--not-found">
            <h1 class="info-page__title">{"404"}</h1>
            <p class="info-page__intro">{"Такой страницы нет."}</p>
            <RouteLink to=Route::catalog() class="button button--primary">
                {icon("arrow-left")}
                {"На главную"}
            </RouteLink>
        </div>
    }
}
