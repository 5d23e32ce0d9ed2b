use leptos::prelude::*;

use crate::domain::a001_product::CatalogService;
use crate::domain::a002_cart::ui::CartDrawer;
use crate::domain::a002_cart::CartStore;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::routes::RouterContext;
use crate::shared::components::FloatingHomeButton;

#[component]
pub fn App() -> impl IntoView {
    // Роутер, корзина и каталожный кэш доступны всему дереву через контекст
    let router = RouterContext::new();
    router.init_history_integration();
    provide_context(router);
    provide_context(CartStore::new());
    provide_context(CatalogService::new());

    view! {
        <Shell>
            <AppRoutes />
        </Shell>
        <CartDrawer />
        <FloatingHomeButton />
    }
}
