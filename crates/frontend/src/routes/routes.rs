use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

// ============================================================================
// Routes
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Каталог, опционально с поисковым запросом (`/?search=...`).
    Catalog { search: Option<String> },
    Product(String),
    Payment,
    Delivery,
    Contacts,
    About,
    NotFound,
}

/// Discriminant used by the route matcher, so pages survive parameter-only
/// navigation (a new search query must not remount the catalog page).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Catalog,
    Product,
    Payment,
    Delivery,
    Contacts,
    About,
    NotFound,
}

#[derive(Deserialize, Default)]
struct CatalogQuery {
    search: Option<String>,
}

impl Route {
    pub fn catalog() -> Self {
        Route::Catalog { search: None }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Route::Catalog { .. } => PageKind::Catalog,
            Route::Product(_) => PageKind::Product,
            Route::Payment => PageKind::Payment,
            Route::Delivery => PageKind::Delivery,
            Route::Contacts => PageKind::Contacts,
            Route::About => PageKind::About,
            Route::NotFound => PageKind::NotFound,
        }
    }

    pub fn parse(path: &str, query: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match segments.next() {
            None => {
                let params: CatalogQuery =
                    serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
                Route::Catalog {
                    search: params.search.filter(|s| !s.is_empty()),
                }
            }
            Some("product") => match segments.next() {
                Some(id) if !id.is_empty() => {
                    let id = urlencoding::decode(id)
                        .map(|c| c.into_owned())
                        .unwrap_or_else(|_| id.to_string());
                    Route::Product(id)
                }
                _ => Route::NotFound,
            },
            Some("payment") => Route::Payment,
            Some("delivery") => Route::Delivery,
            Some("contacts") => Route::Contacts,
            Some("about") => Route::About,
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Catalog { search: None } => "/".to_string(),
            Route::Catalog { search: Some(q) } => {
                format!("/?search={}", urlencoding::encode(q))
            }
            Route::Product(id) => format!("/product/{}", urlencoding::encode(id)),
            Route::Payment => "/payment".to_string(),
            Route::Delivery => "/delivery".to_string(),
            Route::Contacts => "/contacts".to_string(),
            Route::About => "/about".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    fn from_location() -> Self {
        let Some(w) = window() else {
            return Route::catalog();
        };
        let location = w.location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let query = location.search().unwrap_or_default();
        Route::parse(&path, &query)
    }
}

// ============================================================================
// Router context
// ============================================================================
#[derive(Clone, Copy)]
pub struct RouterContext {
    pub route: RwSignal<Route>,
}

impl RouterContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::from_location()),
        }
    }

    /// Keep the route signal in sync with browser back/forward navigation.
    pub fn init_history_integration(&self) {
        let route = self.route;
        let on_popstate = Closure::<dyn FnMut()>::new(move || {
            route.set(Route::from_location());
        });
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
        }
        on_popstate.forget();
    }

    /// Push the route into browser history and scroll back to the top, the
    /// way a full page navigation would.
    pub fn navigate(&self, route: Route) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(
                    &JsValue::NULL,
                    "",
                    Some(&route.to_path()),
                );
            }
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.route.set(route);
    }
}

impl Default for RouterContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext context not found")
}

/// Internal link that goes through the router instead of reloading the page.
#[component]
pub fn RouteLink(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                router.navigate(to.clone());
            }
        >
            {children()}
        </a>
    }
}

/// Отображение текущего маршрута в страницу. Матчится по [`PageKind`], а не
/// по самому [`Route`], чтобы смена только параметров (поиск, id товара) не
/// пересоздавала страницу.
#[component]
pub fn AppRoutes() -> impl IntoView {
    use crate::domain::a001_product::ui::details::ProductPage;
    use crate::domain::a001_product::ui::list::CatalogPage;
    use crate::system::pages::{
        AboutPage, ContactsPage, DeliveryPage, NotFoundPage, PaymentPage,
    };

    let router = use_router();
    let kind = Memo::new(move |_| router.route.with(Route::kind));

    view! {
        {move || match kind.get() {
            PageKind::Catalog => view! { <CatalogPage /> }.into_any(),
            PageKind::Product => view! { <ProductPage /> }.into_any(),
            PageKind::Payment => view! { <PaymentPage /> }.into_any(),
            PageKind::Delivery => view! { <DeliveryPage /> }.into_any(),
            PageKind::Contacts => view! { <ContactsPage /> }.into_any(),
            PageKind::About => view! { <AboutPage /> }.into_any(),
            PageKind::NotFound => view! { <NotFoundPage /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_route_table() {
        assert_eq!(Route::parse("/", ""), Route::catalog());
        assert_eq!(
            Route::parse("/", "?search=%D0%BB%D0%B0%D0%BC%D0%BF%D0%B0"),
            Route::Catalog {
                search: Some("лампа".to_string())
            }
        );
        assert_eq!(
            Route::parse("/product/abc-123", ""),
            Route::Product("abc-123".to_string())
        );
        assert_eq!(Route::parse("/payment", ""), Route::Payment);
        assert_eq!(Route::parse("/delivery", ""), Route::Delivery);
        assert_eq!(Route::parse("/contacts", ""), Route::Contacts);
        assert_eq!(Route::parse("/about", ""), Route::About);
        assert_eq!(Route::parse("/unknown", ""), Route::NotFound);
        assert_eq!(Route::parse("/product/", ""), Route::NotFound);
    }

    #[test]
    fn empty_search_collapses_to_plain_catalog() {
        assert_eq!(Route::parse("/", "?search="), Route::catalog());
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::catalog(),
            Route::Catalog {
                search: Some("лампа настольная".to_string()),
            },
            Route::Product("42".to_string()),
            Route::Payment,
            Route::Delivery,
            Route::Contacts,
            Route::About,
        ];
        for route in routes {
            let path = route.to_path();
            let (path, query) = path.split_once('?').unwrap_or((&path, ""));
            assert_eq!(Route::parse(path, query), route);
        }
    }
}
