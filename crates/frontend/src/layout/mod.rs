pub mod footer;
pub mod header;

pub use footer::Footer;
pub use header::Header;

use leptos::prelude::*;

/// Общий каркас страницы: шапка, содержимое, подвал.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Header />
            <main class="shell__content">{children()}</main>
            <Footer />
        </div>
    }
}
