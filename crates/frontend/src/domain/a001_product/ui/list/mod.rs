pub mod facets;
pub mod mobile;
pub mod sidebar;
pub mod state;
pub mod widget;

pub use widget::CatalogPage;
