pub mod api;
pub mod ui;

pub use api::{use_catalog, CatalogService};
