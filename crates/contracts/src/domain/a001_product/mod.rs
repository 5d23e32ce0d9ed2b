pub mod aggregate;
pub mod facets;
pub mod filter;
pub mod paging;

pub use aggregate::{prepare_catalog, Product, NO_CATEGORY_LABEL, ORDER_LAST};
pub use facets::{category_tree, manufacturer_facets, CategoryNode, FacetCount};
pub use filter::{apply_filters, seeded_shuffle, FilterSelection, SHUFFLE_MIN_RESULTS};
pub use paging::{page_numbers, page_slice, total_pages, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
