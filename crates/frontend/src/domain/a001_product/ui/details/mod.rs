pub mod page;

pub use page::ProductPage;
