pub mod checkout;
pub mod store;
pub mod ui;

pub use store::{use_cart, CartStore};
