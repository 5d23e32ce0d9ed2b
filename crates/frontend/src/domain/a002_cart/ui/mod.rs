pub mod drawer;

pub use drawer::CartDrawer;
