pub mod floating_home;
pub mod optimized_image;

pub use floating_home::FloatingHomeButton;
pub use optimized_image::OptimizedImage;
