pub mod about;
pub mod contacts;
pub mod delivery;
pub mod not_found;
pub mod payment;

pub use about::AboutPage;
pub use contacts::ContactsPage;
pub use delivery::DeliveryPage;
pub use not_found::NotFoundPage;
pub use payment::PaymentPage;
