pub mod routes;

pub use routes::{use_router, Route, RouteLink, RouterContext};
