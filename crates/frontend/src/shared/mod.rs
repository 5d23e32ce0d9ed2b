pub mod components;
pub mod icons;
pub mod query_cache;
pub mod site_config;
pub mod storage;
