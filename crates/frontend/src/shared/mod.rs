pub mod api_utils;
pub mod config;
pub mod navigation;
pub mod notify;
pub mod query;
