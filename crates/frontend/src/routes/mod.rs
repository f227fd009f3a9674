pub mod routes;

pub use routes::{ADVANTAGE_LIST_PATH, LOGIN_PATH};
