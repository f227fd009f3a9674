pub mod storage;

pub use storage::{LocalStorageTokens, TokenSource};
