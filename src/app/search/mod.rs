//! 站内搜索

pub mod handler;
pub mod model;
pub mod service;

pub use model::{ResultKind, SearchResult};
pub use service::SearchService;
