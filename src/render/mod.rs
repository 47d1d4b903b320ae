//! 页面布局渲染

pub mod layout;

pub use layout::{banner_text, not_found_page, page, PageMeta};
