//! 商品目录

pub mod model;

pub use model::{format_price, Catalog, CatalogItem};
