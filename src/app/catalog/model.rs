//! 商品目录数据模型

use serde::{Deserialize, Serialize};

/// 目录中的一件零食，加载后只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: u32,
    /// 规格说明，例如 "1 kg"
    #[serde(rename = "quantity", default)]
    pub quantity_label: Option<String>,
    #[serde(rename = "image")]
    pub image_ref: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl CatalogItem {
    /// 提示文字，例如 "₹150 for 1 kg"
    pub fn price_caption(&self) -> String {
        match &self.quantity_label {
            Some(qty) => format!("{} for {}", format_price(self.price), qty),
            None => format_price(self.price),
        }
    }
}

/// 只读商品目录
///
/// 目录规模在几十件以内，按 id 查找直接线性扫描。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 价格展示，例如 "₹150"
pub fn format_price<T: std::fmt::Display>(price: T) -> String {
    format!("₹{}", price)
}
