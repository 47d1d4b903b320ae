//! 搜索数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Product,
    Blog,
    Page,
}

impl ResultKind {
    pub fn label(self) -> &'static str {
        match self {
            ResultKind::Product => "product",
            ResultKind::Blog => "blog",
            ResultKind::Page => "page",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// 可被搜索到的静态页面
pub(crate) struct PageEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub keywords: &'static [&'static str],
}

pub(crate) const PAGES: [PageEntry; 3] = [
    PageEntry {
        title: "Home",
        url: "/",
        keywords: &["home", "main", "landing"],
    },
    PageEntry {
        title: "Sweet (God)",
        url: "/sweet",
        keywords: &["sweet", "god", "ladoo", "barfi"],
    },
    PageEntry {
        title: "Seasonal",
        url: "/seasonal",
        keywords: &["seasonal", "festival", "special"],
    },
];
