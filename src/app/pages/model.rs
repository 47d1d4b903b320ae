//! 页面数据模型

use chrono::Month;
use serde::Deserialize;

/// 列表页中的商品
#[derive(Debug, Clone, Deserialize)]
pub struct ListingProduct {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub description: String,
    pub image: String,
    pub color: Option<String>,
}

/// 季节限定商品
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonalProduct {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub description: String,
    pub image: String,
    pub color: Option<String>,
    /// 例如 "October-November" 或 "March-April, September-October"
    pub season: String,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeasonError {
    #[error("季节表达式为空")]
    Empty,
    #[error("无法识别的月份: {0}")]
    UnknownMonth(String),
}

/// 一组月份区间，区间可以跨年（例如 November-February）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    ranges: Vec<(u32, u32)>,
}

fn parse_month(name: &str) -> Result<u32, SeasonError> {
    name.trim()
        .parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| SeasonError::UnknownMonth(name.trim().to_string()))
}

impl Season {
    pub fn parse(expr: &str) -> Result<Self, SeasonError> {
        let mut ranges = Vec::new();
        for part in expr.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let range = match part.split_once('-') {
                Some((start, end)) => (parse_month(start)?, parse_month(end)?),
                None => {
                    let month = parse_month(part)?;
                    (month, month)
                }
            };
            ranges.push(range);
        }
        if ranges.is_empty() {
            return Err(SeasonError::Empty);
        }
        Ok(Self { ranges })
    }

    /// `month` 取值 1-12
    pub fn contains(&self, month: u32) -> bool {
        self.ranges.iter().any(|&(start, end)| {
            if start <= end {
                (start..=end).contains(&month)
            } else {
                month >= start || month <= end
            }
        })
    }
}

impl SeasonalProduct {
    /// 表达式无法解析时视为不在售
    pub fn in_season(&self, month: u32) -> bool {
        Season::parse(&self.season)
            .map(|s| s.contains(month))
            .unwrap_or(false)
    }
}

/// 按当前月份拆分为 (在售, 即将上市)，保持原顺序
pub fn partition_by_month(
    products: &[SeasonalProduct],
    month: u32,
) -> (Vec<&SeasonalProduct>, Vec<&SeasonalProduct>) {
    products.iter().partition(|p| p.in_season(month))
}
