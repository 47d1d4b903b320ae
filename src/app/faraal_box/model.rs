//! Faraal 盒子数据模型
//!
//! 盒子是一个有容量上限的有序列表。同一件商品可以多次放入，
//! 每次放入都会生成独立的 `unique_id`，不会合并为数量。

use serde::Serialize;

use crate::app::catalog::CatalogItem;

/// 盒子中的一项
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxEntry {
    pub unique_id: String,
    #[serde(flatten)]
    pub item: CatalogItem,
}

/// 盒子相关错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoxError {
    #[error("盒子已满，最多容纳 {capacity} 件")]
    CapacityExceeded { capacity: usize },
    #[error("商品不存在: {0}")]
    UnknownItem(String),
    #[error("盒子会话不存在: {0}")]
    SessionNotFound(String),
}

/// 盒子状态容器
#[derive(Debug, Clone)]
pub struct FaraalBox {
    entries: Vec<BoxEntry>,
    max_capacity: usize,
    next_seq: u64,
}

impl FaraalBox {
    pub fn new(max_capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_capacity),
            max_capacity,
            next_seq: 1,
        }
    }

    /// 放入一件商品
    ///
    /// 盒子已满时不做任何修改并返回 `CapacityExceeded`。
    pub fn add_item(&mut self, item: &CatalogItem) -> Result<&BoxEntry, BoxError> {
        if self.entries.len() >= self.max_capacity {
            return Err(BoxError::CapacityExceeded {
                capacity: self.max_capacity,
            });
        }

        // 序号只增不减，移除后也不会复用
        let unique_id = format!("{}-{}", item.id, self.next_seq);
        self.next_seq += 1;

        self.entries.push(BoxEntry {
            unique_id,
            item: item.clone(),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// 按 `unique_id` 移除，不存在时静默忽略
    pub fn remove_item(&mut self, unique_id: &str) -> Option<BoxEntry> {
        let index = self.entries.iter().position(|e| e.unique_id == unique_id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[BoxEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.max_capacity
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// 距离装满还差几件
    pub fn remaining(&self) -> usize {
        self.max_capacity - self.entries.len()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.item.price)).sum()
    }

    /// 容量进度 `len / max_capacity`
    pub fn fill_ratio(&self) -> f64 {
        self.entries.len() as f64 / self.max_capacity as f64
    }
}

/// 对外展示的盒子快照
#[derive(Debug, Clone, Serialize)]
pub struct BoxView {
    pub entries: Vec<BoxEntry>,
    pub count: usize,
    pub max_capacity: usize,
    pub remaining: usize,
    pub total: u64,
    pub is_full: bool,
    pub fill_percent: f64,
}

impl From<&FaraalBox> for BoxView {
    fn from(faraal_box: &FaraalBox) -> Self {
        Self {
            entries: faraal_box.entries().to_vec(),
            count: faraal_box.len(),
            max_capacity: faraal_box.max_capacity(),
            remaining: faraal_box.remaining(),
            total: faraal_box.total(),
            is_full: faraal_box.is_full(),
            fill_percent: faraal_box.fill_ratio() * 100.0,
        }
    }
}

/// 一次修改的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    Added,
    Removed,
    Cleared,
    /// 盒子已满，本次放入为空操作
    CapacityExceeded,
    /// 拖拽未越过阈值，商品回到原位
    Reverted,
    /// 要移除的项不存在
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snack(id: &str, price: u32) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("Snack {}", id),
            price,
            quantity_label: None,
            image_ref: format!("/assets/{}.png", id),
            color: None,
        }
    }

    #[test]
    fn test_total_tracks_every_add() {
        let mut faraal_box = FaraalBox::new(4);
        faraal_box.add_item(&snack("chivda", 120)).unwrap();
        assert_eq!(faraal_box.total(), 120);
        faraal_box.add_item(&snack("chakli", 150)).unwrap();
        assert_eq!(faraal_box.total(), 270);
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut faraal_box = FaraalBox::new(4);
        let item = snack("chakli", 150);
        for _ in 0..4 {
            assert!(faraal_box.add_item(&item).is_ok());
        }
        assert!(faraal_box.is_full());

        let err = faraal_box.add_item(&item).unwrap_err();
        assert_eq!(err, BoxError::CapacityExceeded { capacity: 4 });
        assert_eq!(faraal_box.len(), 4);
        assert_eq!(faraal_box.total(), 600);
        assert!(faraal_box.is_full());

        for _ in 0..10 {
            let _ = faraal_box.add_item(&item);
            assert!(faraal_box.len() <= 4);
        }
    }

    #[test]
    fn test_same_item_twice_gives_distinct_entries() {
        let mut faraal_box = FaraalBox::new(4);
        let item = snack("chakli", 150);
        let first = faraal_box.add_item(&item).unwrap().unique_id.clone();
        let second = faraal_box.add_item(&item).unwrap().unique_id.clone();
        assert_ne!(first, second);
        assert_eq!(faraal_box.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut faraal_box = FaraalBox::new(4);
        faraal_box.add_item(&snack("chakli", 150)).unwrap();

        assert!(faraal_box.remove_item("nope-99").is_none());
        assert_eq!(faraal_box.len(), 1);
        assert_eq!(faraal_box.total(), 150);
    }

    #[test]
    fn test_remove_then_add_never_reuses_ids() {
        let mut faraal_box = FaraalBox::new(2);
        let item = snack("chakli", 150);
        let first = faraal_box.add_item(&item).unwrap().unique_id.clone();
        let removed = faraal_box.remove_item(&first).unwrap();
        assert_eq!(removed.unique_id, first);
        assert_eq!(faraal_box.total(), 0);

        let again = faraal_box.add_item(&item).unwrap().unique_id.clone();
        assert_ne!(first, again);
    }

    #[test]
    fn test_fill_ratio_and_remaining() {
        let mut faraal_box = FaraalBox::new(4);
        assert_eq!(faraal_box.fill_ratio(), 0.0);
        assert_eq!(faraal_box.remaining(), 4);

        faraal_box.add_item(&snack("a", 10)).unwrap();
        assert_eq!(faraal_box.fill_ratio(), 0.25);
        assert_eq!(faraal_box.remaining(), 3);

        let view = BoxView::from(&faraal_box);
        assert_eq!(view.fill_percent, 25.0);
        assert_eq!(view.count, 1);
        assert!(!view.is_full);
    }

    #[test]
    fn test_clear_empties_box() {
        let mut faraal_box = FaraalBox::new(4);
        faraal_box.add_item(&snack("a", 10)).unwrap();
        faraal_box.add_item(&snack("b", 20)).unwrap();
        faraal_box.clear();
        assert!(faraal_box.is_empty());
        assert_eq!(faraal_box.total(), 0);
    }
}
