//! 拖拽手势分类
//!
//! 状态机：`Idle -> Dragging -> Committed | Reverted`。
//! 只有 `Committed` 会触发放入盒子，与 "+" 按钮走同一条路径。

use serde::Serialize;

/// 默认放入阈值
pub const DEFAULT_DROP_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    Idle,
    Dragging { item_id: String, dx: f64, dy: f64 },
    Committed(String),
    Reverted,
}

/// 手势松开后的判定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "item_id", rename_all = "snake_case")]
pub enum GestureOutcome {
    Committed(String),
    Reverted,
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    state: GestureState,
    threshold: f64,
}

impl DragGesture {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: GestureState::Idle,
            threshold,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// 按下商品卡片开始拖拽，上一次手势的结果被丢弃
    pub fn start(&mut self, item_id: impl Into<String>) {
        self.state = GestureState::Dragging {
            item_id: item_id.into(),
            dx: 0.0,
            dy: 0.0,
        };
    }

    /// 更新相对起点的位移，非拖拽状态下忽略
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let GestureState::Dragging { dx, dy, .. } = &mut self.state {
            *dx = x;
            *dy = y;
        }
    }

    /// 松开
    ///
    /// 向右或向下（朝盒子方向）任一轴位移超过阈值即判定为放入。
    /// 未处于拖拽状态时返回 `None`。
    pub fn release(&mut self) -> Option<GestureOutcome> {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Dragging { item_id, dx, dy } => {
                if dx > self.threshold || dy > self.threshold {
                    self.state = GestureState::Committed(item_id.clone());
                    Some(GestureOutcome::Committed(item_id))
                } else {
                    self.state = GestureState::Reverted;
                    Some(GestureOutcome::Reverted)
                }
            }
            other => {
                self.state = other;
                None
            }
        }
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(DEFAULT_DROP_THRESHOLD)
    }
}

/// 一次性判定完整手势：开始、移动到 (dx, dy)、松开
pub fn classify(item_id: &str, dx: f64, dy: f64, threshold: f64) -> GestureOutcome {
    let mut gesture = DragGesture::new(threshold);
    gesture.start(item_id);
    gesture.drag_to(dx, dy);
    gesture.release().unwrap_or(GestureOutcome::Reverted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_drag_reverts() {
        assert_eq!(classify("2", 50.0, 0.0, 100.0), GestureOutcome::Reverted);
        assert_eq!(classify("2", 100.0, 100.0, 100.0), GestureOutcome::Reverted);
    }

    #[test]
    fn test_long_drag_commits() {
        assert_eq!(
            classify("2", 150.0, 0.0, 100.0),
            GestureOutcome::Committed("2".to_string())
        );
        assert_eq!(
            classify("2", 0.0, 150.0, 100.0),
            GestureOutcome::Committed("2".to_string())
        );
    }

    #[test]
    fn test_drag_away_from_box_reverts() {
        assert_eq!(classify("2", -150.0, -150.0, 100.0), GestureOutcome::Reverted);
    }

    #[test]
    fn test_release_only_once_per_gesture() {
        let mut gesture = DragGesture::default();
        gesture.start("2");
        gesture.drag_to(40.0, 10.0);
        gesture.drag_to(160.0, 10.0);
        assert_eq!(
            gesture.release(),
            Some(GestureOutcome::Committed("2".to_string()))
        );
        assert_eq!(gesture.state(), &GestureState::Committed("2".to_string()));

        // 第二次松开没有对应的拖拽
        assert_eq!(gesture.release(), None);
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut gesture = DragGesture::default();
        gesture.drag_to(500.0, 500.0);
        assert_eq!(gesture.state(), &GestureState::Idle);
        assert_eq!(gesture.release(), None);
    }
}
