//! Faraal 盒子业务服务
//!
//! 每个浏览会话拥有一个独立的盒子。所有会话放在同一把互斥锁后面，
//! 放入和移除因此是串行的，容量约束不会被并发请求打破。

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::gesture::{classify, GestureOutcome};
use super::model::{BoxEntry, BoxError, BoxView, FaraalBox, MutationOutcome};
use crate::app::catalog::Catalog;

/// 闲置超过该时长的会话在创建新会话时被清理
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// 同时保留的会话上限
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

struct Session {
    faraal_box: FaraalBox,
    touched_at: Instant,
}

/// 一次修改的返回值
#[derive(Debug, Clone, Serialize)]
pub struct BoxMutation {
    pub outcome: MutationOutcome,
    /// 放入成功时为 true，前端据此播放一次脉冲动画
    pub acknowledge: bool,
    pub entry: Option<BoxEntry>,
    #[serde(rename = "box")]
    pub view: BoxView,
}

impl BoxMutation {
    fn new(outcome: MutationOutcome, entry: Option<BoxEntry>, faraal_box: &FaraalBox) -> Self {
        Self {
            outcome,
            acknowledge: outcome == MutationOutcome::Added,
            entry,
            view: BoxView::from(faraal_box),
        }
    }
}

#[derive(Clone)]
pub struct BoxService {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    catalog: Arc<Catalog>,
    max_capacity: usize,
    drop_threshold: f64,
    max_sessions: usize,
    session_ttl: Duration,
}

impl BoxService {
    pub fn new(catalog: Arc<Catalog>, max_capacity: usize, drop_threshold: f64) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            catalog,
            max_capacity,
            drop_threshold,
            max_sessions: DEFAULT_MAX_SESSIONS,
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }

    /// 会话数上限，至少为 1
    pub fn with_session_limit(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn drop_threshold(&self) -> f64 {
        self.drop_threshold
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        // 锁内没有会 panic 的操作，中毒时直接取回数据
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn with_box<T>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut FaraalBox) -> T,
    ) -> Result<T, BoxError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| BoxError::SessionNotFound(session_id.to_string()))?;
        session.touched_at = Instant::now();
        Ok(f(&mut session.faraal_box))
    }

    /// 创建一个空盒子会话
    ///
    /// 先清理闲置会话；仍达到上限时淘汰最久未使用的会话。
    pub fn create(&self) -> (Uuid, BoxView) {
        let mut sessions = self.lock();

        let before = sessions.len();
        let ttl = self.session_ttl;
        sessions.retain(|_, s| s.touched_at.elapsed() < ttl);
        if sessions.len() < before {
            debug!("清理闲置盒子会话 {} 个", before - sessions.len());
        }

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.touched_at)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    warn!("盒子会话数达到上限 {}，淘汰 {}", self.max_sessions, id);
                }
                None => break,
            }
        }

        let id = Uuid::new_v4();
        let faraal_box = FaraalBox::new(self.max_capacity);
        let view = BoxView::from(&faraal_box);
        sessions.insert(
            id,
            Session {
                faraal_box,
                touched_at: Instant::now(),
            },
        );
        info!("创建盒子会话: {}", id);
        (id, view)
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    pub fn snapshot(&self, session_id: Uuid) -> Result<BoxView, BoxError> {
        self.with_box(session_id, |b| BoxView::from(&*b))
    }

    /// 放入商品（按钮与拖拽共用）
    ///
    /// 盒子已满时返回 `CapacityExceeded` 结果而不是错误。
    pub fn add(&self, session_id: Uuid, item_id: &str) -> Result<BoxMutation, BoxError> {
        let item = self
            .catalog
            .find(item_id)
            .ok_or_else(|| BoxError::UnknownItem(item_id.to_string()))?
            .clone();

        self.with_box(session_id, |faraal_box| match faraal_box.add_item(&item) {
            Ok(entry) => {
                let entry = entry.clone();
                info!(
                    "盒子 {} 放入 {} ({})，合计 {}",
                    session_id,
                    item.name,
                    entry.unique_id,
                    faraal_box.total()
                );
                BoxMutation::new(MutationOutcome::Added, Some(entry), faraal_box)
            }
            Err(e) => {
                warn!("盒子 {} 拒绝放入 {}: {}", session_id, item.id, e);
                BoxMutation::new(MutationOutcome::CapacityExceeded, None, faraal_box)
            }
        })
    }

    /// 处理一次完整的拖拽手势
    pub fn apply_gesture(
        &self,
        session_id: Uuid,
        item_id: &str,
        dx: f64,
        dy: f64,
    ) -> Result<BoxMutation, BoxError> {
        // 与按钮路径一致：未知商品无论拖多远都是错误
        if self.catalog.find(item_id).is_none() {
            return Err(BoxError::UnknownItem(item_id.to_string()));
        }

        match classify(item_id, dx, dy, self.drop_threshold) {
            GestureOutcome::Committed(item_id) => self.add(session_id, &item_id),
            GestureOutcome::Reverted => {
                debug!("盒子 {} 拖拽未越过阈值: ({}, {})", session_id, dx, dy);
                self.with_box(session_id, |b| {
                    BoxMutation::new(MutationOutcome::Reverted, None, b)
                })
            }
        }
    }

    /// 移除一项，不存在时为空操作
    pub fn remove(&self, session_id: Uuid, unique_id: &str) -> Result<BoxMutation, BoxError> {
        self.with_box(session_id, |faraal_box| {
            match faraal_box.remove_item(unique_id) {
                Some(entry) => {
                    info!("盒子 {} 移除 {}", session_id, entry.unique_id);
                    BoxMutation::new(MutationOutcome::Removed, Some(entry), faraal_box)
                }
                None => BoxMutation::new(MutationOutcome::Ignored, None, faraal_box),
            }
        })
    }

    pub fn clear(&self, session_id: Uuid) -> Result<BoxMutation, BoxError> {
        self.with_box(session_id, |faraal_box| {
            faraal_box.clear();
            info!("清空盒子 {}", session_id);
            BoxMutation::new(MutationOutcome::Cleared, None, faraal_box)
        })
    }

    /// 结账提交：取出当前内容并清空盒子
    pub fn take_for_checkout(&self, session_id: Uuid) -> Result<BoxView, BoxError> {
        self.with_box(session_id, |faraal_box| {
            let view = BoxView::from(&*faraal_box);
            faraal_box.clear();
            view
        })
    }
}
