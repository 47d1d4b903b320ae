//! 结账服务
//!
//! 提交只是一次固定时长的等待，没有重试也不能取消。

use std::time::Duration;
use tracing::{info, warn};
use validator::{Validate, ValidationErrors};

use super::model::{CheckoutForm, OrderConfirmation};
use crate::app::faraal_box::{BoxError, BoxService, BoxView};

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("表单验证失败: {0}")]
    Invalid(#[from] ValidationErrors),
}

#[derive(Clone)]
pub struct CheckoutService {
    box_service: BoxService,
    submit_delay: Duration,
}

impl CheckoutService {
    pub fn new(box_service: BoxService, submit_delay: Duration) -> Self {
        Self {
            box_service,
            submit_delay,
        }
    }

    /// 结账页展示的盒子内容，会话不存在时视为空
    pub fn summary(&self, box_id: Option<uuid::Uuid>) -> Option<BoxView> {
        box_id.and_then(|id| self.box_service.snapshot(id).ok())
    }

    pub async fn submit(&self, form: CheckoutForm) -> Result<OrderConfirmation, CheckoutError> {
        let form = form.normalized();
        form.validate()?;

        tokio::time::sleep(self.submit_delay).await;

        let taken = match form.box_session() {
            Some(id) => match self.box_service.take_for_checkout(id) {
                Ok(view) => Some(view),
                Err(BoxError::SessionNotFound(_)) => None,
                Err(e) => {
                    warn!("结账时读取盒子失败: {}", e);
                    None
                }
            },
            None => None,
        };
        let (items, total) = taken.map(|v| (v.count, v.total)).unwrap_or((0, 0));

        let order = OrderConfirmation::new(form.payment_method, items, total);
        info!(
            "模拟下单 {}: {} 件，合计 {}，支付方式 {}",
            order.order_id,
            order.items,
            order.total,
            order.payment_method.value()
        );
        Ok(order)
    }
}
