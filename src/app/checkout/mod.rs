//! 结账（模拟提交，不对接支付）

pub mod handler;
pub mod model;
pub mod service;
pub mod view;

pub use model::{CheckoutForm, OrderConfirmation, PaymentMethod};
pub use service::{CheckoutError, CheckoutService};
