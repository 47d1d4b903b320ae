//! 结账数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "cod", alias = "cash-on-delivery")]
    CashOnDelivery,
    #[serde(rename = "online")]
    Online,
}

impl PaymentMethod {
    pub fn value(self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cod",
            PaymentMethod::Online => "online",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Online => "Online Payment",
        }
    }
}

/// 结账表单
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(length(min = 1, message = "Full name is required"))]
    #[serde(default)]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[serde(default)]
    pub email: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    #[serde(default)]
    pub phone: String,

    #[validate(length(min = 1, message = "Address is required"))]
    #[serde(default)]
    pub address: String,

    #[validate(length(min = 1, message = "City is required"))]
    #[serde(default)]
    pub city: String,

    #[validate(length(min = 1, message = "Pincode is required"))]
    #[serde(default)]
    pub pincode: String,

    #[serde(default, alias = "paymentMethod")]
    pub payment_method: PaymentMethod,

    /// 关联的盒子会话，空字符串视为没有
    #[serde(default)]
    pub box_id: Option<String>,
}

impl CheckoutForm {
    /// 去掉首尾空白，只含空白的字段因此会被判定为缺失
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.address,
            &mut self.city,
            &mut self.pincode,
        ] {
            *field = field.trim().to_string();
        }
        self
    }

    pub fn box_session(&self) -> Option<Uuid> {
        self.box_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .and_then(|id| Uuid::parse_str(id).ok())
    }
}

/// 字段名到第一条错误信息
pub type FieldErrors = BTreeMap<String, String>;

pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                (field.to_string(), message)
            })
        })
        .collect()
}

/// 模拟下单结果
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub placed_at: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub items: usize,
    pub total: u64,
}

impl OrderConfirmation {
    pub fn new(payment_method: PaymentMethod, items: usize, total: u64) -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self {
            order_id: format!("ORD-{}", id[..8].to_uppercase()),
            placed_at: Utc::now(),
            payment_method,
            items,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Asha Kulkarni".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Paud Road".to_string(),
            city: "Pune".to_string(),
            pincode: "411038".to_string(),
            payment_method: PaymentMethod::CashOnDelivery,
            box_id: None,
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let form = CheckoutForm {
            name: "   ".to_string(),
            email: "not-an-email".to_string(),
            ..valid_form()
        }
        .normalized();
        let errors = field_errors(&form.validate().unwrap_err());
        assert_eq!(errors.get("name").map(String::as_str), Some("Full name is required"));
        assert_eq!(errors.get("email").map(String::as_str), Some("Invalid email format"));
        assert!(!errors.contains_key("city"));
    }

    #[test]
    fn test_payment_method_aliases() {
        let form: CheckoutForm =
            serde_json::from_str(r#"{"payment_method": "cash-on-delivery"}"#).unwrap();
        assert_eq!(form.payment_method, PaymentMethod::CashOnDelivery);

        let form: CheckoutForm = serde_json::from_str(r#"{"paymentMethod": "online"}"#).unwrap();
        assert_eq!(form.payment_method, PaymentMethod::Online);

        let form: CheckoutForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.payment_method, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_box_session_parsing() {
        let mut form = valid_form();
        form.box_id = Some(String::new());
        assert_eq!(form.box_session(), None);
        let id = Uuid::new_v4();
        form.box_id = Some(id.to_string());
        assert_eq!(form.box_session(), Some(id));
    }

    #[test]
    fn test_order_id_format() {
        let order = OrderConfirmation::new(PaymentMethod::Online, 4, 600);
        assert!(order.order_id.starts_with("ORD-"));
        assert_eq!(order.order_id.len(), 12);
    }
}
