//! JSON 接口的错误处理
//!
//! 页面路由自己渲染 404 页面，只有 `/api` 下的处理器返回 [`CoreError`]。

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::app::faraal_box::model::BoxError;

#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    /// 请求体无法解析
    Unprocessable(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    fn parts(self) -> (StatusCode, &'static str, String) {
        match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CoreError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE_ENTITY", msg)
            }
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error, message) = self.parts();
        let body = ErrorResponse {
            error: error.to_string(),
            message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<BoxError> for CoreError {
    fn from(err: BoxError) -> Self {
        match err {
            BoxError::UnknownItem(_) | BoxError::SessionNotFound(_) => {
                CoreError::NotFound(err.to_string())
            }
            // 服务层已把满盒放入转换为空操作结果
            BoxError::CapacityExceeded { .. } => CoreError::BadRequest(err.to_string()),
        }
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::Unprocessable(format!("请求体无效: {}", rejection.body_text()))
    }
}
