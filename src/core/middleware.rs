//! 请求日志中间件

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 为每个请求分配 ID 并记录耗时
///
/// 静态资源只在 debug 级别记录，5xx 记为 warn。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_asset = path.contains("/assets/") || path.contains("/static/");

    let mut response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    if status.is_server_error() {
        warn!(%request_id, %method, %path, status = status.as_u16(), elapsed_ms, "请求失败");
    } else if is_asset {
        debug!(%request_id, %method, %path, status = status.as_u16(), elapsed_ms, "静态资源");
    } else {
        info!(%request_id, %method, %path, status = status.as_u16(), elapsed_ms, "请求完成");
    }

    response
}
