//! # Cmaa-foods 店面
//!
//! 服务端渲染的浦那小吃店面，包含 Faraal 盒子组装、搜索、博客与模拟结账。
//!
//! 分层与目录：
//! - `app`：各业务模块（处理器、服务、模型、视图）
//! - `core`：错误、响应、中间件、HTML 工具
//! - `render` / `widgets`：页面框架与可复用组件
//! - `infrastructure`：日志等底层设施

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod render;
pub mod site;
pub mod state;
pub mod widgets;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    middleware,
    response::{Html, IntoResponse},
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::{blog, checkout, faraal_box, pages, search};
use crate::core::middleware::request_logging_middleware;
use crate::render::not_found_page;
pub use crate::state::AppState;

/// 前端交互脚本：搜索浮层、拖拽手势、视频轮播
const STOREFRONT_JS: &str = include_str!("../public/storefront.js");

async fn storefront_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        STOREFRONT_JS,
    )
}

async fn fallback(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(not_found_page(
            &state.site,
            &state.assets,
            uri.path(),
            "Page Not Found",
        )),
    )
}

/// 构建完整路由
///
/// 配置了部署前缀时，所有路由挂在该前缀下。
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let routes = Router::new()
        // 页面
        .route("/", get(pages::handler::home))
        .route("/sweet", get(pages::handler::sweet))
        .route("/seasonal", get(pages::handler::seasonal))
        .route("/product/golden-chivda", get(pages::handler::golden_chivda))
        .route("/product/:id", get(pages::handler::product_not_found))
        .route("/blog", get(blog::handler::index))
        .route("/blog/:slug", get(blog::handler::show))
        .route(
            "/checkout",
            get(checkout::handler::show).post(checkout::handler::submit),
        )
        .route("/search", get(search::handler::search_fragment))
        // 盒子表单与片段
        .route("/box/:id", get(faraal_box::handler::panel_fragment))
        .route("/box/:id/add", post(faraal_box::handler::add_form))
        .route("/box/:id/remove", post(faraal_box::handler::remove_form))
        // JSON 接口
        .route("/api/search", get(search::handler::search_api))
        .route("/api/box", post(faraal_box::handler::create_box))
        .route(
            "/api/box/:id",
            get(faraal_box::handler::get_box).delete(faraal_box::handler::clear_box),
        )
        .route("/api/box/:id/items", post(faraal_box::handler::add_item))
        .route(
            "/api/box/:id/items/:unique_id",
            delete(faraal_box::handler::remove_item),
        )
        .route(
            "/api/box/:id/gestures",
            post(faraal_box::handler::apply_gesture),
        )
        .route("/health", get(pages::handler::health))
        // 静态资源
        .route("/static/storefront.js", get(storefront_js))
        .nest_service("/assets", ServeDir::new(&config.deployment.assets_dir))
        .fallback(fallback);

    // 前缀之外的地址同样走 404 页面
    let base_path = config.deployment.base_path.as_str();
    let router = if base_path.is_empty() {
        routes
    } else {
        Router::new().nest(base_path, routes).fallback(fallback)
    };

    router
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.http.timeout_seconds,
        )))
        .with_state(state)
}
