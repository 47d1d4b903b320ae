//! 页面处理器

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Json},
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{model::partition_by_month, view};
use crate::app::faraal_box::view as box_view;
use crate::core::html::QueryState;
use crate::core::response::ApiResponse;
use crate::render::{not_found_page, page, PageMeta};
use crate::state::AppState;
use crate::widgets::{carousel::CarouselRequest, hero, hotspot, parallax::Parallax};

/// 首页查询参数
///
/// 除 `pulse` 外都会保留在页面内的链接里。
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(rename = "box")]
    pub box_id: Option<String>,
    pub pulse: Option<String>,
    pub product: Option<String>,
    pub slide: Option<String>,
    pub play: Option<String>,
    pub spot: Option<String>,
}

impl HomeQuery {
    fn links(&self, box_id: Uuid) -> QueryState {
        let keep = |value: &Option<String>| value.clone().unwrap_or_default();
        QueryState::new()
            .set("box", box_id.to_string())
            .set("product", keep(&self.product))
            .set("slide", keep(&self.slide))
            .set("play", keep(&self.play))
            .set("spot", keep(&self.spot))
    }
}

/// 首页
///
/// `?box=` 指向有效会话时沿用该盒子，否则新建一个。页面本身不会失败。
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Html<String> {
    // 查到即用，中途被清理的会话同样回退为新建
    let (box_id, box_state) = query
        .box_id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id).ok())
        .and_then(|id| state.box_service.snapshot(id).ok().map(|view| (id, view)))
        .unwrap_or_else(|| state.box_service.create());
    let links = query.links(box_id);

    let site = &state.site;
    let assets = &state.assets;

    let mut parallax = Parallax::new("/assets/chakali-homepage.png");
    parallax.opacity = 0.2;

    let promise = &site.ingredient_promise;
    let promise_html = if promise.active {
        hotspot::render_promise(
            &promise.title,
            &promise.subtitle,
            &promise.products,
            promise.default_product_id.as_deref(),
            &links,
            assets,
        )
    } else {
        String::new()
    };

    let body = format!(
        r#"{parallax}
<div class="max-w-7xl mx-auto px-4 md:px-8 py-8 md:py-12">
{hero}
{faraal_box}
{promise}
{product_links}
{info_cards}
<div class="grid md:grid-cols-2 gap-6 mb-16">{subscription}{special}</div>
{why}
{third_party}
</div>"#,
        parallax = parallax.render(assets),
        hero = hero::render(
            &site.hero,
            CarouselRequest::parse(query.slide.as_deref(), query.play.as_deref()),
            &links,
            assets
        ),
        faraal_box = box_view::render_section(
            &site.faraal_box,
            box_id,
            &box_state,
            query.pulse.as_deref() == Some("1"),
            assets
        ),
        promise = promise_html,
        product_links = view::render_product_links(&site.product_links, assets),
        info_cards = view::render_info_cards(&site.info_cards, assets),
        subscription = view::render_subscription(&site.subscription),
        special = view::render_featured_special(&site.featured_special, assets),
        why = view::render_why_puneri(&site.why_puneri),
        third_party = view::render_third_party_links(&site.third_party_links, assets),
    );

    let meta = PageMeta::new("/");
    Html(page(site, assets, &meta, &body))
}

pub async fn sweet(State(state): State<AppState>) -> Html<String> {
    let body = view::render_sweets(&state.site.sweets, &state.assets);
    let meta = PageMeta::new("/sweet").title("Sweet (God) | Cmaa-foods");
    Html(page(&state.site, &state.assets, &meta, &body))
}

/// 按服务器本地月份拆分季节商品
pub async fn seasonal(State(state): State<AppState>) -> Html<String> {
    let month = chrono::Local::now().month();
    let (available, upcoming) = partition_by_month(&state.site.seasonal, month);
    debug!(
        "季节商品: 当前月份 {}，在售 {}，即将上市 {}",
        month,
        available.len(),
        upcoming.len()
    );
    let body = view::render_seasonal(&available, &upcoming, &state.assets);
    let meta = PageMeta::new("/seasonal").title("Seasonal Specials | Cmaa-foods");
    Html(page(&state.site, &state.assets, &meta, &body))
}

#[derive(Debug, Default, Deserialize)]
pub struct SpotQuery {
    pub spot: Option<String>,
}

pub async fn golden_chivda(
    State(state): State<AppState>,
    Query(query): Query<SpotQuery>,
) -> Html<String> {
    let body = view::render_golden_chivda(query.spot.as_deref(), &state.assets);
    let meta = PageMeta::new("/product/golden-chivda")
        .title("Puneri Golden Chivda | Cmaa-foods")
        .description("Thick Dagadi Poha fried to a golden crisp. ₹120 / 250g pack.");
    Html(page(&state.site, &state.assets, &meta, &body))
}

/// 没有详情页的商品
pub async fn product_not_found(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    debug!("商品详情不存在: {}", id);
    let path = format!("/product/{}", id);
    (
        StatusCode::NOT_FOUND,
        Html(not_found_page(
            &state.site,
            &state.assets,
            &path,
            "Product Not Found",
        )),
    )
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub snacks: usize,
    pub blog_posts: usize,
    pub box_sessions: usize,
    pub timestamp: String,
}

pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(HealthStatus {
        status: "ok",
        snacks: state.box_service.catalog().len(),
        blog_posts: state.site.blog_posts.len(),
        box_sessions: state.box_service.session_count(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
