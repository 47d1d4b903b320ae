use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use cmaa_foods::{build_router, config::AppConfig, site::SiteConfig, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(config: AppConfig) -> Router {
    let site = SiteConfig::builtin().unwrap();
    build_router(AppState::new(site, config))
}

fn app() -> Router {
    let mut config = AppConfig::default();
    config.checkout.submit_delay_ms = 0;
    app_with(config)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, text) = send(app, req).await;
    (status, serde_json::from_str(&text).unwrap())
}

async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

async fn create_box(app: &Router) -> String {
    let (status, json) = post_json(app, "/api/box", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    json["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_home_page_renders_sections() {
    let app = app();
    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Build Your Faraal Box"));
    assert!(html.contains(r#"id="faraal-box""#));
    assert!(html.contains("Your box is empty"));
    assert!(html.contains("FEATURED MONTHLY SPECIAL"));
    assert!(html.contains("/static/storefront.js"));
}

#[tokio::test]
async fn test_blog_pages() {
    let app = app();
    let (status, html) = get(&app, "/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/blog/our-story"));

    let (status, _) = get(&app, "/blog/our-story").await;
    assert_eq!(status, StatusCode::OK);

    let (status, html) = get(&app, "/blog/missing-post").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Post Not Found"));
}

#[tokio::test]
async fn test_listing_and_product_pages() {
    let app = app();
    let (status, html) = get(&app, "/sweet").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sweet (God)"));

    let (status, html) = get(&app, "/seasonal").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Seasonal Specials"));

    let (status, html) = get(&app, "/product/golden-chivda").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Hover over dots to see ingredients"));

    let (status, _) = get(&app, "/product/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, html) = get(&app, "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page Not Found"));
}

#[tokio::test]
async fn test_box_capacity_through_api() {
    let app = app();
    let id = create_box(&app).await;
    let items = format!("/api/box/{}/items", id);

    for expected in 1..=4 {
        let (status, json) = post_json(&app, &items, json!({ "item_id": "2" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["outcome"], "added");
        assert_eq!(json["data"]["acknowledge"], true);
        assert_eq!(json["data"]["box"]["count"], expected);
    }

    let (status, json) = post_json(&app, &items, json!({ "item_id": "2" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["outcome"], "capacity_exceeded");
    assert_eq!(json["data"]["acknowledge"], false);
    assert_eq!(json["data"]["box"]["count"], 4);
    assert_eq!(json["data"]["box"]["total"], 600);
    assert_eq!(json["data"]["box"]["is_full"], true);
}

#[tokio::test]
async fn test_gesture_and_remove() {
    let app = app();
    let id = create_box(&app).await;
    let gestures = format!("/api/box/{}/gestures", id);

    let (_, json) = post_json(
        &app,
        &gestures,
        json!({ "item_id": "2", "dx": 40.0, "dy": 20.0 }),
    )
    .await;
    assert_eq!(json["data"]["outcome"], "reverted");
    assert_eq!(json["data"]["box"]["count"], 0);

    let (_, json) = post_json(
        &app,
        &gestures,
        json!({ "item_id": "2", "dx": 20.0, "dy": 180.0 }),
    )
    .await;
    assert_eq!(json["data"]["outcome"], "added");
    let unique_id = json["data"]["entry"]["unique_id"].as_str().unwrap().to_string();

    let remove = Request::delete(format!("/api/box/{}/items/{}", id, unique_id))
        .body(Body::empty())
        .unwrap();
    let (status, text) = send(&app, remove).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["data"]["outcome"], "removed");
    assert_eq!(json["data"]["box"]["total"], 0);

    let again = Request::delete(format!("/api/box/{}/items/{}", id, unique_id))
        .body(Body::empty())
        .unwrap();
    let (_, text) = send(&app, again).await;
    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["data"]["outcome"], "ignored");
}

#[tokio::test]
async fn test_unknown_box_and_item() {
    let app = app();
    let (status, _) = get(&app, "/api/box/00000000-0000-0000-0000-000000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = create_box(&app).await;
    let (status, json) = post_json(
        &app,
        &format!("/api/box/{}/items", id),
        json!({ "item_id": "nope" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NOT_FOUND");

    let (status, json) = post_json(
        &app,
        &format!("/api/box/{}/gestures", id),
        json!({ "item_id": "2" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "UNPROCESSABLE_ENTITY");

    // 未知商品的短距离拖拽与按钮一样返回 404，而不是 reverted
    let (status, json) = post_json(
        &app,
        &format!("/api/box/{}/gestures", id),
        json!({ "item_id": "no-such", "dx": 10.0, "dy": 0.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_home_never_fails_on_bad_query() {
    let app = app();
    for uri in [
        "/?box=not-a-uuid",
        "/?box=00000000-0000-0000-0000-000000000000",
        "/?pulse=yes&slide=abc&play=maybe&spot=ghost",
    ] {
        let (status, html) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(html.contains("Build Your Faraal Box"));
    }
}

#[tokio::test]
async fn test_home_restores_widget_state_from_query() {
    let app = app();
    let id = create_box(&app).await;

    let (status, html) = get(&app, &format!("/?box={}&slide=1&spot=besan", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-start="1""#));
    assert!(html.contains("2 / 3"));
    // 下一页链接保留盒子与热点
    assert!(html.contains(&format!(
        r#"href="?box={}&amp;spot=besan&amp;slide=2#hero" class="carousel-next""#,
        id
    )));
    // 已展开的热点链接收起自己
    assert!(html.contains(&format!(
        r#"href="?box={}&amp;slide=1#ingredient-promise" class="hotspot-dot"#,
        id
    )));

    let (_, html) = get(&app, "/product/golden-chivda?spot=cashew").await;
    assert_eq!(html.matches("opacity-100").count(), 1);
}

#[tokio::test]
async fn test_form_add_redirects_with_pulse() {
    let app = app();
    let id = create_box(&app).await;

    let req = Request::post(format!("/box/{}/add", id))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("item_id=2"))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let location = res.headers()[header::LOCATION].to_str().unwrap();
    assert_eq!(location, format!("/?box={}&pulse=1#faraal-box", id));

    let (status, html) = get(&app, &format!("/?box={}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-unique-id="2-1""#));
}

#[tokio::test]
async fn test_search_api_and_fragment() {
    let app = app();
    let (status, text) = get(&app, "/api/search?q=chakli").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&text).unwrap();
    let results = json["data"].as_array().unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0]["type"], "product");

    let (_, text) = get(&app, "/api/search?q=%20%20").await;
    let json: Value = serde_json::from_str(&text).unwrap();
    assert!(json["data"].as_array().unwrap().is_empty());

    let (_, html) = get(&app, "/search?q=zzzzzz").await;
    assert!(html.contains(r#"No results found for "zzzzzz""#));
}

#[tokio::test]
async fn test_checkout_success_clears_box() {
    let app = app();
    let id = create_box(&app).await;
    post_json(
        &app,
        &format!("/api/box/{}/items", id),
        json!({ "item_id": "2" }),
    )
    .await;

    let (status, html) = get(&app, &format!("/checkout?box={}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("₹150"));

    let body = format!(
        "name=Asha&email=asha%40example.com&phone=9876543210&address=12+FC+Road&city=Pune&pincode=411004&payment_method=cod&box_id={}",
        id
    );
    let (status, html) = post_form(&app, "/checkout", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Order Placed Successfully!"));

    let (_, text) = get(&app, &format!("/api/box/{}", id)).await;
    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["data"]["box"]["count"], 0);
}

#[tokio::test]
async fn test_checkout_validation_errors() {
    let app = app();
    let (status, html) = post_form(&app, "/checkout", "name=&email=not-an-email").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Full name is required"));
    assert!(html.contains("Invalid email format"));
}

#[tokio::test]
async fn test_health_and_script() {
    let app = app();
    let (status, text) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["box_sessions"].is_u64());

    let res = app
        .clone()
        .oneshot(Request::get("/static/storefront.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert!(res.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/javascript"));

    // 拖拽被系统打断时复位卡片
    let (_, script) = get(&app, "/static/storefront.js").await;
    assert!(script.contains(r#"addEventListener("pointercancel""#));
}

#[tokio::test]
async fn test_session_limit_from_config() {
    let mut config = AppConfig::default();
    config.checkout.submit_delay_ms = 0;
    config.sessions.max_sessions = 3;
    let app = app_with(config);

    let first = create_box(&app).await;
    for _ in 0..10 {
        create_box(&app).await;
    }
    let (_, text) = get(&app, "/health").await;
    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["data"]["box_sessions"], 3);

    let (status, _) = get(&app, &format!("/api/box/{}", first)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_base_path_prefixes_routes_and_links() {
    let mut config = AppConfig::default();
    config.deployment.base_path = "/cmaa-foods".to_string();
    let app = app_with(config);

    let (status, html) = get(&app, "/cmaa-foods/sweet").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"href="/cmaa-foods/seasonal""#));
    assert!(html.contains("/cmaa-foods/static/storefront.js"));

    assert!(html.contains(r#"href="/cmaa-foods""#));

    let (status, html) = get(&app, "/sweet").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page Not Found"));

    // 表单添加后的跳转地址必须能回到带前缀的首页
    let (_, json) = post_json(&app, "/cmaa-foods/api/box", json!({})).await;
    let id = json["data"]["id"].as_str().unwrap().to_string();
    let req = Request::post(format!("/cmaa-foods/box/{}/add", id))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("item_id=2"))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let location = res.headers()[header::LOCATION].to_str().unwrap().to_string();
    assert_eq!(
        location,
        format!("/cmaa-foods?box={}&pulse=1#faraal-box", id)
    );

    let target = location.split('#').next().unwrap();
    let (status, html) = get(&app, target).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-unique-id="2-1""#));
}
