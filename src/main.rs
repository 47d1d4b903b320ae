//! 店面服务入口

use anyhow::Context;
use cmaa_foods::{
    build_router, config::load_config, infrastructure::logger::init_logging, site::SiteConfig,
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // guard 必须存活到进程结束，否则文件日志会丢失
    let _guard = init_logging(&config.logging)?;

    info!("启动 Cmaa-foods 店面服务...");

    let site = SiteConfig::load(config.deployment.site_config.as_deref())
        .context("加载站点内容失败")?;
    info!(
        "站点内容已加载: 小吃 {} 种，博客 {} 篇，盒子容量 {}",
        site.faraal_box.snacks.len(),
        site.blog_posts.len(),
        site.faraal_box.max_capacity
    );

    let addr = format!("{}:{}", config.http.bind_address, config.http.port);
    let base_path = config.deployment.base_path.clone();

    let app = build_router(AppState::new(site, config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 店面服务运行在 http://{}{}/", addr, base_path);
    info!("📖 可用端点:");
    info!("   GET  /              - 首页与 Faraal 盒子");
    info!("   GET  /sweet         - 甜品");
    info!("   GET  /seasonal      - 季节限定");
    info!("   GET  /blog          - 博客");
    info!("   GET  /checkout      - 结账");
    info!("   GET  /api/search    - 搜索接口");
    info!("   POST /api/box       - 创建盒子会话");

    axum::serve(listener, app).await?;
    Ok(())
}
