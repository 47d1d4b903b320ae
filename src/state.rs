//! 应用状态

use std::sync::Arc;
use std::time::Duration;

use crate::app::catalog::Catalog;
use crate::app::checkout::service::CheckoutService;
use crate::app::faraal_box::BoxService;
use crate::app::search::service::SearchService;
use crate::config::AppConfig;
use crate::core::assets::AssetPaths;
use crate::site::SiteConfig;

/// 所有处理器共享的状态，克隆只复制引用
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub config: Arc<AppConfig>,
    pub assets: AssetPaths,
    pub box_service: BoxService,
    pub search_service: SearchService,
    pub checkout_service: CheckoutService,
}

impl AppState {
    pub fn new(site: SiteConfig, config: AppConfig) -> Self {
        let site = Arc::new(site);
        let catalog = Arc::new(Catalog::new(site.faraal_box.snacks.clone()));
        let box_service = BoxService::new(
            catalog,
            site.faraal_box.max_capacity,
            site.faraal_box.drop_threshold,
        )
        .with_session_limit(config.sessions.max_sessions)
        .with_session_ttl(Duration::from_secs(config.sessions.idle_ttl_minutes * 60));
        let checkout_service = CheckoutService::new(
            box_service.clone(),
            Duration::from_millis(config.checkout.submit_delay_ms),
        );

        Self {
            assets: AssetPaths::new(config.deployment.base_path.clone()),
            search_service: SearchService::new(site.clone()),
            site,
            config: Arc::new(config),
            box_service,
            checkout_service,
        }
    }
}
