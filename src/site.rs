//! 站点内容配置
//!
//! 所有页面文案、商品目录与博客正文都来自一个只读的 [`SiteConfig`]，
//! 启动时加载一次，之后以 `Arc<SiteConfig>` 注入各个处理器。

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::app::blog::model::BlogPost;
use crate::app::catalog::model::CatalogItem;
use crate::app::pages::model::{ListingProduct, Season, SeasonalProduct};
use crate::widgets::carousel::CarouselSettings;
use crate::widgets::hero::{VideoItem, VideoType};
use crate::widgets::hotspot::IngredientProduct;
use crate::widgets::icon::Icon;

/// 内置站点内容
const BUILTIN_SITE: &str = include_str!("../config/site.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub banner: BannerConfig,
    pub header: HeaderConfig,
    pub hero: HeroConfig,
    pub faraal_box: FaraalBoxConfig,
    pub subscription: SubscriptionConfig,
    pub featured_special: FeaturedSpecial,
    pub ingredient_promise: IngredientPromiseConfig,
    pub why_puneri: WhyPuneriConfig,
    #[serde(default)]
    pub info_cards: Vec<InfoCard>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    pub footer: FooterConfig,
    pub third_party_links: ThirdPartyLinksConfig,
    pub product_links: ProductLinksConfig,
    #[serde(default)]
    pub sweets: Vec<ListingProduct>,
    #[serde(default)]
    pub seasonal: Vec<SeasonalProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannerConfig {
    pub location: String,
    pub delivery_areas: Vec<String>,
    /// 是否在横幅中显示当天日期
    #[serde(default)]
    pub show_date: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    pub logo: String,
    pub nav_items: Vec<NavItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroConfig {
    pub headline: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
    pub video: Option<HeroVideoConfig>,
}

/// 首屏视频配置，单视频字段与轮播字段并存
#[derive(Debug, Clone, Deserialize)]
pub struct HeroVideoConfig {
    #[serde(default)]
    pub active: bool,
    pub video_src: Option<String>,
    pub gif_src: Option<String>,
    pub poster_image: Option<String>,
    pub poster_image_alt: Option<String>,
    #[serde(default = "default_true")]
    pub auto_play: bool,
    #[serde(default = "default_true", rename = "loop")]
    pub looping: bool,
    #[serde(default = "default_true")]
    pub muted: bool,
    pub video_type: Option<VideoType>,
    pub aria_label: Option<String>,
    #[serde(default)]
    pub use_carousel: bool,
    #[serde(default)]
    pub videos: Vec<VideoItem>,
    #[serde(default)]
    pub carousel: CarouselSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaraalBoxConfig {
    pub title: String,
    pub description: String,
    /// 盒子最多容纳的商品数
    pub max_capacity: usize,
    /// 拖拽放入盒子所需的位移阈值
    #[serde(default = "default_drop_threshold")]
    pub drop_threshold: f64,
    #[serde(default)]
    pub snacks: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionConfig {
    pub title: String,
    pub description: String,
    pub options: Vec<SubscriptionOption>,
    pub cta_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedSpecial {
    #[serde(default)]
    pub active: bool,
    pub title: String,
    pub badge: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngredientPromiseConfig {
    #[serde(default)]
    pub active: bool,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub products: Vec<IngredientProduct>,
    pub default_product_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhyPuneriConfig {
    pub title: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InfoCard {
    pub title: String,
    pub slogan: Option<String>,
    pub description: String,
    pub image_src: String,
    pub image_alt: String,
    #[serde(default)]
    pub image_position: ImagePosition,
    pub background_color: Option<String>,
    pub href: Option<String>,
    #[serde(default)]
    pub clickable: bool,
}

impl InfoCard {
    /// 只有同时可点击且配置了链接的卡片才渲染为链接
    pub fn link(&self) -> Option<&str> {
        if self.clickable {
            self.href.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterConfig {
    pub social_media: SocialMedia,
    pub newsletter: Newsletter,
    pub contact: Contact,
    pub bottom_bar: BottomBar,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialMedia {
    pub title: String,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: Icon,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Newsletter {
    pub title: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BottomBar {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThirdPartyLinksConfig {
    #[serde(default)]
    pub active: bool,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub links: Vec<ThirdPartyLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThirdPartyLink {
    pub id: String,
    pub name: String,
    pub url: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductLinksConfig {
    #[serde(default)]
    pub active: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub products: Vec<LinkedProduct>,
}

/// 带第三方购买渠道的商品
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedProduct {
    pub id: String,
    pub name: String,
    pub image_src: String,
    /// 悬停时播放的动图
    pub gif_src: Option<String>,
    pub description: String,
    #[serde(default)]
    pub third_party_links: Vec<ThirdPartyLink>,
}

fn default_true() -> bool {
    true
}

fn default_drop_threshold() -> f64 {
    100.0
}

/// 站点内容错误
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("站点内容读取错误: {0}")]
    FileRead(String),
    #[error("站点内容解析错误: {0}")]
    Parse(String),
    #[error("站点内容验证错误: {0}")]
    Validation(String),
}

impl SiteConfig {
    /// 解析内置站点内容
    pub fn builtin() -> Result<Self, SiteError> {
        Self::from_toml(BUILTIN_SITE)
    }

    pub fn from_toml(content: &str) -> Result<Self, SiteError> {
        toml::from_str(content).map_err(|e| SiteError::Parse(e.to_string()))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SiteError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| SiteError::FileRead(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// 加载并验证站点内容，未指定文件时使用内置内容
    pub fn load(path: Option<&Path>) -> Result<Self, SiteError> {
        let site = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::builtin()?,
        };
        site.validate()?;
        Ok(site)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        let faraal_box = &self.faraal_box;
        if faraal_box.max_capacity == 0 {
            return Err(SiteError::Validation("盒子容量必须大于0".to_string()));
        }
        let threshold = faraal_box.drop_threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(SiteError::Validation(format!(
                "拖拽阈值必须是大于0的有限数: {}",
                threshold
            )));
        }

        let mut ids = HashSet::new();
        for snack in &faraal_box.snacks {
            if !ids.insert(snack.id.as_str()) {
                return Err(SiteError::Validation(format!("重复的商品ID: {}", snack.id)));
            }
            if snack.price == 0 {
                return Err(SiteError::Validation(format!(
                    "商品 {} 的价格必须大于0",
                    snack.id
                )));
            }
        }

        let mut slugs = HashSet::new();
        for post in &self.blog_posts {
            if !slugs.insert(post.slug.as_str()) {
                return Err(SiteError::Validation(format!("重复的博客标识: {}", post.slug)));
            }
        }

        for product in &self.seasonal {
            Season::parse(&product.season).map_err(|e| {
                SiteError::Validation(format!("季节商品 {} 的季节无效: {}", product.id, e))
            })?;
        }

        let promise = &self.ingredient_promise;
        if let Some(default_id) = &promise.default_product_id {
            if !promise.products.is_empty() && !promise.products.iter().any(|p| &p.id == default_id)
            {
                return Err(SiteError::Validation(format!(
                    "默认配料商品不存在: {}",
                    default_id
                )));
            }
        }

        Ok(())
    }
}
