//! 配料热点
//!
//! 商品图片上的热点，悬停或点击时显示配料说明。
//! 点击状态放在 `?spot=` 里，无脚本时同样可以查看。

use serde::Deserialize;

use crate::core::assets::AssetPaths;
use crate::core::html::{classes, escape, QueryState};

#[derive(Debug, Clone, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    /// 距顶部百分比，例如 "35%"
    pub top: String,
    pub left: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngredientProduct {
    pub id: String,
    pub name: String,
    pub image_src: String,
    pub image_alt: String,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

/// 选择要展示的商品：请求的 id，其次默认 id，最后第一个
pub fn select_product<'a>(
    products: &'a [IngredientProduct],
    requested: Option<&str>,
    default_id: Option<&str>,
) -> Option<&'a IngredientProduct> {
    let by_id = |id: &str| products.iter().find(|p| p.id == id);
    requested
        .and_then(by_id)
        .or_else(|| default_id.and_then(by_id))
        .or_else(|| products.first())
}

/// 同一时间最多一个热点处于激活状态
#[derive(Debug, Clone, Default)]
pub struct HotspotViewer {
    active: Option<String>,
}

impl HotspotViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按查询串恢复，未知热点视为未选中
    pub fn restore(spot: Option<&str>, hotspots: &[Hotspot]) -> Self {
        let mut viewer = Self::new();
        if let Some(id) = spot.filter(|id| hotspots.iter().any(|h| h.id == *id)) {
            viewer.enter(id);
        }
        viewer
    }

    /// 点击某个热点后的状态，再次点击已激活的热点则收起
    pub fn clicked(&self, hotspot_id: &str) -> Self {
        let mut next = self.clone();
        if next.is_active(hotspot_id) {
            next.leave();
        } else {
            next.enter(hotspot_id);
        }
        next
    }

    pub fn enter(&mut self, hotspot_id: impl Into<String>) {
        self.active = Some(hotspot_id.into());
    }

    pub fn leave(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, hotspot_id: &str) -> bool {
        self.active.as_deref() == Some(hotspot_id)
    }
}

/// 热点链接的去向：保留的查询参数与锚点
#[derive(Debug, Clone, Copy)]
pub struct SpotLinks<'a> {
    pub query: &'a QueryState,
    pub anchor: &'a str,
}

/// 渲染带热点的商品图
pub fn render(
    image_src: &str,
    image_alt: &str,
    hotspots: &[Hotspot],
    viewer: &HotspotViewer,
    links: SpotLinks<'_>,
    assets: &AssetPaths,
) -> String {
    let mut spots = String::new();
    for spot in hotspots {
        let active = viewer.is_active(&spot.id);
        let href = links
            .query
            .clone()
            .set("spot", viewer.clicked(&spot.id).active().unwrap_or_default())
            .href(links.anchor);
        let description = spot
            .description
            .as_deref()
            .map(|d| format!(r#"<div class="text-xs text-gray-600 mt-1">{}</div>"#, escape(d)))
            .unwrap_or_default();
        spots.push_str(&format!(
            r#"<div class="hotspot absolute flex items-center" data-hotspot="{id}" style="top:{top};left:{left}">
<a href="{href}" class="{dot}" aria-label="{label}" aria-expanded="{active}"></a>
<div class="{tip}"><div class="text-[#8B4513] font-bold">{label}</div>{description}</div>
</div>"#,
            id = escape(&spot.id),
            href = escape(&href),
            active = active,
            top = escape(&spot.top),
            left = escape(&spot.left),
            dot = classes(&[
                ("hotspot-dot w-4 h-4 bg-white rounded-full border-2 border-[#8B4513]", true),
                ("scale-125", active),
            ]),
            tip = classes(&[
                ("hotspot-tip ml-3 bg-white/95 px-4 py-2 rounded-lg text-sm shadow-lg", true),
                ("opacity-100", active),
                ("opacity-0 pointer-events-none", !active),
            ]),
            label = escape(&spot.label),
            description = description,
        ));
    }

    format!(
        r#"<div class="hotspot-image relative w-full aspect-square bg-[#F5E6D3] rounded-xl overflow-hidden shadow-lg">
<img src="{}" alt="{}" class="w-full h-full object-cover">
{}</div>"#,
        escape(&assets.resolve(image_src)),
        escape(image_alt),
        spots
    )
}

/// 首页配料承诺区块，可通过 `?product=` 切换商品，`?spot=` 展开热点
///
/// `query` 中的 `product` 与 `spot` 即当前选择。
pub fn render_promise(
    title: &str,
    subtitle: &str,
    products: &[IngredientProduct],
    default_id: Option<&str>,
    query: &QueryState,
    assets: &AssetPaths,
) -> String {
    let Some(selected) = select_product(products, query.get("product"), default_id) else {
        return String::new();
    };
    let viewer = HotspotViewer::restore(query.get("spot"), &selected.hotspots);

    let tabs: String = if products.len() > 1 {
        products
            .iter()
            .map(|p| {
                // 切换商品时收起热点
                let href = query
                    .clone()
                    .set("product", p.id.as_str())
                    .set("spot", "")
                    .href("ingredient-promise");
                format!(
                    r#"<a href="{}" class="{}">{}</a>"#,
                    escape(&href),
                    classes(&[
                        ("px-4 py-2 rounded-full text-sm", true),
                        ("bg-[#8B4513] text-white", p.id == selected.id),
                    ]),
                    escape(&p.name)
                )
            })
            .collect()
    } else {
        String::new()
    };

    format!(
        r#"<section id="ingredient-promise" class="mb-16">
<div class="text-center mb-6"><h2 class="text-3xl font-serif font-bold text-[#8B4513] mb-2">{}</h2><p class="text-gray-600">{}</p></div>
<div class="flex justify-center gap-2 mb-4">{}</div>
<div class="bg-white rounded-2xl border border-gray-100 shadow-lg p-6">{}</div>
</section>"#,
        escape(title),
        escape(subtitle),
        tabs,
        render(
            &selected.image_src,
            &selected.image_alt,
            &selected.hotspots,
            &viewer,
            SpotLinks {
                query,
                anchor: "ingredient-promise",
            },
            assets
        )
    )
}
