//! 页面区块渲染

use super::model::{ListingProduct, SeasonalProduct};
use crate::app::catalog::format_price;
use crate::core::assets::AssetPaths;
use crate::core::html::{classes, escape, QueryState};
use crate::site::{
    FeaturedSpecial, ImagePosition, InfoCard, ProductLinksConfig, SubscriptionConfig,
    ThirdPartyLinksConfig, WhyPuneriConfig,
};
use crate::widgets::hotspot::{self, Hotspot, HotspotViewer, SpotLinks};

pub fn render_info_cards(cards: &[InfoCard], assets: &AssetPaths) -> String {
    if cards.is_empty() {
        return String::new();
    }

    let items: String = cards
        .iter()
        .map(|card| {
            let image_left = card.image_position == ImagePosition::Left;
            let slogan = card
                .slogan
                .as_deref()
                .map(|s| {
                    format!(
                        r#"<p class="font-semibold text-amber-600 uppercase tracking-wider mb-4">{}</p>"#,
                        escape(s)
                    )
                })
                .unwrap_or_default();
            let content = format!(
                r#"<div class="{wrapper}">
<div class="grid md:grid-cols-2 gap-0 h-full">
<div class="relative aspect-square md:aspect-auto {img_order}"><img src="{img}" alt="{alt}" class="w-full h-full object-cover"></div>
<div class="{text_order} flex flex-col justify-center p-8 md:p-12">{slogan}<h2 class="text-3xl font-serif font-bold text-gray-900 mb-6">{title}</h2><p class="text-gray-600 leading-relaxed">{description}</p></div>
</div>
</div>"#,
                wrapper = classes(&[
                    ("info-card rounded-3xl overflow-hidden border border-gray-100 shadow-xl h-full", true),
                    (card.background_color.as_deref().unwrap_or("bg-white"), true),
                    ("cursor-pointer hover:shadow-2xl", card.link().is_some()),
                ]),
                img_order = if image_left { "order-1" } else { "order-2" },
                text_order = if image_left { "order-2" } else { "order-1" },
                img = escape(&assets.resolve(&card.image_src)),
                alt = escape(&card.image_alt),
                slogan = slogan,
                title = escape(&card.title),
                description = escape(&card.description),
            );
            match card.link() {
                Some(href) => format!(
                    r#"<a href="{}" class="block">{}</a>"#,
                    escape(&assets.link(href)),
                    content
                ),
                None => content,
            }
        })
        .collect();

    format!(r#"<div class="info-cards space-y-6 mb-16">{}</div>"#, items)
}

pub fn render_subscription(subscription: &SubscriptionConfig) -> String {
    let options: String = subscription
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            format!(
                r#"<label class="flex items-center gap-3 p-4 border-2 rounded-xl cursor-pointer"><input type="radio" name="frequency" value="{}"{}><span class="font-medium text-gray-900">{}</span></label>"#,
                escape(&option.value),
                if i == 0 { " checked" } else { "" },
                escape(&option.label)
            )
        })
        .collect();

    format!(
        r#"<div class="subscription bg-white rounded-2xl border border-gray-100 shadow-lg p-8">
<h2 class="text-2xl md:text-3xl font-serif font-bold text-gray-900 mb-2">{}</h2>
<p class="text-gray-600 mb-6">{}</p>
<div class="space-y-3 mb-6">{}</div>
<button class="w-full py-4 bg-gray-900 text-white font-semibold rounded-xl">{}</button>
</div>"#,
        escape(&subscription.title),
        escape(&subscription.description),
        options,
        escape(&subscription.cta_text)
    )
}

/// 未启用时不渲染
pub fn render_featured_special(special: &FeaturedSpecial, assets: &AssetPaths) -> String {
    if !special.active {
        return String::new();
    }
    format!(
        r#"<div class="featured-special bg-white rounded-2xl border border-gray-100 shadow-lg p-8 relative">
<span class="absolute top-6 right-6 px-3 py-1 bg-amber-600 text-white text-xs font-semibold rounded-full">{}</span>
<h2 class="text-2xl md:text-3xl font-serif font-bold text-gray-900 mb-2">{}</h2>
<div class="relative aspect-video rounded-xl overflow-hidden mt-4"><img src="{}" alt="{}" class="w-full h-full object-cover"></div>
<h3 class="text-xl font-serif font-semibold text-gray-900 mt-4">{}</h3>
<p class="text-gray-600 text-sm mt-2">{}</p>
</div>"#,
        escape(&special.badge),
        escape(&special.title),
        escape(&assets.resolve(&special.image)),
        escape(&special.image_alt),
        escape(&special.name),
        escape(&special.description)
    )
}

pub fn render_why_puneri(why: &WhyPuneriConfig) -> String {
    let features: String = why
        .features
        .iter()
        .map(|feature| {
            format!(
                r#"<div class="text-center p-6"><div class="w-16 h-16 bg-amber-50 rounded-full flex items-center justify-center mx-auto mb-4">{}</div><h3 class="text-lg font-semibold text-gray-900 mb-2">{}</h3><p class="text-gray-600 text-sm">{}</p></div>"#,
                feature.icon.svg("w-8 h-8 text-amber-600"),
                escape(&feature.title),
                escape(&feature.description)
            )
        })
        .collect();

    format!(
        r#"<section class="why-puneri bg-white rounded-2xl border border-gray-100 shadow-lg p-8 mb-16">
<h2 class="text-3xl md:text-4xl font-serif font-bold text-gray-900 mb-8 text-center">{}</h2>
<div class="grid md:grid-cols-3 gap-8">{}</div>
</section>"#,
        escape(&why.title),
        features
    )
}

/// 商品与第三方购买渠道，未启用或没有商品时不渲染
pub fn render_product_links(links: &ProductLinksConfig, assets: &AssetPaths) -> String {
    if !links.active || links.products.is_empty() {
        return String::new();
    }

    let heading = match &links.title {
        Some(title) => format!(
            r#"<div class="text-center mb-8"><h2 class="text-3xl md:text-5xl font-serif font-bold text-[#8B4513] mb-3">{}</h2>{}</div>"#,
            escape(title),
            links
                .subtitle
                .as_deref()
                .map(|s| format!(r#"<p class="text-gray-600 text-lg">{}</p>"#, escape(s)))
                .unwrap_or_default()
        ),
        None => String::new(),
    };

    let products: String = links
        .products
        .iter()
        .map(|product| {
            let channels: String = product
                .third_party_links
                .iter()
                .map(|link| {
                    format!(
                        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="flex items-center gap-3 p-3 rounded-lg hover:bg-gray-50" aria-label="Order on {}"><img src="{}" alt="{}" class="w-8 h-8 object-contain"><span>{}</span></a>"#,
                        escape(&link.url),
                        escape(&link.name),
                        escape(&assets.resolve(&link.image)),
                        escape(&link.name),
                        escape(&link.name)
                    )
                })
                .collect();
            let gif = product
                .gif_src
                .as_deref()
                .map(|g| format!(r#" data-gif="{}""#, escape(&assets.resolve(g))))
                .unwrap_or_default();
            format!(
                r#"<details class="product-link bg-white rounded-xl border border-gray-100 shadow">
<summary class="cursor-pointer list-none p-4" aria-label="View {name} options"><img src="{img}" alt="{name}" class="w-full aspect-square object-cover rounded-lg"{gif}><p class="mt-3 text-center font-semibold text-[#8B4513]">{name}</p></summary>
<div class="p-4 border-t"><p class="text-sm text-gray-600 mb-3">{description}</p>{channels}</div>
</details>"#,
                name = escape(&product.name),
                img = escape(&assets.resolve(&product.image_src)),
                gif = gif,
                description = escape(&product.description),
                channels = channels,
            )
        })
        .collect();

    format!(
        r#"<section id="order-now" class="mb-16">{}<div class="grid grid-cols-2 md:grid-cols-4 gap-6">{}</div></section>"#,
        heading, products
    )
}

/// 平台链接，未启用或为空时不渲染
pub fn render_third_party_links(links: &ThirdPartyLinksConfig, assets: &AssetPaths) -> String {
    if !links.active || links.links.is_empty() {
        return String::new();
    }
    let items: String = links
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="flex flex-col items-center gap-2 p-6 bg-white rounded-xl border" aria-label="Visit {}"><img src="{}" alt="{}" class="h-12 object-contain"><span class="font-semibold">{}</span></a>"#,
                escape(&link.url),
                escape(&link.name),
                escape(&assets.resolve(&link.image)),
                escape(&link.name),
                escape(&link.name)
            )
        })
        .collect();
    format!(
        r#"<section class="third-party-links mb-16"><div class="text-center mb-8"><h2 class="text-3xl font-serif font-bold text-[#8B4513] mb-3">{}</h2>{}</div><div class="flex flex-wrap justify-center gap-6">{}</div></section>"#,
        escape(&links.title),
        links
            .subtitle
            .as_deref()
            .map(|s| format!(r#"<p class="text-gray-600">{}</p>"#, escape(s)))
            .unwrap_or_default(),
        items
    )
}

fn product_card(
    id: &str,
    name: &str,
    price: u32,
    description: &str,
    image: &str,
    color: Option<&str>,
    extra: &str,
    assets: &AssetPaths,
) -> String {
    format!(
        r#"<a href="{href}" class="product-card group bg-white rounded-xl border border-gray-100 overflow-hidden relative">
{extra}<div class="relative aspect-square {color} overflow-hidden"><img src="{img}" alt="{name}" class="w-full h-full object-cover"></div>
<div class="p-6"><h3 class="text-xl font-serif font-semibold text-gray-900 mb-2">{name}</h3><p class="text-sm text-gray-600 mb-4">{description}</p>
<div class="flex items-center justify-between"><span class="text-2xl font-bold text-[#8B4513]">{price}</span><span class="text-gray-400">View &rarr;</span></div></div>
</a>"#,
        href = escape(&assets.link(&format!("/product/{}", id))),
        extra = extra,
        color = escape(color.unwrap_or("bg-gray-50")),
        img = escape(&assets.resolve(image)),
        name = escape(name),
        description = escape(description),
        price = format_price(price),
    )
}

pub fn render_sweets(products: &[ListingProduct], assets: &AssetPaths) -> String {
    let cards: String = products
        .iter()
        .map(|p| {
            product_card(
                &p.id,
                &p.name,
                p.price,
                &p.description,
                &p.image,
                p.color.as_deref(),
                "",
                assets,
            )
        })
        .collect();

    let grid = if products.is_empty() {
        r#"<p class="text-center text-gray-600">No sweets available right now.</p>"#.to_string()
    } else {
        format!(
            r#"<div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">{}</div>"#,
            cards
        )
    };

    format!(
        r#"<section class="max-w-7xl mx-auto px-4 md:px-8 py-12 md:py-16">
<div class="text-center mb-12"><h1 class="text-4xl md:text-6xl font-serif font-bold text-gray-900 mb-4">Sweet (God)</h1>
<p class="text-lg text-gray-600 max-w-2xl mx-auto">Traditional Maharashtrian sweets made with pure ghee and love.</p></div>
{}
<div class="text-center mt-12"><a href="{}" class="text-[#8B4513] font-semibold">Explore Savoury Snacks &rarr;</a></div>
</section>"#,
        grid,
        escape(&assets.link("/"))
    )
}

fn seasonal_grid(products: &[&SeasonalProduct], available: bool, assets: &AssetPaths) -> String {
    products
        .iter()
        .map(|p| {
            let badge = format!(
                r#"<div class="absolute top-4 right-4 z-10"><span class="{}">{}</span></div><p class="season-label hidden">{}</p>"#,
                classes(&[
                    ("px-3 py-1 text-white text-xs font-semibold rounded-full", true),
                    ("bg-amber-600", available),
                    ("bg-gray-400", !available),
                ]),
                escape(&p.badge),
                escape(&p.season)
            );
            product_card(
                &p.id,
                &p.name,
                p.price,
                &p.description,
                &p.image,
                p.color.as_deref(),
                &badge,
                assets,
            )
        })
        .collect()
}

pub fn render_seasonal(
    available: &[&SeasonalProduct],
    upcoming: &[&SeasonalProduct],
    assets: &AssetPaths,
) -> String {
    let mut sections = String::new();
    if !available.is_empty() {
        sections.push_str(&format!(
            r#"<div class="mb-16"><h2 class="text-2xl font-serif font-bold text-gray-900 mb-6">Available Now</h2><div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">{}</div></div>"#,
            seasonal_grid(available, true, assets)
        ));
    }
    if !upcoming.is_empty() {
        sections.push_str(&format!(
            r#"<div><h2 class="text-2xl font-serif font-bold text-gray-900 mb-6">Upcoming Seasons</h2><div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 opacity-75">{}</div></div>"#,
            seasonal_grid(upcoming, false, assets)
        ));
    }

    format!(
        r#"<section class="max-w-7xl mx-auto px-4 md:px-8 py-12 md:py-16">
<div class="text-center mb-12"><h1 class="text-4xl md:text-6xl font-serif font-bold text-gray-900 mb-4">Seasonal Specials</h1>
<p class="text-lg text-gray-600 max-w-2xl mx-auto">Celebrate festivals with our traditional seasonal treats. Each festival brings unique flavors and recipes passed down through generations.</p></div>
{}
</section>"#,
        sections
    )
}

fn golden_chivda_hotspots() -> Vec<Hotspot> {
    [
        ("poha", "Dagadi Poha (Thick)", "Absorbs less oil, stays crunchier.", "40%", "50%"),
        ("cashew", "Goan Cashews", "Fried to golden perfection.", "30%", "65%"),
        ("curry", "Fresh Curry Leaves", "The soul of the flavor.", "55%", "35%"),
        ("raisin", "Nashik Raisins", "A sweet surprise in every bite.", "60%", "70%"),
    ]
    .into_iter()
    .map(|(id, label, description, top, left)| Hotspot {
        id: id.to_string(),
        label: label.to_string(),
        description: Some(description.to_string()),
        top: top.to_string(),
        left: left.to_string(),
    })
    .collect()
}

/// 黄金 Chivda 商品详情，`spot` 为展开的配料热点
pub fn render_golden_chivda(spot: Option<&str>, assets: &AssetPaths) -> String {
    let hotspots = golden_chivda_hotspots();
    let viewer = HotspotViewer::restore(spot, &hotspots);
    let query = QueryState::new();

    let specs: String = [
        ("Operating System", "Human v1.0 (Hungry)"),
        ("Compatibility", "Adrak Chai, Coding Sprints"),
        ("Crunch Level", "High Decibel (Noise Cancelling Recommended)"),
        ("Known Bugs", "Highly Addictive"),
    ]
    .iter()
    .map(|(key, value)| {
        format!(
            r#"<div class="flex justify-between border-b border-[#D97706]/20 pb-2"><span class="text-gray-600">{}</span><span class="font-medium text-[#8B4513]">{}</span></div>"#,
            key, value
        )
    })
    .collect();

    format!(
        r#"<div class="max-w-7xl mx-auto px-6 py-6 text-sm text-gray-500">Home / Savoury / <span class="text-[#8B4513] font-medium">Puneri Golden Chivda</span></div>
<div class="max-w-7xl mx-auto px-6 grid grid-cols-1 lg:grid-cols-2 gap-12 items-start pb-20">
<div id="ingredients" class="relative">{image}<p class="text-center text-xs text-gray-500 mt-3">Hover over dots to see ingredients</p></div>
<div class="space-y-8">
<div><span class="bg-[#D97706]/10 text-[#D97706] text-xs font-bold px-2 py-1 rounded">BESTSELLER</span>
<h1 class="text-4xl md:text-5xl font-serif text-[#8B4513] my-4">Puneri Golden Chivda</h1>
<p class="text-xl font-medium text-gray-900">{price} <span class="text-sm text-gray-500 font-normal ml-2">/ 250g pack</span></p></div>
<blockquote class="border-l-4 border-[#D97706] pl-4 italic text-gray-600 bg-white/50 p-4 rounded-r-lg">&quot;Thin poha is for diet. Thick poha is for emotion. We use the thickest Dagadi Poha, fried to a golden crisp that snaps loud enough to wake up your neighbors.&quot;</blockquote>
<div class="bg-white p-6 rounded-2xl shadow-sm border border-[#F5E6D3]">
<a href="{box_link}" class="w-full py-4 bg-[#8B4513] text-white font-serif text-lg rounded-xl flex items-center justify-center gap-2">Add to Cart</a>
<p class="text-xs text-center text-gray-400 mt-3">Free shipping on orders above ₹499 in Pune.</p>
</div>
<div class="bg-[#FFF8E7] border border-[#F5E6D3] rounded-xl p-6"><h3 class="font-serif text-[#8B4513] text-lg mb-4">System Requirements</h3><div class="space-y-3 text-sm">{specs}</div></div>
<div class="text-xs text-gray-500 leading-relaxed"><strong class="text-gray-700">Ingredients:</strong> Dagadi Poha, Groundnut Oil, Split Chickpeas (Dalia), Cashews, Raisins, Dry Coconut Slices (Khobra), Curry Leaves, Turmeric, Salt, Sugar, Hing.</div>
</div>
</div>"#,
        image = hotspot::render(
            "/assets/chivda-hero.jpg",
            "Puneri Golden Chivda",
            &hotspots,
            &viewer,
            SpotLinks {
                query: &query,
                anchor: "ingredients",
            },
            assets
        ),
        price = format_price(120),
        box_link = escape(&assets.link("/#faraal-box")),
        specs = specs,
    )
}
