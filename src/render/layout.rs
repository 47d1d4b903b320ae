//! 页面外壳：横幅、页头、页脚

use chrono::NaiveDate;

use crate::core::assets::AssetPaths;
use crate::core::html::{classes, escape};
use crate::site::{BannerConfig, FooterConfig, HeaderConfig, SiteConfig};
use crate::widgets::icon::Icon;

/// 站点默认标题
pub const SITE_TITLE: &str = "Cmaa-foods";
const SITE_DESCRIPTION: &str = "Authentic Puneeri Crunch, Delivered";

/// 页面元信息
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// 当前路径，用于高亮导航
    pub path: String,
}

impl PageMeta {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            path: path.into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// 横幅文字
///
/// `today` 为 `None` 或配置关闭日期时不显示日期。
pub fn banner_text(banner: &BannerConfig, today: Option<NaiveDate>) -> String {
    let date_text = match today {
        Some(date) if banner.show_date => format!(" on {}", date.format("%A, %B %-d")),
        _ => String::new(),
    };
    format!(
        "Fresh batch fried this morning{} in {} • Delivering to {}",
        date_text,
        banner.location,
        banner.delivery_areas.join(", ")
    )
}

fn render_banner(banner: &BannerConfig) -> String {
    let today = chrono::Local::now().date_naive();
    format!(
        r#"<div class="bg-gray-900 text-white py-2.5 px-4"><div class="max-w-7xl mx-auto text-center text-xs md:text-sm"><span>{}</span></div></div>"#,
        escape(&banner_text(banner, Some(today)))
    )
}

fn render_header(header: &HeaderConfig, current_path: &str, assets: &AssetPaths) -> String {
    let nav: String = header
        .nav_items
        .iter()
        .map(|item| {
            let active = item.href == current_path;
            format!(
                r#"<a href="{}" class="{}"{}>{}</a>"#,
                escape(&assets.link(&item.href)),
                classes(&[
                    ("text-sm font-medium pb-1", true),
                    ("text-gray-900 border-b-2 border-gray-900", active),
                    ("text-gray-500 hover:text-gray-900", !active),
                ]),
                if active { r#" aria-current="page""# } else { "" },
                escape(&item.label)
            )
        })
        .collect();

    format!(
        r#"<header class="sticky top-0 z-50 bg-white/95 border-b border-gray-100">
<nav class="max-w-7xl mx-auto px-4 md:px-8 py-4 flex justify-between items-center">
<a href="{home}" class="text-xl font-bold font-serif text-[#8B4513]">{logo}</a>
<div class="hidden md:flex gap-8 items-center">{nav}</div>
<div class="flex gap-4 items-center">
<button id="search-trigger" class="text-gray-600 hover:text-gray-900" aria-label="Search">{search}</button>
<a href="{checkout}" class="text-gray-600 hover:text-gray-900" aria-label="Checkout">{bag}</a>
</div>
</nav>
<div id="search-overlay" class="hidden fixed inset-0 z-50 bg-black/50" data-endpoint="{endpoint}">
<div class="max-w-2xl mx-auto mt-20 bg-white rounded-2xl shadow-2xl">
<div class="flex items-center gap-3 p-4 border-b">{search}<input id="search-input" type="search" class="flex-1 outline-none" placeholder="Search snacks, blogs, pages..." autocomplete="off"><button id="search-close" aria-label="Close search">{close}</button></div>
<div id="search-results" class="max-h-[60vh] overflow-y-auto p-4"><p class="text-gray-500 text-center py-8">Start typing to search...</p></div>
</div>
</div>
</header>"#,
        home = escape(&assets.link("/")),
        logo = escape(&header.logo),
        nav = nav,
        search = Icon::Search.svg("w-5 h-5"),
        checkout = escape(&assets.link("/checkout")),
        bag = Icon::ShoppingBag.svg("w-5 h-5"),
        endpoint = escape(&assets.link("/search")),
        close = Icon::Close.svg("w-5 h-5"),
    )
}

fn render_footer(footer: &FooterConfig) -> String {
    let social: String = footer
        .social_media
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" aria-label="{}" class="w-10 h-10 rounded-full bg-gray-800 flex items-center justify-center">{}</a>"#,
                escape(&link.url),
                escape(&link.name),
                link.icon.svg("w-5 h-5")
            )
        })
        .collect();

    format!(
        r#"<footer class="bg-gray-900 text-gray-300 mt-20">
<div class="max-w-7xl mx-auto px-4 md:px-8 py-12 grid md:grid-cols-3 gap-8">
<div><h3 class="text-white font-semibold mb-4">{social_title}</h3><div class="flex gap-3">{social}</div></div>
<div><label for="newsletter-email" class="text-white font-semibold mb-4 block">{newsletter_title}</label><div class="flex"><input id="newsletter-email" type="email" placeholder="{placeholder}" class="flex-1 px-4 py-2 rounded-l-lg text-gray-900"><button class="px-4 bg-amber-600 rounded-r-lg text-white" aria-label="Subscribe">&rarr;</button></div></div>
<div><h3 class="text-white font-semibold mb-4">{contact_title}</h3><p class="text-sm">{contact_message}</p></div>
</div>
<div class="border-t border-gray-800 py-6 text-center text-sm"><p>{bottom}</p></div>
</footer>"#,
        social_title = escape(&footer.social_media.title),
        social = social,
        newsletter_title = escape(&footer.newsletter.title),
        placeholder = escape(&footer.newsletter.placeholder),
        contact_title = escape(&footer.contact.title),
        contact_message = escape(&footer.contact.message),
        bottom = escape(&footer.bottom_bar.message),
    )
}

/// 完整页面：横幅 + 页头 + 正文 + 页脚
pub fn page(site: &SiteConfig, assets: &AssetPaths, meta: &PageMeta, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
</head>
<body class="font-sans bg-[#FDFBF7] text-[#4A4A4A]">
<main class="min-h-screen">
{banner}
{header}
{body}
{footer}
</main>
<script src="{script}" defer></script>
</body>
</html>"#,
        title = escape(&meta.title),
        description = escape(&meta.description),
        banner = render_banner(&site.banner),
        header = render_header(&site.header, &meta.path, assets),
        body = body,
        footer = render_footer(&site.footer),
        script = escape(&assets.link("/static/storefront.js")),
    )
}

/// 404 页面
pub fn not_found_page(site: &SiteConfig, assets: &AssetPaths, path: &str, heading: &str) -> String {
    let body = format!(
        r#"<div class="max-w-4xl mx-auto px-4 md:px-8 py-20 text-center">
<h1 class="text-4xl font-serif font-bold text-gray-900 mb-4">{}</h1>
<p class="text-gray-600 mb-8">The page you are looking for does not exist.</p>
<a href="{}" class="inline-flex items-center gap-2 px-6 py-3 bg-gray-900 text-white font-semibold rounded-xl">Back to Home</a>
</div>"#,
        escape(heading),
        escape(&assets.link("/"))
    );
    page(site, assets, &PageMeta::new(path).title(heading), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(show_date: bool) -> BannerConfig {
        BannerConfig {
            location: "Kothrud".to_string(),
            delivery_areas: vec!["Wakad".to_string(), "Baner".to_string(), "Aundh".to_string()],
            show_date,
        }
    }

    #[test]
    fn test_banner_text_with_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            banner_text(&banner(true), Some(date)),
            "Fresh batch fried this morning on Monday, January 15 in Kothrud • Delivering to Wakad, Baner, Aundh"
        );
    }

    #[test]
    fn test_banner_text_without_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            banner_text(&banner(false), Some(date)),
            "Fresh batch fried this morning in Kothrud • Delivering to Wakad, Baner, Aundh"
        );
    }

    #[test]
    fn test_header_marks_active_nav() {
        let site = SiteConfig::builtin().unwrap();
        let html = render_header(&site.header, "/sweet", &AssetPaths::default());
        assert!(html.contains(r#"<a href="/sweet" class="text-sm font-medium pb-1 text-gray-900 border-b-2 border-gray-900" aria-current="page">"#));
        assert!(!html.contains(r#"href="/seasonal" class="text-sm font-medium pb-1 text-gray-900"#));
    }

    #[test]
    fn test_page_shell() {
        let site = SiteConfig::builtin().unwrap();
        let html = page(
            &site,
            &AssetPaths::new("/cmaa-foods"),
            &PageMeta::new("/").title("Hello"),
            "<p>body</p>",
        );
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"src="/cmaa-foods/static/storefront.js""#));
        assert!(html.contains("Delivering to Wakad, Baner, Aundh"));
    }
}
