//! 搜索服务
//!
//! 对站点内容做线性扫描，不建索引。结果顺序固定为零食、博客、页面。

use std::sync::Arc;
use tracing::debug;

use super::model::{ResultKind, SearchResult, PAGES};
use crate::core::html::{strip_tags, truncate_chars};
use crate::site::SiteConfig;

/// 博客摘要长度
const BLOG_EXCERPT_CHARS: usize = 100;

#[derive(Clone)]
pub struct SearchService {
    site: Arc<SiteConfig>,
}

impl SearchService {
    pub fn new(site: Arc<SiteConfig>) -> Self {
        Self { site }
    }

    /// 大小写不敏感的子串匹配，空查询返回空结果
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();

        for snack in &self.site.faraal_box.snacks {
            if snack.name.to_lowercase().contains(&term) || snack.id.to_lowercase().contains(&term) {
                results.push(SearchResult {
                    kind: ResultKind::Product,
                    title: snack.name.clone(),
                    description: Some(snack.price_caption()),
                    url: "/#faraal-box".to_string(),
                    image: Some(snack.image_ref.clone()),
                });
            }
        }

        for post in &self.site.blog_posts {
            let slogan_hit = post
                .slogan
                .as_deref()
                .map(|s| s.to_lowercase().contains(&term))
                .unwrap_or(false);
            if post.title.to_lowercase().contains(&term)
                || slogan_hit
                || post.content.to_lowercase().contains(&term)
            {
                let description = post.slogan.clone().unwrap_or_else(|| {
                    // 先去标签再截断：截断点不会落在标签中间，摘要也按可见字符计数
                    let text = strip_tags(&post.content);
                    truncate_chars(text.trim(), BLOG_EXCERPT_CHARS).to_string()
                });
                results.push(SearchResult {
                    kind: ResultKind::Blog,
                    title: post.title.clone(),
                    description: Some(description),
                    url: format!("/blog/{}", post.slug),
                    image: Some(post.image_src.clone()),
                });
            }
        }

        for page in &PAGES {
            if page.title.to_lowercase().contains(&term)
                || page.keywords.iter().any(|k| k.contains(term.as_str()))
            {
                results.push(SearchResult {
                    kind: ResultKind::Page,
                    title: page.title.to_string(),
                    description: Some(format!("Navigate to {} page", page.title)),
                    url: page.url.to_string(),
                    image: None,
                });
            }
        }

        debug!("搜索 \"{}\" 命中 {} 条", term, results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SearchService {
        SearchService::new(Arc::new(SiteConfig::builtin().unwrap()))
    }

    #[test]
    fn test_empty_query_has_no_results() {
        assert!(service().search("").is_empty());
        assert!(service().search("   ").is_empty());
    }

    #[test]
    fn test_snack_match_is_case_insensitive() {
        let results = service().search("  CHAKLI ");
        let product = &results[0];
        assert_eq!(product.kind, ResultKind::Product);
        assert_eq!(product.title, "Bhajani Chakli");
        assert_eq!(product.description.as_deref(), Some("₹150 for 1 kg"));
        assert_eq!(product.url, "/#faraal-box");
    }

    #[test]
    fn test_blog_match_uses_slogan() {
        let results = service().search("handcrafted");
        let blog = results
            .iter()
            .find(|r| r.kind == ResultKind::Blog)
            .unwrap();
        assert_eq!(blog.url, "/blog/our-story");
        assert_eq!(blog.description.as_deref(), Some("Our Story"));
    }

    #[test]
    fn test_blog_excerpt_strips_markup_before_truncating() {
        let mut site = SiteConfig::builtin().unwrap();
        let post = &mut site.blog_posts[0];
        post.slogan = None;
        post.title = "Kothrud kitchen".to_string();
        post.content = format!(
            r#"<p class="lead text-lg font-serif text-[#8B4513]">{}</p>"#,
            "ब".repeat(150)
        );
        let service = SearchService::new(Arc::new(site));

        let results = service.search("kothrud kitchen");
        let blog = results.iter().find(|r| r.kind == ResultKind::Blog).unwrap();
        let description = blog.description.as_deref().unwrap();
        assert!(!description.contains('<'));
        assert_eq!(description.chars().count(), BLOG_EXCERPT_CHARS);
    }

    #[test]
    fn test_page_keywords() {
        let results = service().search("ladoo");
        assert!(results
            .iter()
            .any(|r| r.kind == ResultKind::Page && r.url == "/sweet"));

        let results = service().search("festival");
        let page = results.iter().find(|r| r.kind == ResultKind::Page).unwrap();
        assert_eq!(page.title, "Seasonal");
        assert_eq!(page.description.as_deref(), Some("Navigate to Seasonal page"));
    }

    #[test]
    fn test_results_ordered_by_source() {
        let site = SiteConfig::builtin().unwrap();
        let service = SearchService::new(Arc::new(site));
        // "o" 同时命中博客与页面
        let kinds: Vec<_> = service.search("o").iter().map(|r| r.kind).collect();
        let first_page = kinds.iter().position(|k| *k == ResultKind::Page).unwrap();
        assert!(kinds[..first_page].iter().all(|k| *k != ResultKind::Page));
        assert!(kinds[first_page..].iter().all(|k| *k == ResultKind::Page));
    }

    #[test]
    fn test_no_match() {
        assert!(service().search("pizza").is_empty());
    }
}
