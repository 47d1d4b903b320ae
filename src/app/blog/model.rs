//! 博客数据模型

use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::html::{strip_tags, truncate_chars};

/// 页面 meta description 的最大长度
pub const META_DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub slogan: Option<String>,
    pub date: NaiveDate,
    pub author: String,
    pub image_src: String,
    pub image_alt: String,
    /// 正文 HTML，原样输出
    pub content: String,
}

impl BlogPost {
    /// 例如 "January 15, 2024"
    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }

    /// 去掉标签后的前 `max` 个字符
    pub fn excerpt(&self, max: usize) -> String {
        let text = strip_tags(&self.content);
        truncate_chars(text.trim(), max).to_string()
    }

    pub fn meta_description(&self) -> String {
        self.excerpt(META_DESCRIPTION_CHARS)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn find_post<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> BlogPost {
        BlogPost {
            slug: "our-story".to_string(),
            title: "Handcrafted with Love".to_string(),
            slogan: Some("Our Story".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            author: "Puneri Snacks Team".to_string(),
            image_src: "/assets/chakali-homepage.png".to_string(),
            image_alt: "Handcrafted snacks".to_string(),
            content: format!("<p>{}</p><h2>Next</h2>", "a".repeat(200)),
        }
    }

    #[test]
    fn test_formatted_date() {
        assert_eq!(post().formatted_date(), "January 15, 2024");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
            "March 5, 2024"
        );
    }

    #[test]
    fn test_meta_description_strips_tags() {
        let description = post().meta_description();
        assert_eq!(description.chars().count(), 160);
        assert!(!description.contains('<'));
    }

    #[test]
    fn test_find_post() {
        let posts = vec![post()];
        assert!(find_post(&posts, "our-story").is_some());
        assert!(find_post(&posts, "missing").is_none());
    }
}
