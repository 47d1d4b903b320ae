//! HTML 渲染辅助

use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("静态正则"))
}

/// 转义文本中的 HTML 特殊字符
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 去掉标签只保留文本
pub fn strip_tags(markup: &str) -> String {
    tag_pattern().replace_all(markup, "").into_owned()
}

/// 按字符截断
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// 组合 CSS class，跳过空项
pub fn classes(parts: &[(&str, bool)]) -> String {
    let mut out = String::new();
    for (class, enabled) in parts {
        if *enabled && !class.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{}", class);
        }
    }
    out
}

/// 页面链接中保留的查询参数
///
/// 无脚本时轮播、热点等组件的状态放在查询串里，链接只改自己的参数。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pairs: Vec<(String, String)>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置参数，空值表示移除
    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        self.pairs.retain(|(k, _)| k != key);
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 相对链接 `?a=1&b=2#anchor`，未转义 HTML
    pub fn href(&self, anchor: &str) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(&encode_component(key));
            out.push('=');
            out.push_str(&encode_component(value));
        }
        if out.is_empty() {
            // 没有参数时回到当前页面本身
            out.push('?');
        }
        if !anchor.is_empty() {
            let _ = write!(out, "#{}", anchor);
        }
        out
    }
}

fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{:02X}", byte);
        }
    }
    out
}
