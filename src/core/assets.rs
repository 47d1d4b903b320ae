//! 资源路径解析
//!
//! 部署在子路径下（例如 GitHub Pages 的 `/cmaa-foods`）时，
//! 所有图片与视频地址都需要加上同样的前缀。

#[derive(Debug, Clone, Default)]
pub struct AssetPaths {
    base_path: String,
}

impl AssetPaths {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// 解析资源地址
    ///
    /// 完整 URL 原样返回；保证以 `/` 开头；已包含前缀的不重复添加。
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        if !self.base_path.is_empty() && !self.has_base_prefix(&normalized) {
            return format!("{}{}", self.base_path, normalized);
        }

        normalized
    }

    /// 站内链接同样需要前缀，`#` 锚点和外链保持不变
    ///
    /// 有前缀时首页写作 `/cmaa-foods` 而不是 `/cmaa-foods/`，查询串与锚点跟在前缀后面。
    pub fn link(&self, href: &str) -> String {
        if href.starts_with('#') {
            return href.to_string();
        }
        let resolved = self.resolve(href);
        if self.base_path.is_empty() {
            return resolved;
        }
        match resolved
            .strip_prefix(&self.base_path)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(rest) if rest.is_empty() || rest.starts_with('?') || rest.starts_with('#') => {
                format!("{}{}", self.base_path, rest)
            }
            _ => resolved,
        }
    }

    fn has_base_prefix(&self, path: &str) -> bool {
        path.strip_prefix(&self.base_path)
            .map(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(false)
    }
}
