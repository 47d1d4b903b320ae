//! 搜索处理器

use axum::{
    extract::{Query, State},
    response::{Html, Json},
};

use super::model::{SearchQuery, SearchResult};
use crate::core::assets::AssetPaths;
use crate::core::html::escape;
use crate::core::response::ApiResponse;
use crate::state::AppState;
use crate::widgets::icon::Icon;

pub async fn search_api(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<ApiResponse<Vec<SearchResult>>> {
    Json(ApiResponse::success(state.search_service.search(&query.q)))
}

/// 搜索浮层的结果片段
pub async fn search_fragment(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let results = state.search_service.search(&query.q);
    Html(render_results(&query.q, &results, &state.assets))
}

pub fn render_results(query: &str, results: &[SearchResult], assets: &AssetPaths) -> String {
    if query.trim().is_empty() {
        return r#"<p class="text-gray-500 text-center py-8">Start typing to search...</p>"#
            .to_string();
    }
    if results.is_empty() {
        return format!(
            r#"<p class="text-gray-500 text-center py-8">No results found for "{}"</p>"#,
            escape(query.trim())
        );
    }

    let items: String = results
        .iter()
        .map(|result| {
            let image = result
                .image
                .as_deref()
                .map(|src| {
                    format!(
                        r#"<img src="{}" alt="{}" class="w-12 h-12 rounded-lg object-cover flex-shrink-0">"#,
                        escape(&assets.resolve(src)),
                        escape(&result.title)
                    )
                })
                .unwrap_or_default();
            let description = result
                .description
                .as_deref()
                .map(|d| format!(r#"<p class="text-sm text-gray-600 line-clamp-2">{}</p>"#, escape(d)))
                .unwrap_or_default();
            format!(
                r#"<a href="{}" class="search-result flex items-center gap-4 p-3 rounded-lg hover:bg-gray-50">{}<div class="flex-1 min-w-0"><div class="flex items-center gap-2 mb-1"><span class="text-xs font-semibold text-amber-600 uppercase">{}</span><h3 class="font-semibold text-gray-900 truncate">{}</h3></div>{}</div>{}</a>"#,
                escape(&assets.link(&result.url)),
                image,
                result.kind.label(),
                escape(&result.title),
                description,
                Icon::ChevronRight.svg("w-5 h-5 text-gray-400"),
            )
        })
        .collect();

    format!(r#"<div class="space-y-2">{}</div>"#, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::search::model::ResultKind;

    #[test]
    fn test_render_states() {
        let assets = AssetPaths::default();
        assert!(render_results("", &[], &assets).contains("Start typing to search..."));
        assert!(render_results("pizza", &[], &assets).contains(r#"No results found for "pizza""#));

        let results = vec![SearchResult {
            kind: ResultKind::Page,
            title: "Seasonal".to_string(),
            description: Some("Navigate to Seasonal page".to_string()),
            url: "/seasonal".to_string(),
            image: None,
        }];
        let html = render_results("fest", &results, &assets);
        assert!(html.contains(r#"href="/seasonal""#));
        assert!(html.contains(">page<"));
    }
}
