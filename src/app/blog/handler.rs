//! 博客处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use tracing::debug;

use super::{model::find_post, view};
use crate::render::{not_found_page, page, PageMeta};
use crate::state::AppState;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let body = view::render_index(&state.site.blog_posts, &state.assets);
    let meta = PageMeta::new("/blog").title("Blog | Cmaa-foods");
    Html(page(&state.site, &state.assets, &meta, &body))
}

pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> (StatusCode, Html<String>) {
    let path = format!("/blog/{}", slug);
    match find_post(&state.site.blog_posts, &slug) {
        Some(post) => {
            let meta = PageMeta::new(path)
                .title(post.title.clone())
                .description(post.meta_description());
            let body = view::render_post(post, &state.assets);
            (
                StatusCode::OK,
                Html(page(&state.site, &state.assets, &meta, &body)),
            )
        }
        None => {
            debug!("博客文章不存在: {}", slug);
            (
                StatusCode::NOT_FOUND,
                Html(not_found_page(&state.site, &state.assets, &path, "Post Not Found")),
            )
        }
    }
}
