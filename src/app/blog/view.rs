//! 博客页面渲染

use super::model::BlogPost;
use crate::core::assets::AssetPaths;
use crate::core::html::escape;

pub fn render_index(posts: &[BlogPost], assets: &AssetPaths) -> String {
    if posts.is_empty() {
        return r#"<div class="max-w-7xl mx-auto px-4 md:px-8 py-20 text-center">
<h1 class="text-4xl font-serif font-bold text-gray-900 mb-4">Blog</h1>
<p class="text-gray-600">No blog posts available yet.</p>
</div>"#
            .to_string();
    }

    let cards: String = posts
        .iter()
        .map(|post| {
            let slogan = post
                .slogan
                .as_deref()
                .map(|s| {
                    format!(
                        r#"<p class="text-xs font-semibold text-amber-600 uppercase tracking-wider mb-2">{}</p>"#,
                        escape(s)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<a href="{href}" class="group bg-white rounded-xl border border-gray-100 overflow-hidden hover:shadow-lg">
<div class="relative aspect-video overflow-hidden bg-gray-100"><img src="{img}" alt="{alt}" class="w-full h-full object-cover"></div>
<div class="p-6">{slogan}<h2 class="text-xl font-serif font-bold text-gray-900 mb-3">{title}</h2>
<div class="text-sm text-gray-500 mb-4"><time datetime="{iso}">{date}</time></div>
<div class="text-amber-600 font-semibold text-sm">Read More &rarr;</div></div>
</a>"#,
                href = escape(&assets.link(&format!("/blog/{}", post.slug))),
                img = escape(&assets.resolve(&post.image_src)),
                alt = escape(&post.image_alt),
                slogan = slogan,
                title = escape(&post.title),
                iso = post.date,
                date = post.formatted_date(),
            )
        })
        .collect();

    format!(
        r#"<section class="max-w-7xl mx-auto px-4 md:px-8 py-12 md:py-20">
<div class="text-center mb-12">
<h1 class="text-4xl md:text-6xl font-serif font-bold text-gray-900 mb-4">Our Stories</h1>
<p class="text-lg text-gray-600 max-w-2xl mx-auto">Discover the journey behind our authentic Puneri snacks, from traditional recipes to your doorstep.</p>
</div>
<div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{}</div>
</section>"#,
        cards
    )
}

pub fn render_post(post: &BlogPost, assets: &AssetPaths) -> String {
    let slogan = post
        .slogan
        .as_deref()
        .map(|s| {
            format!(
                r#"<p class="text-base md:text-lg font-semibold text-amber-600 uppercase tracking-wider mb-4">{}</p>"#,
                escape(s)
            )
        })
        .unwrap_or_default();
    let home = escape(&assets.link("/"));

    format!(
        r#"<div class="max-w-4xl mx-auto px-4 md:px-8 pt-8"><a href="{home}" class="text-gray-600 hover:text-gray-900">&larr; Back to Home</a></div>
<article class="max-w-4xl mx-auto px-4 md:px-8 py-12">
<header class="mb-12">{slogan}
<h1 class="text-4xl md:text-6xl font-serif font-bold text-gray-900 mb-6">{title}</h1>
<div class="flex flex-wrap items-center gap-6 text-gray-600 text-sm"><time datetime="{iso}">{date}</time><span>{author}</span></div>
</header>
<div class="relative w-full aspect-video rounded-2xl overflow-hidden mb-12 bg-gray-100"><img src="{img}" alt="{alt}" class="w-full h-full object-cover"></div>
<div class="prose prose-lg max-w-none">{content}</div>
</article>
<section class="max-w-4xl mx-auto px-4 md:px-8 py-12 border-t border-gray-200 text-center">
<h2 class="text-2xl font-serif font-bold text-gray-900 mb-4">Explore More Stories</h2>
<a href="{home}" class="inline-flex px-6 py-3 bg-gray-900 text-white font-semibold rounded-xl">Back to Home</a>
</section>"#,
        home = home,
        slogan = slogan,
        title = escape(&post.title),
        iso = post.date,
        date = post.formatted_date(),
        author = escape(&post.author),
        img = escape(&assets.resolve(&post.image_src)),
        alt = escape(&post.image_alt),
        content = post.content,
    )
}
