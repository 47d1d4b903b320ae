//! 首屏媒体
//!
//! 根据配置决定首屏展示静态图、视频轮播、GIF 还是单个视频。

use serde::Deserialize;

use super::carousel::{self, CarouselRequest};
use crate::core::assets::AssetPaths;
use crate::core::html::{escape, QueryState};
use crate::site::HeroConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    Local,
    Youtube,
    Vimeo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    pub video_src: String,
    pub poster_image: Option<String>,
    pub poster_image_alt: Option<String>,
    pub video_type: Option<VideoType>,
    pub aria_label: Option<String>,
}

impl VideoItem {
    pub fn local(video_src: impl Into<String>) -> Self {
        Self {
            video_src: video_src.into(),
            poster_image: None,
            poster_image_alt: None,
            video_type: Some(VideoType::Local),
            aria_label: None,
        }
    }
}

/// 根据地址判断视频来源
pub fn detect_video_type(url: &str) -> VideoType {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        VideoType::Youtube
    } else if url.contains("vimeo.com") {
        VideoType::Vimeo
    } else {
        VideoType::Local
    }
}

/// 外部视频转换为可嵌入的播放器地址，无法识别时原样返回
pub fn embed_url(url: &str, kind: VideoType) -> String {
    match kind {
        VideoType::Youtube => {
            let id = url
                .split_once("v=")
                .map(|(_, rest)| rest)
                .or_else(|| url.split_once("youtu.be/").map(|(_, rest)| rest))
                .map(|rest| rest.split(|c| c == '&' || c == '?' || c == '/').next().unwrap_or(rest));
            match id {
                Some(id) if !id.is_empty() => format!("https://www.youtube.com/embed/{}", id),
                _ => url.to_string(),
            }
        }
        VideoType::Vimeo => match url.rsplit('/').next() {
            Some(id) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => {
                format!("https://player.vimeo.com/video/{}", id)
            }
            _ => url.to_string(),
        },
        VideoType::Local => url.to_string(),
    }
}

/// 首屏最终展示的内容
#[derive(Debug, Clone, PartialEq)]
pub enum HeroMedia {
    Image {
        src: String,
        alt: String,
    },
    Carousel,
    Gif {
        src: String,
        alt: String,
    },
    Video {
        src: String,
        poster: String,
        alt: String,
        video_type: VideoType,
        aria_label: String,
    },
}

impl HeroMedia {
    pub fn decide(hero: &HeroConfig) -> Self {
        let image = || HeroMedia::Image {
            src: hero.image.clone(),
            alt: hero.image_alt.clone(),
        };

        let Some(video) = hero.video.as_ref().filter(|v| v.active) else {
            return image();
        };
        if video.video_src.is_none() && video.gif_src.is_none() && video.videos.is_empty() {
            return image();
        }

        if video.use_carousel && !video.videos.is_empty() {
            return HeroMedia::Carousel;
        }

        let alt = video
            .poster_image_alt
            .clone()
            .unwrap_or_else(|| hero.image_alt.clone());

        let gif = video.gif_src.clone().or_else(|| {
            video
                .video_src
                .clone()
                .filter(|src| src.ends_with(".gif"))
        });
        if let Some(src) = gif {
            return HeroMedia::Gif { src, alt };
        }

        match &video.video_src {
            Some(src) => HeroMedia::Video {
                src: src.clone(),
                poster: video
                    .poster_image
                    .clone()
                    .unwrap_or_else(|| hero.image.clone()),
                alt,
                video_type: video.video_type.unwrap_or_else(|| detect_video_type(src)),
                aria_label: video
                    .aria_label
                    .clone()
                    .unwrap_or_else(|| "Hero video".to_string()),
            },
            None => image(),
        }
    }
}

fn render_media(
    hero: &HeroConfig,
    request: CarouselRequest,
    query: &QueryState,
    assets: &AssetPaths,
) -> String {
    match HeroMedia::decide(hero) {
        HeroMedia::Image { src, alt } | HeroMedia::Gif { src, alt } => format!(
            r#"<img src="{}" alt="{}" class="w-full h-full object-cover">"#,
            escape(&assets.resolve(&src)),
            escape(&alt)
        ),
        HeroMedia::Carousel => match &hero.video {
            Some(video) => carousel::render(
                &video.videos,
                &video.carousel,
                video.muted,
                request,
                query,
                assets,
            ),
            None => String::new(),
        },
        HeroMedia::Video {
            src,
            poster,
            alt,
            video_type: VideoType::Local,
            aria_label,
        } => {
            let (auto_play, looping, muted) = hero
                .video
                .as_ref()
                .map(|v| (v.auto_play, v.looping, v.muted))
                .unwrap_or((true, true, true));
            format!(
                r#"<video src="{}" poster="{}" class="w-full h-full object-cover"{}{}{} playsinline aria-label="{}" title="{}"></video>"#,
                escape(&assets.resolve(&src)),
                escape(&assets.resolve(&poster)),
                if auto_play { " autoplay" } else { "" },
                if looping { " loop" } else { "" },
                if muted { " muted" } else { "" },
                escape(&aria_label),
                escape(&alt)
            )
        }
        HeroMedia::Video {
            src,
            video_type,
            aria_label,
            ..
        } => format!(
            r#"<iframe src="{}" class="w-full h-full" allow="autoplay; fullscreen" title="{}"></iframe>"#,
            escape(&embed_url(&src, video_type)),
            escape(&aria_label)
        ),
    }
}

/// 首屏区块，`request` 只在轮播模式下生效
pub fn render(
    hero: &HeroConfig,
    request: CarouselRequest,
    query: &QueryState,
    assets: &AssetPaths,
) -> String {
    format!(
        r#"<section id="hero" class="relative w-full">
<div class="relative w-full h-[70vh] overflow-hidden">{}</div>
<div class="max-w-4xl mx-auto px-4 py-10 text-center">
<h1 class="text-4xl md:text-6xl font-bold text-[#8B4513]">{}</h1>
<p class="mt-4 text-lg text-gray-700">{}</p>
</div>
</section>"#,
        render_media(hero, request, query, assets),
        escape(&hero.headline),
        escape(&hero.description)
    )
}
