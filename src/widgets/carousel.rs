//! 视频轮播
//!
//! [`VideoCarousel`] 描述轮播的交互状态。服务端按查询串恢复状态并渲染，
//! 控件链接指向下一状态；前端脚本按同样的规则在页面内切换。

use serde::Deserialize;
use std::time::Duration;

use super::hero::{detect_video_type, embed_url, VideoItem, VideoType};
use super::icon::Icon;
use crate::core::assets::AssetPaths;
use crate::core::html::{escape, QueryState};

/// 轮播设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub auto_play: bool,
    pub auto_advance: bool,
    /// 每个视频停留的秒数
    pub auto_advance_delay: u64,
    pub show_controls: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_play: true,
            auto_advance: true,
            auto_advance_delay: 10,
            show_controls: true,
            looping: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCarousel {
    index: usize,
    len: usize,
    playing: bool,
    paused: bool,
}

impl VideoCarousel {
    pub fn new(len: usize, auto_play: bool) -> Self {
        Self {
            index: 0,
            len,
            playing: auto_play,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// 下一个，末尾回到开头
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.paused = false;
    }

    /// 上一个，开头回到末尾
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.paused = false;
    }

    /// 跳到指定位置，越界或与当前相同时忽略
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len || index == self.index {
            return;
        }
        self.index = index;
        self.paused = false;
    }

    pub fn play(&mut self) {
        self.playing = true;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.paused = true;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// 是否应该启动自动切换计时器
    pub fn should_auto_advance(&self, settings: &CarouselSettings) -> bool {
        settings.auto_advance && settings.looping && self.len > 1 && self.playing && !self.paused
    }

    /// 自动切换前的等待时长：已知视频时长优先，否则使用配置
    pub fn advance_delay(&self, video_duration: Option<f64>, settings: &CarouselSettings) -> Duration {
        match video_duration {
            Some(secs) if secs > 0.0 && secs.is_finite() => Duration::from_secs_f64(secs),
            _ => Duration::from_secs(settings.auto_advance_delay),
        }
    }

    /// 计数标签，例如 "2 / 3"
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

/// 查询串里的轮播状态：`?slide=` 当前位置，`?play=0|1` 播放开关
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselRequest {
    pub slide: Option<usize>,
    pub playing: Option<bool>,
}

impl CarouselRequest {
    /// 解析不了的值按未提供处理
    pub fn parse(slide: Option<&str>, play: Option<&str>) -> Self {
        Self {
            slide: slide.and_then(|s| s.trim().parse().ok()),
            playing: match play.map(str::trim) {
                Some("1") => Some(true),
                Some("0") => Some(false),
                _ => None,
            },
        }
    }
}

impl VideoCarousel {
    /// 按查询串恢复轮播状态
    pub fn restore(len: usize, settings: &CarouselSettings, request: CarouselRequest) -> Self {
        let mut carousel = Self::new(len, settings.auto_play);
        if let Some(index) = request.slide {
            carousel.go_to(index);
        }
        match request.playing {
            Some(true) => carousel.play(),
            Some(false) => carousel.pause(),
            None => {}
        }
        carousel
    }

    /// 指向该状态的链接，与默认值相同的参数省略
    fn href(&self, settings: &CarouselSettings, query: &QueryState) -> String {
        let slide = if self.index == 0 {
            String::new()
        } else {
            self.index.to_string()
        };
        let play = if self.playing == settings.auto_play {
            ""
        } else if self.playing {
            "1"
        } else {
            "0"
        };
        query
            .clone()
            .set("slide", slide)
            .set("play", play)
            .href("hero")
    }

    fn step(&self, f: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        f(&mut next);
        next
    }
}

/// 渲染轮播
///
/// 控件是普通链接，指向切换后的状态；脚本加载后在页面内切换。
pub fn render(
    videos: &[VideoItem],
    settings: &CarouselSettings,
    muted: bool,
    request: CarouselRequest,
    query: &QueryState,
    assets: &AssetPaths,
) -> String {
    if videos.is_empty() {
        return String::new();
    }
    let carousel = VideoCarousel::restore(videos.len(), settings, request);

    let mut slides = String::new();
    for (i, video) in videos.iter().enumerate() {
        let label = video
            .aria_label
            .clone()
            .unwrap_or_else(|| format!("Video {} of {}", i + 1, videos.len()));
        let kind = video
            .video_type
            .unwrap_or_else(|| detect_video_type(&video.video_src));
        let current = i == carousel.index();
        let hidden = if current { "" } else { " hidden" };
        let media = match kind {
            VideoType::Local => format!(
                r#"<video src="{}" class="w-full h-full object-cover"{}{}{} playsinline aria-label="{}"></video>"#,
                escape(&assets.resolve(&video.video_src)),
                if current && carousel.is_playing() { " autoplay" } else { "" },
                if settings.looping { " loop" } else { "" },
                if muted { " muted" } else { "" },
                escape(&label)
            ),
            VideoType::Youtube | VideoType::Vimeo => format!(
                r#"<iframe src="{}" class="w-full h-full" allow="autoplay; fullscreen" title="{}"></iframe>"#,
                escape(&embed_url(&video.video_src, kind)),
                escape(&label)
            ),
        };
        slides.push_str(&format!(
            r#"<div class="carousel-slide absolute inset-0{}" data-index="{}">{}</div>"#,
            hidden, i, media
        ));
    }

    let controls = if settings.show_controls && videos.len() > 1 {
        let dots: String = (0..videos.len())
            .map(|i| {
                format!(
                    r#"<a href="{}" class="carousel-dot{}" data-go-to="{}" aria-label="Go to video {}"></a>"#,
                    escape(&carousel.step(|c| c.go_to(i)).href(settings, query)),
                    if i == carousel.index() { " active" } else { "" },
                    i,
                    i + 1
                )
            })
            .collect();
        format!(
            r#"<a href="{}" class="carousel-prev" aria-label="Previous video">{}</a>
<a href="{}" class="carousel-next" aria-label="Next video">{}</a>
<a href="{}" class="carousel-toggle" aria-label="{}">{}</a>
<div class="carousel-dots">{}</div>
<div class="carousel-counter">{}</div>"#,
            escape(&carousel.step(VideoCarousel::previous).href(settings, query)),
            Icon::ChevronLeft.svg("w-6 h-6 text-white"),
            escape(&carousel.step(VideoCarousel::next).href(settings, query)),
            Icon::ChevronRight.svg("w-6 h-6 text-white"),
            escape(&carousel.step(VideoCarousel::toggle).href(settings, query)),
            if carousel.is_playing() { "Pause video" } else { "Play video" },
            if carousel.is_playing() {
                Icon::Pause.svg("w-5 h-5 text-white")
            } else {
                Icon::Play.svg("w-5 h-5 text-white")
            },
            dots,
            carousel.counter_label()
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="video-carousel relative w-full h-full" data-start="{}" data-playing="{}" data-auto-advance="{}" data-delay="{}">{}{}</div>"#,
        carousel.index(),
        carousel.is_playing(),
        carousel.should_auto_advance(settings),
        carousel.advance_delay(None, settings).as_secs(),
        slides,
        controls
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_wrap() {
        let mut carousel = VideoCarousel::new(3, true);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.counter_label(), "3 / 3");
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut carousel = VideoCarousel::new(3, true);
        carousel.go_to(1);
        assert_eq!(carousel.index(), 1);
        carousel.go_to(7);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_navigation_clears_pause() {
        let mut carousel = VideoCarousel::new(3, true);
        carousel.pause();
        assert!(carousel.is_paused());
        assert!(!carousel.is_playing());
        carousel.next();
        assert!(!carousel.is_paused());

        carousel.toggle();
        assert!(carousel.is_playing());
        carousel.toggle();
        assert!(!carousel.is_playing());
    }

    #[test]
    fn test_advance_delay_prefers_known_duration() {
        let settings = CarouselSettings::default();
        let carousel = VideoCarousel::new(3, true);
        assert_eq!(
            carousel.advance_delay(Some(7.5), &settings),
            Duration::from_millis(7500)
        );
        assert_eq!(carousel.advance_delay(Some(0.0), &settings), Duration::from_secs(10));
        assert_eq!(carousel.advance_delay(None, &settings), Duration::from_secs(10));
    }

    #[test]
    fn test_single_video_never_auto_advances() {
        let settings = CarouselSettings::default();
        assert!(!VideoCarousel::new(1, true).should_auto_advance(&settings));
        assert!(VideoCarousel::new(2, true).should_auto_advance(&settings));
    }

    #[test]
    fn test_render_marks_first_slide_visible() {
        let videos = vec![
            VideoItem::local("/assets/a.mp4"),
            VideoItem::local("/assets/b.mp4"),
        ];
        let html = render(
            &videos,
            &CarouselSettings::default(),
            true,
            CarouselRequest::default(),
            &QueryState::new(),
            &AssetPaths::default(),
        );
        assert!(html.contains(r#"<div class="carousel-slide absolute inset-0" data-index="0">"#));
        assert!(html.contains(r#"<div class="carousel-slide absolute inset-0 hidden" data-index="1">"#));
        assert!(html.contains("1 / 2"));
        assert!(html.contains("Video 2 of 2"));
        assert!(html.contains(r#"data-start="0" data-playing="true""#));
    }

    #[test]
    fn test_request_parsing_ignores_garbage() {
        assert_eq!(
            CarouselRequest::parse(Some("2"), Some("0")),
            CarouselRequest {
                slide: Some(2),
                playing: Some(false)
            }
        );
        assert_eq!(
            CarouselRequest::parse(Some("abc"), Some("yes")),
            CarouselRequest::default()
        );
    }

    #[test]
    fn test_restore_applies_slide_and_pause() {
        let settings = CarouselSettings::default();
        let request = CarouselRequest::parse(Some("2"), Some("0"));
        let carousel = VideoCarousel::restore(3, &settings, request);
        assert_eq!(carousel.index(), 2);
        assert!(carousel.is_paused());
        assert!(!carousel.should_auto_advance(&settings));

        // 越界位置回到第一个
        let carousel = VideoCarousel::restore(3, &settings, CarouselRequest::parse(Some("9"), None));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_playing());
    }

    #[test]
    fn test_controls_link_to_next_states() {
        let videos = vec![
            VideoItem::local("/assets/a.mp4"),
            VideoItem::local("/assets/b.mp4"),
            VideoItem::local("/assets/c.mp4"),
        ];
        let query = QueryState::new().set("box", "b1");
        let html = render(
            &videos,
            &CarouselSettings::default(),
            true,
            CarouselRequest::parse(Some("1"), None),
            &query,
            &AssetPaths::default(),
        );

        assert!(html.contains(r#"<div class="carousel-slide absolute inset-0" data-index="1">"#));
        assert!(html.contains("2 / 3"));
        assert!(html.contains(r#"<a href="?box=b1#hero" class="carousel-prev""#));
        assert!(html.contains(r#"<a href="?box=b1&amp;slide=2#hero" class="carousel-next""#));
        assert!(html.contains(
            r#"<a href="?box=b1&amp;slide=1&amp;play=0#hero" class="carousel-toggle" aria-label="Pause video""#
        ));
        assert!(html.contains(r#"class="carousel-dot active" data-go-to="1""#));
        // 只有当前视频自动播放
        assert_eq!(html.matches(" autoplay").count(), 1);
    }

    #[test]
    fn test_paused_render_links_back_to_play() {
        let videos = vec![
            VideoItem::local("/assets/a.mp4"),
            VideoItem::local("/assets/b.mp4"),
        ];
        let html = render(
            &videos,
            &CarouselSettings::default(),
            true,
            CarouselRequest::parse(None, Some("0")),
            &QueryState::new(),
            &AssetPaths::default(),
        );
        assert!(html.contains(r#"<a href="?#hero" class="carousel-toggle" aria-label="Play video""#));
        assert!(html.contains(r#"data-auto-advance="false""#));
        assert!(!html.contains(" autoplay"));
    }
}
