//! 视差背景

use crate::core::assets::AssetPaths;
use crate::core::html::escape;

#[derive(Debug, Clone)]
pub struct Parallax {
    pub image_src: String,
    pub image_alt: String,
    /// 0-1，0.5 表示半速
    pub speed: f64,
    pub opacity: f64,
    /// 图片相对视口的缩放
    pub scale: f64,
}

impl Parallax {
    pub fn new(image_src: impl Into<String>) -> Self {
        Self {
            image_src: image_src.into(),
            image_alt: "Background".to_string(),
            speed: 0.3,
            opacity: 0.08,
            scale: 0.6,
        }
    }

    pub fn translate_y(&self, scroll_y: f64) -> f64 {
        scroll_y * self.speed
    }

    pub fn render(&self, assets: &AssetPaths) -> String {
        format!(
            r#"<div class="fixed inset-0 overflow-hidden pointer-events-none" style="z-index:-1">
<div id="parallax-layer" data-speed="{speed}" class="absolute inset-0 w-full h-[200%] flex items-center justify-center" style="transform:translateY({start}px);opacity:{opacity};will-change:transform">
<div style="width:{size}%;height:{size}%;position:relative"><img src="{src}" alt="{alt}" class="object-contain w-full h-full"></div>
</div>
</div>
<script>
(function () {{
  var layer = document.getElementById("parallax-layer");
  if (!layer) return;
  var speed = parseFloat(layer.dataset.speed);
  var ticking = false;
  window.addEventListener("scroll", function () {{
    if (ticking) return;
    ticking = true;
    window.requestAnimationFrame(function () {{
      layer.style.transform = "translateY(" + window.scrollY * speed + "px)";
      ticking = false;
    }});
  }}, {{ passive: true }});
}})();
</script>"#,
            speed = self.speed,
            start = self.translate_y(0.0),
            opacity = self.opacity,
            size = self.scale * 100.0,
            src = escape(&assets.resolve(&self.image_src)),
            alt = escape(&self.image_alt),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_follows_scroll() {
        let parallax = Parallax::new("/assets/chakali.png");
        assert_eq!(parallax.translate_y(0.0), 0.0);
        assert!((parallax.translate_y(1000.0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_uses_base_path() {
        let parallax = Parallax::new("/assets/chakali.png");
        let html = parallax.render(&AssetPaths::new("/cmaa-foods"));
        assert!(html.contains(r#"src="/cmaa-foods/assets/chakali.png""#));
        assert!(html.contains(r#"data-speed="0.3""#));
    }
}
