//! 展示组件及其交互状态

pub mod carousel;
pub mod hero;
pub mod hotspot;
pub mod icon;
pub mod parallax;
