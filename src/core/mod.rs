//! 核心层：错误处理、响应结构、中间件与页面渲染辅助

pub mod assets;
pub mod error;
pub mod html;
pub mod middleware;
pub mod response;
