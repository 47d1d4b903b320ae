//! 站点页面：首页、甜品、季节限定、商品详情

pub mod handler;
pub mod model;
pub mod view;
