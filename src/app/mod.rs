//! 应用层

pub mod blog;
pub mod catalog;
pub mod checkout;
pub mod faraal_box;
pub mod pages;
pub mod search;
