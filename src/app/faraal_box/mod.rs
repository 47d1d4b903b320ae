//! Faraal 盒子：容量受限的零食组合

pub mod gesture;
pub mod handler;
pub mod model;
pub mod service;
pub mod view;

pub use model::{BoxEntry, BoxError, BoxView, FaraalBox, MutationOutcome};
pub use service::{BoxMutation, BoxService};
