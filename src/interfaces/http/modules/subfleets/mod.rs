//! Subfleet module: registry and subfleet fare associations

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
