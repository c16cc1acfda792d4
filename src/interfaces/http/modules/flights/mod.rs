//! Flight module: registry, fare links, effective fares

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
