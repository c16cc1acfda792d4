//! Fare catalog module: CRUD and the shared fare association DTOs

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
