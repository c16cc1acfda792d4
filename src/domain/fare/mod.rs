//! Fare aggregate
//!
//! Contains the Fare entity, typed overrides, and the resolution logic
//! shared by flight-level and subfleet-level associations.

pub mod model;
pub mod repository;

pub use model::{Fare, FareAssignment, FareOverrides, FareOwner, OverrideValue, ResolvedFare};
pub use repository::{FareAssignmentRepository, FareRepository};
