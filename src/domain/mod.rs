pub mod fare;
pub mod fleet;
pub mod repositories;

// Re-export commonly used types
pub use fare::{Fare, FareAssignment, FareOverrides, FareOwner, OverrideValue, ResolvedFare};
pub use fleet::{Flight, Subfleet};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
