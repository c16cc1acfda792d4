//! Repository access for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::fare::{FareAssignmentRepository, FareRepository};
use super::fleet::{FlightRepository, SubfleetRepository};
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let fare = repos.fares().find_by_code("Y").await?;
///     let links = repos.fare_assignments().find_for_owner(&FareOwner::Subfleet(1)).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn fares(&self) -> &dyn FareRepository;
    fn fare_assignments(&self) -> &dyn FareAssignmentRepository;
    fn subfleets(&self) -> &dyn SubfleetRepository;
    fn flights(&self) -> &dyn FlightRepository;
}
