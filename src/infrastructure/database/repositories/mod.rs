//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod fare_assignment_repository;
pub mod fare_repository;
pub mod fleet_repository;
pub mod repository_provider;

pub use repository_provider::SeaOrmRepositoryProvider;
