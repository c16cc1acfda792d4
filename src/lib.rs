//! # Fare Service
//!
//! Fares (price, cost, capacity) attached to flights and subfleets, with
//! per-association absolute or percentage overrides.
//!
//! ## Architecture
//!
//! - **domain**: fare and fleet entities, override resolution, repository traits
//! - **application**: `FareService` and `FleetService` use cases
//! - **infrastructure**: SeaORM (SQLite) and in-memory repository providers
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: runtime bootstrap and graceful shutdown
//! - **support**: errors, percentage math, shutdown signalling

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

pub use application::{FareService, FleetService, NewFlight};

// Re-export database types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};

pub use interfaces::create_api_router;
