//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_fares;
mod m20240101_000002_create_subfleets;
mod m20240101_000003_create_flights;
mod m20240101_000004_create_subfleet_fare;
mod m20240101_000005_create_flight_fare;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_fares::Migration),
            Box::new(m20240101_000002_create_subfleets::Migration),
            Box::new(m20240101_000003_create_flights::Migration),
            Box::new(m20240101_000004_create_subfleet_fare::Migration),
            Box::new(m20240101_000005_create_flight_fare::Migration),
        ]
    }
}
