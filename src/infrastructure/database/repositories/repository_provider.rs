//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::fare::{FareAssignmentRepository, FareRepository};
use crate::domain::fleet::{FlightRepository, SubfleetRepository};
use crate::domain::repositories::RepositoryProvider;

use super::fare_assignment_repository::SeaOrmFareAssignmentRepository;
use super::fare_repository::SeaOrmFareRepository;
use super::fleet_repository::{SeaOrmFlightRepository, SeaOrmSubfleetRepository};

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let fare = repos.fares().find_by_code("Y").await?;
/// let links = repos.fare_assignments().find_for_fare(fare_id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    fares: SeaOrmFareRepository,
    fare_assignments: SeaOrmFareAssignmentRepository,
    subfleets: SeaOrmSubfleetRepository,
    flights: SeaOrmFlightRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            fares: SeaOrmFareRepository::new(db.clone()),
            fare_assignments: SeaOrmFareAssignmentRepository::new(db.clone()),
            subfleets: SeaOrmSubfleetRepository::new(db.clone()),
            flights: SeaOrmFlightRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn fares(&self) -> &dyn FareRepository {
        &self.fares
    }

    fn fare_assignments(&self) -> &dyn FareAssignmentRepository {
        &self.fare_assignments
    }

    fn subfleets(&self) -> &dyn SubfleetRepository {
        &self.subfleets
    }

    fn flights(&self) -> &dyn FlightRepository {
        &self.flights
    }
}
