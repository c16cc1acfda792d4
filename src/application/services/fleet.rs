//! Subfleet and flight registry

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Flight, RepositoryProvider, Subfleet};

/// Input for scheduling a flight
#[derive(Debug, Clone)]
pub struct NewFlight {
    pub airline_code: String,
    pub flight_number: String,
    pub dpt_airport: String,
    pub arr_airport: String,
    pub subfleet_id: Option<i32>,
}

/// Service for subfleets and flights
pub struct FleetService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FleetService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create_subfleet(&self, type_code: &str, name: &str) -> DomainResult<Subfleet> {
        if type_code.trim().is_empty() {
            return Err(DomainError::Validation("subfleet type is required".to_string()));
        }
        let now = Utc::now();
        let subfleet = self
            .repos
            .subfleets()
            .save(Subfleet {
                id: 0,
                type_code: type_code.trim().to_uppercase(),
                name: name.to_string(),
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(subfleet_id = subfleet.id, type_code = %subfleet.type_code, "Subfleet created");
        Ok(subfleet)
    }

    pub async fn get_subfleet(&self, id: i32) -> DomainResult<Subfleet> {
        self.repos
            .subfleets()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Subfleet", "id", id))
    }

    pub async fn list_subfleets(&self) -> DomainResult<Vec<Subfleet>> {
        self.repos.subfleets().find_all().await
    }

    /// Schedule a flight. The subfleet, when given, must exist.
    pub async fn create_flight(&self, new: NewFlight) -> DomainResult<Flight> {
        if new.airline_code.trim().is_empty() || new.flight_number.trim().is_empty() {
            return Err(DomainError::Validation(
                "airline code and flight number are required".to_string(),
            ));
        }
        if let Some(subfleet_id) = new.subfleet_id {
            self.get_subfleet(subfleet_id).await?;
        }

        let now = Utc::now();
        let flight = self
            .repos
            .flights()
            .save(Flight {
                id: Uuid::new_v4().to_string(),
                airline_code: new.airline_code.trim().to_uppercase(),
                flight_number: new.flight_number.trim().to_string(),
                dpt_airport: new.dpt_airport.trim().to_uppercase(),
                arr_airport: new.arr_airport.trim().to_uppercase(),
                subfleet_id: new.subfleet_id,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(flight = %flight.ident(), id = %flight.id, "Flight created");
        Ok(flight)
    }

    pub async fn get_flight(&self, id: &str) -> DomainResult<Flight> {
        self.repos
            .flights()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Flight", "id", id))
    }

    pub async fn list_flights(&self) -> DomainResult<Vec<Flight>> {
        self.repos.flights().find_all().await
    }
}
