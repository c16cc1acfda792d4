//! In-memory repository provider

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::fare::{FareAssignmentRepository, FareRepository};
use crate::domain::fleet::{FlightRepository, SubfleetRepository};
use crate::domain::{
    DomainError, DomainResult, Fare, FareAssignment, FareOverrides, FareOwner, Flight,
    RepositoryProvider, Subfleet,
};

/// In-memory storage for development and testing
pub struct InMemoryRepositoryProvider {
    fares: DashMap<i32, Fare>,
    /// Fare code to id; the entry lock makes the code check and claim atomic
    fare_codes: DashMap<String, i32>,
    subfleets: DashMap<i32, Subfleet>,
    flights: DashMap<String, Flight>,
    assignments: DashMap<(FareOwner, i32), FareAssignment>,
    fare_counter: AtomicI32,
    subfleet_counter: AtomicI32,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            fares: DashMap::new(),
            fare_codes: DashMap::new(),
            subfleets: DashMap::new(),
            flights: DashMap::new(),
            assignments: DashMap::new(),
            fare_counter: AtomicI32::new(1),
            subfleet_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn fares(&self) -> &dyn FareRepository {
        self
    }

    fn fare_assignments(&self) -> &dyn FareAssignmentRepository {
        self
    }

    fn subfleets(&self) -> &dyn SubfleetRepository {
        self
    }

    fn flights(&self) -> &dyn FlightRepository {
        self
    }
}

#[async_trait]
impl FareRepository for InMemoryRepositoryProvider {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Fare>> {
        Ok(self.fares.get(&id).map(|f| f.clone()))
    }

    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Fare>> {
        let Some(id) = self.fare_codes.get(code).map(|e| *e.value()) else {
            return Ok(None);
        };
        Ok(self.fares.get(&id).map(|f| f.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Fare>> {
        let mut fares: Vec<Fare> = self.fares.iter().map(|f| f.value().clone()).collect();
        fares.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(fares)
    }

    async fn save(&self, mut fare: Fare) -> DomainResult<Fare> {
        fare.id = match self.fare_codes.entry(fare.code.clone()) {
            Entry::Occupied(_) => {
                return Err(DomainError::Conflict(format!("fare code {}", fare.code)))
            }
            Entry::Vacant(slot) => {
                let id = self.fare_counter.fetch_add(1, Ordering::SeqCst);
                slot.insert(id);
                id
            }
        };
        let now = Utc::now();
        fare.created_at = now;
        fare.updated_at = now;
        self.fares.insert(fare.id, fare.clone());
        Ok(fare)
    }

    async fn update(&self, mut fare: Fare) -> DomainResult<()> {
        let old_code = self
            .fares
            .get(&fare.id)
            .map(|f| f.code.clone())
            .ok_or_else(|| DomainError::not_found("Fare", "id", fare.id))?;

        if old_code != fare.code {
            match self.fare_codes.entry(fare.code.clone()) {
                Entry::Occupied(_) => {
                    return Err(DomainError::Conflict(format!("fare code {}", fare.code)))
                }
                Entry::Vacant(slot) => {
                    slot.insert(fare.id);
                }
            }
        }

        let id = fare.id;
        let code_changed = old_code != fare.code;
        match self.fares.get_mut(&id) {
            Some(mut existing) => {
                fare.created_at = existing.created_at;
                fare.updated_at = Utc::now();
                *existing = fare;
            }
            None => {
                // Deleted while the new code was being claimed
                self.fare_codes.remove_if(&fare.code, |_, owner| *owner == id);
                return Err(DomainError::not_found("Fare", "id", id));
            }
        }
        if code_changed {
            self.fare_codes.remove_if(&old_code, |_, owner| *owner == id);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let (_, fare) = self
            .fares
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("Fare", "id", id))?;
        self.fare_codes.remove_if(&fare.code, |_, owner| *owner == id);
        self.assignments.retain(|(_, fare_id), _| *fare_id != id);
        Ok(())
    }
}

#[async_trait]
impl FareAssignmentRepository for InMemoryRepositoryProvider {
    async fn upsert(
        &self,
        owner: &FareOwner,
        fare_id: i32,
        overrides: FareOverrides,
    ) -> DomainResult<FareAssignment> {
        let now = Utc::now();
        let assignment = match self.assignments.entry((owner.clone(), fare_id)) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.overrides = overrides;
                existing.updated_at = now;
                existing.clone()
            }
            Entry::Vacant(entry) => entry
                .insert(FareAssignment {
                    owner: owner.clone(),
                    fare_id,
                    overrides,
                    created_at: now,
                    updated_at: now,
                })
                .clone(),
        };
        Ok(assignment)
    }

    async fn find_for_owner(&self, owner: &FareOwner) -> DomainResult<Vec<FareAssignment>> {
        let mut assignments: Vec<FareAssignment> = self
            .assignments
            .iter()
            .filter(|a| &a.owner == owner)
            .map(|a| a.value().clone())
            .collect();
        assignments.sort_by_key(|a| a.fare_id);
        Ok(assignments)
    }

    async fn find_for_fare(&self, fare_id: i32) -> DomainResult<Vec<FareAssignment>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.fare_id == fare_id)
            .map(|a| a.value().clone())
            .collect())
    }

    async fn delete(&self, owner: &FareOwner, fare_id: i32) -> DomainResult<bool> {
        Ok(self
            .assignments
            .remove(&(owner.clone(), fare_id))
            .is_some())
    }
}

#[async_trait]
impl SubfleetRepository for InMemoryRepositoryProvider {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Subfleet>> {
        Ok(self.subfleets.get(&id).map(|s| s.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Subfleet>> {
        let mut subfleets: Vec<Subfleet> =
            self.subfleets.iter().map(|s| s.value().clone()).collect();
        subfleets.sort_by_key(|s| s.id);
        Ok(subfleets)
    }

    async fn save(&self, mut subfleet: Subfleet) -> DomainResult<Subfleet> {
        let now = Utc::now();
        subfleet.id = self.subfleet_counter.fetch_add(1, Ordering::SeqCst);
        subfleet.created_at = now;
        subfleet.updated_at = now;
        self.subfleets.insert(subfleet.id, subfleet.clone());
        Ok(subfleet)
    }
}

#[async_trait]
impl FlightRepository for InMemoryRepositoryProvider {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Flight>> {
        Ok(self.flights.get(id).map(|f| f.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Flight>> {
        let mut flights: Vec<Flight> = self.flights.iter().map(|f| f.value().clone()).collect();
        flights.sort_by(|a, b| {
            (&a.airline_code, &a.flight_number).cmp(&(&b.airline_code, &b.flight_number))
        });
        Ok(flights)
    }

    async fn save(&self, flight: Flight) -> DomainResult<Flight> {
        match self.flights.entry(flight.id.clone()) {
            Entry::Occupied(_) => Err(DomainError::Conflict(format!("flight {}", flight.id))),
            Entry::Vacant(entry) => Ok(entry.insert(flight).clone()),
        }
    }
}
