//! SeaORM implementations of SubfleetRepository and FlightRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::fare_repository::db_err;
use crate::domain::fleet::{Flight, FlightRepository, Subfleet, SubfleetRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{flight, subfleet};

fn subfleet_to_domain(s: subfleet::Model) -> Subfleet {
    Subfleet {
        id: s.id,
        type_code: s.type_code,
        name: s.name,
        created_at: s.created_at,
        updated_at: s.updated_at,
    }
}

fn flight_to_domain(f: flight::Model) -> Flight {
    Flight {
        id: f.id,
        airline_code: f.airline_code,
        flight_number: f.flight_number,
        dpt_airport: f.dpt_airport,
        arr_airport: f.arr_airport,
        subfleet_id: f.subfleet_id,
        created_at: f.created_at,
        updated_at: f.updated_at,
    }
}

// ── SeaOrmSubfleetRepository ────────────────────────────────────

pub struct SeaOrmSubfleetRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubfleetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubfleetRepository for SeaOrmSubfleetRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Subfleet>> {
        let model = subfleet::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(subfleet_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Subfleet>> {
        let models = subfleet::Entity::find()
            .order_by_asc(subfleet::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(subfleet_to_domain).collect())
    }

    async fn save(&self, s: Subfleet) -> DomainResult<Subfleet> {
        let now = Utc::now();
        let model = subfleet::ActiveModel {
            type_code: Set(s.type_code),
            name: Set(s.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Subfleet saved: {} ({})", result.type_code, result.id);
        Ok(subfleet_to_domain(result))
    }
}

// ── SeaOrmFlightRepository ──────────────────────────────────────

pub struct SeaOrmFlightRepository {
    db: DatabaseConnection,
}

impl SeaOrmFlightRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FlightRepository for SeaOrmFlightRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Flight>> {
        let model = flight::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(flight_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Flight>> {
        let models = flight::Entity::find()
            .order_by_asc(flight::Column::AirlineCode)
            .order_by_asc(flight::Column::FlightNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(flight_to_domain).collect())
    }

    async fn save(&self, f: Flight) -> DomainResult<Flight> {
        if self.find_by_id(&f.id).await?.is_some() {
            return Err(DomainError::Conflict(format!("flight {}", f.id)));
        }

        let model = flight::ActiveModel {
            id: Set(f.id),
            airline_code: Set(f.airline_code),
            flight_number: Set(f.flight_number),
            dpt_airport: Set(f.dpt_airport),
            arr_airport: Set(f.arr_airport),
            subfleet_id: Set(f.subfleet_id),
            created_at: Set(f.created_at),
            updated_at: Set(f.updated_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Flight saved: {}{} ({})",
            result.airline_code, result.flight_number, result.id
        );
        Ok(flight_to_domain(result))
    }
}
