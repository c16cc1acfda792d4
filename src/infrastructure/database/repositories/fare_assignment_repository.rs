//! SeaORM implementation of FareAssignmentRepository
//!
//! `flight_fare` and `subfleet_fare` share the same layout; the owner
//! variant picks the table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::fare_repository::db_err;
use crate::domain::fare::{FareAssignment, FareAssignmentRepository, FareOverrides, FareOwner};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{flight_fare, subfleet_fare};
use crate::support::errors::InfraError;

type OverrideColumns = (Option<String>, Option<String>, Option<String>);

fn override_columns(overrides: &FareOverrides) -> OverrideColumns {
    (
        overrides.price.map(String::from),
        overrides.cost.map(String::from),
        overrides.capacity.map(String::from),
    )
}

struct Row {
    fare_id: i32,
    columns: OverrideColumns,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<flight_fare::Model> for Row {
    fn from(m: flight_fare::Model) -> Self {
        Self {
            fare_id: m.fare_id,
            columns: (m.price, m.cost, m.capacity),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<subfleet_fare::Model> for Row {
    fn from(m: subfleet_fare::Model) -> Self {
        Self {
            fare_id: m.fare_id,
            columns: (m.price, m.cost, m.capacity),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn row_to_domain(owner: &FareOwner, row: Row) -> DomainResult<FareAssignment> {
    let (price, cost, capacity) = &row.columns;
    let overrides = FareOverrides::parse(price.as_deref(), cost.as_deref(), capacity.as_deref())
        .map_err(|e| -> DomainError {
            InfraError::CorruptRow {
                table: match owner {
                    FareOwner::Flight(_) => "flight_fare",
                    FareOwner::Subfleet(_) => "subfleet_fare",
                },
                reason: e.to_string(),
            }
            .into()
        })?;

    Ok(FareAssignment {
        owner: owner.clone(),
        fare_id: row.fare_id,
        overrides,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

// ── SeaOrmFareAssignmentRepository ──────────────────────────────

pub struct SeaOrmFareAssignmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmFareAssignmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one(&self, owner: &FareOwner, fare_id: i32) -> DomainResult<Option<Row>> {
        let row = match owner {
            FareOwner::Flight(flight_id) => flight_fare::Entity::find()
                .filter(flight_fare::Column::FlightId.eq(flight_id.as_str()))
                .filter(flight_fare::Column::FareId.eq(fare_id))
                .one(&self.db)
                .await
                .map_err(db_err)?
                .map(Row::from),
            FareOwner::Subfleet(subfleet_id) => subfleet_fare::Entity::find()
                .filter(subfleet_fare::Column::SubfleetId.eq(*subfleet_id))
                .filter(subfleet_fare::Column::FareId.eq(fare_id))
                .one(&self.db)
                .await
                .map_err(db_err)?
                .map(Row::from),
        };
        Ok(row)
    }
}

#[async_trait]
impl FareAssignmentRepository for SeaOrmFareAssignmentRepository {
    async fn upsert(
        &self,
        owner: &FareOwner,
        fare_id: i32,
        overrides: FareOverrides,
    ) -> DomainResult<FareAssignment> {
        let now = Utc::now();
        let (price, cost, capacity) = override_columns(&overrides);

        // Upsert against the unique (owner, fare) index
        match owner {
            FareOwner::Flight(flight_id) => {
                let model = flight_fare::ActiveModel {
                    flight_id: Set(flight_id.clone()),
                    fare_id: Set(fare_id),
                    price: Set(price),
                    cost: Set(cost),
                    capacity: Set(capacity),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                flight_fare::Entity::insert(model)
                    .on_conflict(
                        OnConflict::columns([
                            flight_fare::Column::FlightId,
                            flight_fare::Column::FareId,
                        ])
                        .update_columns([
                            flight_fare::Column::Price,
                            flight_fare::Column::Cost,
                            flight_fare::Column::Capacity,
                            flight_fare::Column::UpdatedAt,
                        ])
                        .to_owned(),
                    )
                    .exec_without_returning(&self.db)
                    .await
                    .map_err(db_err)?;
            }
            FareOwner::Subfleet(subfleet_id) => {
                let model = subfleet_fare::ActiveModel {
                    subfleet_id: Set(*subfleet_id),
                    fare_id: Set(fare_id),
                    price: Set(price),
                    cost: Set(cost),
                    capacity: Set(capacity),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                subfleet_fare::Entity::insert(model)
                    .on_conflict(
                        OnConflict::columns([
                            subfleet_fare::Column::SubfleetId,
                            subfleet_fare::Column::FareId,
                        ])
                        .update_columns([
                            subfleet_fare::Column::Price,
                            subfleet_fare::Column::Cost,
                            subfleet_fare::Column::Capacity,
                            subfleet_fare::Column::UpdatedAt,
                        ])
                        .to_owned(),
                    )
                    .exec_without_returning(&self.db)
                    .await
                    .map_err(db_err)?;
            }
        }

        info!("Fare {} set on {}", fare_id, owner);

        let row = self.find_one(owner, fare_id).await?.ok_or_else(|| {
            DomainError::Storage(format!("fare {} on {} vanished after upsert", fare_id, owner))
        })?;
        row_to_domain(owner, row)
    }

    async fn find_for_owner(&self, owner: &FareOwner) -> DomainResult<Vec<FareAssignment>> {
        let rows: Vec<Row> = match owner {
            FareOwner::Flight(flight_id) => flight_fare::Entity::find()
                .filter(flight_fare::Column::FlightId.eq(flight_id.as_str()))
                .order_by_asc(flight_fare::Column::FareId)
                .all(&self.db)
                .await
                .map_err(db_err)?
                .into_iter()
                .map(Row::from)
                .collect(),
            FareOwner::Subfleet(subfleet_id) => subfleet_fare::Entity::find()
                .filter(subfleet_fare::Column::SubfleetId.eq(*subfleet_id))
                .order_by_asc(subfleet_fare::Column::FareId)
                .all(&self.db)
                .await
                .map_err(db_err)?
                .into_iter()
                .map(Row::from)
                .collect(),
        };

        rows.into_iter()
            .map(|row| row_to_domain(owner, row))
            .collect()
    }

    async fn find_for_fare(&self, fare_id: i32) -> DomainResult<Vec<FareAssignment>> {
        let flight_rows = flight_fare::Entity::find()
            .filter(flight_fare::Column::FareId.eq(fare_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let subfleet_rows = subfleet_fare::Entity::find()
            .filter(subfleet_fare::Column::FareId.eq(fare_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut links = Vec::with_capacity(flight_rows.len() + subfleet_rows.len());
        for m in flight_rows {
            let owner = FareOwner::Flight(m.flight_id.clone());
            links.push(row_to_domain(&owner, Row::from(m))?);
        }
        for m in subfleet_rows {
            let owner = FareOwner::Subfleet(m.subfleet_id);
            links.push(row_to_domain(&owner, Row::from(m))?);
        }
        Ok(links)
    }

    async fn delete(&self, owner: &FareOwner, fare_id: i32) -> DomainResult<bool> {
        let result = match owner {
            FareOwner::Flight(flight_id) => flight_fare::Entity::delete_many()
                .filter(flight_fare::Column::FlightId.eq(flight_id.as_str()))
                .filter(flight_fare::Column::FareId.eq(fare_id))
                .exec(&self.db)
                .await
                .map_err(db_err)?,
            FareOwner::Subfleet(subfleet_id) => subfleet_fare::Entity::delete_many()
                .filter(subfleet_fare::Column::SubfleetId.eq(*subfleet_id))
                .filter(subfleet_fare::Column::FareId.eq(fare_id))
                .exec(&self.db)
                .await
                .map_err(db_err)?,
        };

        debug!(
            "Fare {} removed from {}: {} row(s)",
            fare_id, owner, result.rows_affected
        );
        Ok(result.rows_affected > 0)
    }
}
