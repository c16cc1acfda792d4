//! SeaORM implementation of FareRepository

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::fare::{Fare, FareRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{fare, flight_fare, subfleet_fare};
use crate::support::errors::InfraError;

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn db_err(e: sea_orm::DbErr) -> DomainError {
    InfraError::Database(e).into()
}

fn parse_money(column: &str, text: &str) -> DomainResult<Decimal> {
    Decimal::from_str(text).map_err(|e| {
        InfraError::CorruptRow {
            table: "fares",
            reason: format!("{} '{}': {}", column, text, e),
        }
        .into()
    })
}

fn entity_to_domain(f: fare::Model) -> DomainResult<Fare> {
    Ok(Fare {
        id: f.id,
        price: parse_money("price", &f.price)?,
        cost: parse_money("cost", &f.cost)?,
        code: f.code,
        name: f.name,
        capacity: f.capacity,
        notes: f.notes,
        active: f.active,
        created_at: f.created_at,
        updated_at: f.updated_at,
    })
}

// ── SeaOrmFareRepository ────────────────────────────────────────

pub struct SeaOrmFareRepository {
    db: DatabaseConnection,
}

impl SeaOrmFareRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_code_free(&self, code: &str, except_id: Option<i32>) -> DomainResult<()> {
        match self.find_by_code(code).await? {
            Some(f) if Some(f.id) != except_id => {
                Err(DomainError::Conflict(format!("fare code {}", code)))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl FareRepository for SeaOrmFareRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Fare>> {
        fare::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(entity_to_domain)
            .transpose()
    }

    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Fare>> {
        fare::Entity::find()
            .filter(fare::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(entity_to_domain)
            .transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Fare>> {
        let models = fare::Entity::find()
            .order_by_asc(fare::Column::Code)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn save(&self, f: Fare) -> DomainResult<Fare> {
        self.ensure_code_free(&f.code, None).await?;

        let now = Utc::now();
        let model = fare::ActiveModel {
            code: Set(f.code),
            name: Set(f.name),
            price: Set(f.price.to_string()),
            cost: Set(f.cost.to_string()),
            capacity: Set(f.capacity),
            notes: Set(f.notes),
            active: Set(f.active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Fare saved: {} ({})", result.code, result.id);
        entity_to_domain(result)
    }

    async fn update(&self, f: Fare) -> DomainResult<()> {
        let existing = fare::Entity::find_by_id(f.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Fare", "id", f.id));
        };
        self.ensure_code_free(&f.code, Some(f.id)).await?;

        let model = fare::ActiveModel {
            id: Set(f.id),
            code: Set(f.code),
            name: Set(f.name),
            price: Set(f.price.to_string()),
            cost: Set(f.cost.to_string()),
            capacity: Set(f.capacity),
            notes: Set(f.notes),
            active: Set(f.active),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        flight_fare::Entity::delete_many()
            .filter(flight_fare::Column::FareId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        subfleet_fare::Entity::delete_many()
            .filter(subfleet_fare::Column::FareId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = fare::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("Fare", "id", id));
        }
        txn.commit().await.map_err(db_err)?;
        info!("Fare deleted: {}", id);
        Ok(())
    }
}
