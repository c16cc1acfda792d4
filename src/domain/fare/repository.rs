//! Fare & fare-assignment repository interfaces

use async_trait::async_trait;

use super::model::{Fare, FareAssignment, FareOverrides, FareOwner};
use crate::domain::DomainResult;

#[async_trait]
pub trait FareRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Fare>>;
    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Fare>>;
    /// All fares, ordered by code
    async fn find_all(&self) -> DomainResult<Vec<Fare>>;
    async fn save(&self, fare: Fare) -> DomainResult<Fare>;
    async fn update(&self, fare: Fare) -> DomainResult<()>;
    /// Deletes the fare and every association pointing at it
    async fn delete(&self, id: i32) -> DomainResult<()>;
}

/// Flight and subfleet fare links share one storage contract, keyed by owner.
#[async_trait]
pub trait FareAssignmentRepository: Send + Sync {
    /// Insert the (owner, fare) link or replace its overrides if it exists.
    async fn upsert(
        &self,
        owner: &FareOwner,
        fare_id: i32,
        overrides: FareOverrides,
    ) -> DomainResult<FareAssignment>;

    async fn find_for_owner(&self, owner: &FareOwner) -> DomainResult<Vec<FareAssignment>>;

    /// Every flight and subfleet link pointing at `fare_id`.
    async fn find_for_fare(&self, fare_id: i32) -> DomainResult<Vec<FareAssignment>>;

    /// Returns `false` when no such link existed.
    async fn delete(&self, owner: &FareOwner, fare_id: i32) -> DomainResult<bool>;
}
