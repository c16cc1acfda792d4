//! Fleet repository interfaces

use async_trait::async_trait;

use super::model::{Flight, Subfleet};
use crate::domain::DomainResult;

#[async_trait]
pub trait SubfleetRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Subfleet>>;
    async fn find_all(&self) -> DomainResult<Vec<Subfleet>>;
    async fn save(&self, subfleet: Subfleet) -> DomainResult<Subfleet>;
}

#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Flight>>;
    async fn find_all(&self) -> DomainResult<Vec<Flight>>;
    async fn save(&self, flight: Flight) -> DomainResult<Flight>;
}
