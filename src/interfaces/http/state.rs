//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::application::{FareService, FleetService};
use crate::domain::RepositoryProvider;

#[derive(Clone)]
pub struct AppState {
    pub fares: Arc<FareService>,
    pub fleet: Arc<FleetService>,
    /// Pinged by the health check; absent for in-memory storage
    pub db: Option<DatabaseConnection>,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, db: Option<DatabaseConnection>) -> Self {
        Self {
            fares: Arc::new(FareService::new(repos.clone())),
            fleet: Arc::new(FleetService::new(repos)),
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}
