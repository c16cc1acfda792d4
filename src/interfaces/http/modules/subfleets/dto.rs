//! Subfleet DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Subfleet;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubfleetResponse {
    pub id: i32,
    pub type_code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Subfleet> for SubfleetResponse {
    fn from(s: Subfleet) -> Self {
        Self {
            id: s.id,
            type_code: s.type_code,
            name: s.name,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubfleetRequest {
    /// Aircraft type, e.g. "B777"
    #[validate(length(min = 1, max = 20, message = "subfleet type is required"))]
    pub type_code: String,
    #[validate(length(max = 100))]
    pub name: String,
}
