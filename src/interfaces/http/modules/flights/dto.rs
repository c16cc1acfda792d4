//! Flight DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::NewFlight;
use crate::domain::Flight;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FlightResponse {
    pub id: String,
    /// Airline code plus flight number, e.g. "VMS1234"
    pub ident: String,
    pub airline_code: String,
    pub flight_number: String,
    pub dpt_airport: String,
    pub arr_airport: String,
    pub subfleet_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Flight> for FlightResponse {
    fn from(f: Flight) -> Self {
        Self {
            ident: f.ident(),
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
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFlightRequest {
    #[validate(length(min = 2, max = 4, message = "airline code must be 2-4 characters"))]
    pub airline_code: String,
    #[validate(length(min = 1, max = 10, message = "flight number is required"))]
    pub flight_number: String,
    #[validate(length(min = 3, max = 5))]
    pub dpt_airport: String,
    #[validate(length(min = 3, max = 5))]
    pub arr_airport: String,
    pub subfleet_id: Option<i32>,
}

impl From<CreateFlightRequest> for NewFlight {
    fn from(r: CreateFlightRequest) -> Self {
        Self {
            airline_code: r.airline_code,
            flight_number: r.flight_number,
            dpt_airport: r.dpt_airport,
            arr_airport: r.arr_airport,
            subfleet_id: r.subfleet_id,
        }
    }
}
