//! Subfleet and flight entities

use chrono::{DateTime, Utc};

/// A group of aircraft of one type
#[derive(Debug, Clone, PartialEq)]
pub struct Subfleet {
    pub id: i32,
    /// ICAO aircraft type, e.g. "B777"
    pub type_code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A scheduled service
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: String,
    pub airline_code: String,
    pub flight_number: String,
    pub dpt_airport: String,
    pub arr_airport: String,
    /// Operating subfleet, whose fares apply unless the flight overrides them
    pub subfleet_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flight {
    /// e.g. "VMS1234"
    pub fn ident(&self) -> String {
        format!("{}{}", self.airline_code, self.flight_number)
    }
}
