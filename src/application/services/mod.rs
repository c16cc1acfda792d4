//! Application services

mod fare;
mod fleet;

pub use fare::FareService;
pub use fleet::{FleetService, NewFlight};
