//! Database entities module

pub mod fare;
pub mod flight;
pub mod flight_fare;
pub mod subfleet;
pub mod subfleet_fare;

pub use fare::Entity as Fare;
pub use flight::Entity as Flight;
pub use flight_fare::Entity as FlightFare;
pub use subfleet::Entity as Subfleet;
pub use subfleet_fare::Entity as SubfleetFare;
