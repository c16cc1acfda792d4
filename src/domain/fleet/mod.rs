//! Fleet aggregate: subfleets and the flights they operate

pub mod model;
pub mod repository;

pub use model::{Flight, Subfleet};
pub use repository::{FlightRepository, SubfleetRepository};
