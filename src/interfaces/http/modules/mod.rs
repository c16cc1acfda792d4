pub mod fares;
pub mod flights;
pub mod health;
pub mod subfleets;
