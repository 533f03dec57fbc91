//! Health and liveness endpoints

pub mod handlers;

pub use handlers::{health_check, ping, HealthState};
