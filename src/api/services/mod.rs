pub mod admin;
pub mod go;
pub mod health;

pub use go::{GoService, go_routes};
pub use health::{AppStartTime, HealthService, health_routes};
