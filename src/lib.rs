//! # Customer Service
//!
//! Customer-record management service: CRUD over a single `customer` entity
//! exposed through a REST API, backed by a swappable persistence strategy.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the storage port and the customer service
//! - **infrastructure**: Storage implementations (in-memory and SeaORM-backed)
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML configuration including storage-backend selection

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig, StorageBackend};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};
pub use infrastructure::{InMemoryCustomerRepository, SeaOrmCustomerRepository};

// Re-export the API router
pub use interfaces::http::create_api_router;
