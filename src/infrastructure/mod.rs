//! External concerns: database and storage implementations

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, SeaOrmCustomerRepository};
pub use storage::InMemoryCustomerRepository;
