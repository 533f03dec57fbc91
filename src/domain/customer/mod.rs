//! Customer aggregate: entity, storage port and business service

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Customer, CustomerRegistration, CustomerUpdate};
pub use repository::CustomerRepository;
pub use service::CustomerService;
