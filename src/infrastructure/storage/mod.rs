//! Storage implementations of the customer storage port

pub mod memory;

pub use memory::InMemoryCustomerRepository;
