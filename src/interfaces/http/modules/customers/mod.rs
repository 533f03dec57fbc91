//! Customer REST resource

pub mod dto;
pub mod handlers;

pub use dto::{CustomerResponse, RegisterCustomerRequest, UpdateCustomerRequest};
pub use handlers::CustomerAppState;
