//! Customer DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Customer, CustomerRegistration, CustomerUpdate};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            // customers handed out by storage always carry an id
            id: c.id.unwrap_or_default(),
            name: c.name,
            email: c.email,
            age: c.age,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterCustomerRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(range(min = 16, max = 99, message = "age must be between 16 and 99"))]
    pub age: i32,
}

impl From<RegisterCustomerRequest> for CustomerRegistration {
    fn from(req: RegisterCustomerRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

/// Partial update: absent fields request no change
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl From<UpdateCustomerRequest> for CustomerUpdate {
    fn from(req: UpdateCustomerRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
