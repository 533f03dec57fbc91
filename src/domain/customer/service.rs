//! Customer business logic service

use std::sync::Arc;

use tracing::info;

use super::model::{Customer, CustomerRegistration, CustomerUpdate};
use super::repository::CustomerRepository;
use crate::domain::{DomainError, DomainResult};

/// Service for customer business operations.
///
/// Stateless and thread-safe by construction: the only mutable state lives
/// behind the storage port. Every operation either performs exactly one
/// storage mutation or fails without touching storage.
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_customers(&self) -> DomainResult<Vec<Customer>> {
        self.repository.find_all().await
    }

    pub async fn get_customer(&self, id: i64) -> DomainResult<Customer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("customer id [{id}] not found!")))
    }

    pub async fn add_customer(&self, registration: CustomerRegistration) -> DomainResult<Customer> {
        if self.repository.exists_by_email(&registration.email).await? {
            return Err(DomainError::Duplicate("Email already taken!".to_string()));
        }

        let draft = Customer::new(registration.name, registration.email, registration.age);
        let customer = self.repository.insert(draft).await?;

        info!(id = ?customer.id, email = %customer.email, "Customer registered");
        Ok(customer)
    }

    pub async fn delete_customer_by_id(&self, id: i64) -> DomainResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(DomainError::NotFound(format!(
                "customer id [{id}] not found!"
            )));
        }

        self.repository.delete_by_id(id).await?;
        info!(id, "Customer deleted");
        Ok(())
    }

    /// Apply a partial update to the customer with the given id.
    ///
    /// Fields are evaluated in the order email, name, age. A present field
    /// equal to the current value counts as no change; a request with no
    /// effective change fails with `Validation` before any storage call.
    pub async fn update_customer(&self, id: i64, update: CustomerUpdate) -> DomainResult<()> {
        let mut customer = self.get_customer(id).await?;
        let mut contains_changes = false;

        if let Some(email) = update.email {
            if email != customer.email {
                if self.repository.exists_by_email(&email).await? {
                    return Err(DomainError::Duplicate("Email already taken!".to_string()));
                }
                customer.email = email;
                contains_changes = true;
            }
        }

        if let Some(name) = update.name {
            if name != customer.name {
                customer.name = name;
                contains_changes = true;
            }
        }

        if let Some(age) = update.age {
            if age != customer.age {
                customer.age = age;
                contains_changes = true;
            }
        }

        if !contains_changes {
            return Err(DomainError::Validation(
                "Request does not contain any changes!".to_string(),
            ));
        }

        self.repository.update(customer).await?;
        info!(id, "Customer updated");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
