//! In-memory storage implementation

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Customer, CustomerRepository, DomainError, DomainResult};

/// In-memory customer store for development and as a test substitute for the
/// relational backend.
///
/// The collection is an ordered `Vec` owned by the instance (never
/// process-wide state); lookups are linear scans. Seed rows are inserted
/// once at construction and the id counter continues from them.
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
    id_counter: AtomicI64,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        let seed = vec![
            Customer::with_id(1, "Alex", "alex@gmail.com", 21),
            Customer::with_id(2, "jamila", "jamila@gmail.com", 19),
        ];
        let next_id = seed.len() as i64 + 1;

        Self {
            customers: RwLock::new(seed),
            id_counter: AtomicI64::new(next_id),
        }
    }

}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        Ok(self.customers.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>> {
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .find(|c| c.id == Some(id))
            .cloned())
    }

    async fn insert(&self, mut customer: Customer) -> DomainResult<Customer> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        customer.id = Some(id);
        self.customers.write().await.push(customer.clone());
        Ok(customer)
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        Ok(self.customers.read().await.iter().any(|c| c.email == email))
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .any(|c| c.id == Some(id)))
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.customers.write().await.retain(|c| c.id != Some(id));
        Ok(())
    }

    async fn update(&self, customer: Customer) -> DomainResult<()> {
        let Some(id) = customer.id else {
            return Err(DomainError::Validation(
                "cannot update a customer without an id".to_string(),
            ));
        };

        let mut customers = self.customers.write().await;
        match customers.iter().position(|c| c.id == Some(id)) {
            Some(index) => {
                customers[index] = customer;
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "customer id [{id}] not found!"
            ))),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
