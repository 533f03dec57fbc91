//! Customer storage port

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

/// Storage capability the customer service depends on, independent of the
/// concrete storage technology.
///
/// Two peer implementations exist: an in-memory collection
/// (`InMemoryCustomerRepository`) and a relational table
/// (`SeaOrmCustomerRepository`). Both satisfy the same contract:
///
/// - `insert` accepts a draft (no id) and returns the persisted customer
///   with its assigned id. Duplicate-email prevention is NOT this layer's
///   responsibility: the service checks first, and the relational unique
///   constraint acts only as a backstop.
/// - `delete_by_id` is no-op-safe when the id is absent; the service guards
///   existence before calling.
/// - `update` receives the full, already-merged state of an existing
///   customer; afterwards `find_by_id` returns exactly those fields.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Customer>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>>;
    async fn insert(&self, customer: Customer) -> DomainResult<Customer>;
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;
    async fn exists_by_id(&self, id: i64) -> DomainResult<bool>;
    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
    async fn update(&self, customer: Customer) -> DomainResult<()>;
}
