//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use crate::domain::{Customer, CustomerRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

// ── Conversion helpers ──────────────────────────────────────────

/// Classify a database error without leaking the driver type upwards:
/// a unique-constraint hit means the email backstop fired.
fn db_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Duplicate("Email already taken!".to_string())
        }
        _ => DomainError::Storage(e.to_string()),
    }
}

fn entity_to_domain(model: customer::Model) -> Customer {
    Customer {
        id: Some(model.id),
        name: model.name,
        email: model.email,
        age: model.age,
    }
}

// ── SeaOrmCustomerRepository ────────────────────────────────────

/// Relational customer store backed by the `customers` table.
///
/// All queries go through the SeaORM query builder (parameterized);
/// `entity_to_domain` is the row-to-entity translation step.
pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn insert(&self, customer: Customer) -> DomainResult<Customer> {
        let model = customer::ActiveModel {
            id: NotSet,
            name: Set(customer.name),
            email: Set(customer.email),
            age: Set(customer.age),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(inserted))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let count = customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        let count = customer::Entity::find()
            .filter(customer::Column::Id.eq(id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn update(&self, customer: Customer) -> DomainResult<()> {
        let Some(id) = customer.id else {
            return Err(DomainError::Validation(
                "cannot update a customer without an id".to_string(),
            ));
        };

        let existing = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound(format!(
                "customer id [{id}] not found!"
            )));
        }

        let model = customer::ActiveModel {
            id: Set(id),
            name: Set(customer.name),
            email: Set(customer.email),
            age: Set(customer.age),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
