//! Customer domain entity and request types

/// A customer record.
///
/// `id` is `None` for a draft that storage has not accepted yet; storage
/// assigns the id on insert and it is never reassigned afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl Customer {
    /// Create a draft customer (no id assigned yet)
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Create a customer carrying an already-assigned id
    pub fn with_id(id: i64, name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Whether storage has accepted this customer
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Registration request: all fields required, entity-less (no id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRegistration {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Update request: any subset of fields may be present.
///
/// An absent field means "no change requested", not "clear the field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_is_a_draft() {
        let c = Customer::new("Alex", "alex@gmail.com", 21);
        assert_eq!(c.id, None);
        assert!(!c.is_persisted());
    }

    #[test]
    fn with_id_is_persisted() {
        let c = Customer::with_id(1, "Alex", "alex@gmail.com", 21);
        assert_eq!(c.id, Some(1));
        assert!(c.is_persisted());
    }

    #[test]
    fn default_update_requests_no_changes() {
        let u = CustomerUpdate::default();
        assert_eq!(u.name, None);
        assert_eq!(u.email, None);
        assert_eq!(u.age, None);
    }
}
