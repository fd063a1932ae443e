use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::models::{NewPerson, Person};
use crate::repositories::PersonStore;

/// Name of the unique constraint PostgreSQL generates for `persons.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "persons_email_key";

/// In-memory implementation of [`PersonStore`] (for development/testing)
///
/// Enforces the same uniqueness rules as the `persons` table: primary key on
/// `id`, unique `email`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPersonStore {
    persons: Arc<RwLock<HashMap<Uuid, Person>>>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored persons
    pub async fn len(&self) -> usize {
        self.persons.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.persons.read().await.is_empty()
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn create(&self, new_person: NewPerson) -> StorageResult<Uuid> {
        let mut persons = self.persons.write().await;

        if persons.contains_key(&new_person.id) {
            return Err(StorageError::AlreadyExists {
                constraint: "persons_pkey".to_string(),
            });
        }
        if persons.values().any(|p| p.email == new_person.email) {
            return Err(StorageError::AlreadyExists {
                constraint: EMAIL_UNIQUE_CONSTRAINT.to_string(),
            });
        }

        let person = new_person.into_person();
        let id = person.id;
        persons.insert(id, person);
        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Person> {
        self.persons
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn get_all(&self) -> StorageResult<Vec<Person>> {
        Ok(self.persons.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_person(email: &str, login: &str) -> NewPerson {
        NewPerson {
            id: Uuid::new_v4(),
            email: email.to_string(),
            login: login.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = InMemoryPersonStore::new();
        let id = store.create(new_person("a@example.com", "alice")).await.unwrap();

        let person = store.get_by_id(id).await.unwrap();
        assert_eq!(person.login, "alice");
        assert_eq!(person.about_me, "");
        assert!(person.image.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = InMemoryPersonStore::new();
        store.create(new_person("a@example.com", "alice")).await.unwrap();

        let err = store
            .create(new_person("a@example.com", "other"))
            .await
            .unwrap_err();
        match err {
            StorageError::AlreadyExists { constraint } => {
                assert_eq!(constraint, EMAIL_UNIQUE_CONSTRAINT)
            }
            other => panic!("Expected AlreadyExists, got {other:?}"),
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = InMemoryPersonStore::new();
        let first = new_person("a@example.com", "alice");
        let mut second = new_person("b@example.com", "bob");
        second.id = first.id;

        store.create(first).await.unwrap();
        assert!(matches!(
            store.create(second).await,
            Err(StorageError::AlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = InMemoryPersonStore::new();
        assert!(matches!(
            store.get_by_id(Uuid::new_v4()).await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_get_all() {
        let store = InMemoryPersonStore::new();
        assert!(store.get_all().await.unwrap().is_empty());

        store.create(new_person("a@example.com", "alice")).await.unwrap();
        store.create(new_person("b@example.com", "bob")).await.unwrap();

        let mut logins: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.login)
            .collect();
        logins.sort();
        assert_eq!(logins, ["alice", "bob"]);
    }
}
