//! Person service for business logic operations.
//!
//! Hashes credentials, assigns ids and turns storage outcomes into
//! application errors.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewPerson, Person};
use crate::repositories::PersonStore;
use crate::utils::password::hash_password;

const ENTITY: &str = "person";

/// Data accepted when registering a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPerson {
    pub email: String,
    pub login: String,
    pub password: String,
}

/// Person service for handling person-related business logic.
///
/// Cloning is cheap, the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
}

impl PersonService {
    /// Creates a new PersonService over the given store.
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Lists every stored person.
    ///
    /// Any storage failure is reported as internal. An empty table is an
    /// empty list.
    pub async fn get_all(&self) -> AppResult<Vec<Person>> {
        self.store.get_all().await.map_err(|e| {
            tracing::error!(op = "person.get_all", error = ?e, "failed to list persons");
            AppError::Internal { source: e.into() }
        })
    }

    /// Gets a person by id.
    ///
    /// # Returns
    /// The person if found, or `NotFound` error
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Person> {
        self.store.get_by_id(id).await.map_err(|e| {
            let id = id.to_string();
            let err = AppError::from_storage(e, ENTITY, "id", &id);
            if !matches!(err, AppError::NotFound { .. }) {
                tracing::error!(op = "person.get_by_id", person_id = %id, error = ?err, "failed to get person");
            }
            err
        })
    }

    /// Registers a new person and returns the generated id.
    ///
    /// The password is stored as an Argon2id hash, never in plain text.
    /// Fails with `AlreadyExists` when the email is taken.
    pub async fn create(&self, request: RegisterPerson) -> AppResult<Uuid> {
        let RegisterPerson {
            email,
            login,
            password,
        } = request;

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal { source: e.into() })??;

        let new_person = NewPerson {
            id: Uuid::new_v4(),
            email,
            login,
            password_hash,
        };
        let email = new_person.email.clone();

        match self.store.create(new_person).await {
            Ok(id) => {
                tracing::info!(op = "person.create", person_id = %id, "person registered");
                Ok(id)
            }
            Err(e) => {
                let err = AppError::from_storage(e, ENTITY, "email", &email);
                if matches!(err, AppError::AlreadyExists { .. }) {
                    tracing::info!(op = "person.create", "email already registered");
                } else {
                    tracing::error!(op = "person.create", error = ?err, "failed to create person");
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, StorageError, StorageResult};
    use crate::repositories::InMemoryPersonStore;
    use crate::utils::password::verify_password;
    use async_trait::async_trait;

    fn service() -> (PersonService, InMemoryPersonStore) {
        let store = InMemoryPersonStore::new();
        (PersonService::new(Arc::new(store.clone())), store)
    }

    fn register(email: &str, login: &str) -> RegisterPerson {
        RegisterPerson {
            email: email.to_string(),
            login: login.to_string(),
            password: "correct horse".to_string(),
        }
    }

    /// Store whose every call fails with a storage error
    struct BrokenStore;

    #[async_trait]
    impl PersonStore for BrokenStore {
        async fn create(&self, _: NewPerson) -> StorageResult<Uuid> {
            Err(StorageError::storage("persons.create", anyhow::anyhow!("down")))
        }

        async fn get_by_id(&self, _: Uuid) -> StorageResult<Person> {
            Err(StorageError::storage("persons.get_by_id", anyhow::anyhow!("down")))
        }

        async fn get_all(&self) -> StorageResult<Vec<Person>> {
            Err(StorageError::NotFound)
        }
    }

    #[tokio::test]
    async fn test_create_then_get_by_id() {
        let (service, _) = service();
        let id = service.create(register("a@example.com", "alice")).await.unwrap();

        let person = service.get_by_id(id).await.unwrap();
        assert_eq!(person.id, id);
        assert_eq!(person.login, "alice");
        assert_eq!(person.email, "a@example.com");
    }

    #[tokio::test]
    async fn test_password_is_hashed() {
        let (service, _) = service();
        let id = service.create(register("a@example.com", "alice")).await.unwrap();

        let person = service.get_by_id(id).await.unwrap();
        assert_ne!(person.password_hash, "correct horse");
        assert!(verify_password("correct horse", &person.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let (service, store) = service();
        service.create(register("a@example.com", "alice")).await.unwrap();

        let err = service
            .create(register("a@example.com", "mallory"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_with_same_email_admit_one() {
        let (service, store) = service();

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..8 {
            let service = service.clone();
            tasks.spawn(async move {
                service
                    .create(register("race@example.com", &format!("racer{i}")))
                    .await
            });
        }

        let mut created = 0;
        let mut conflicts = 0;
        while let Some(result) = tasks.join_next().await {
            match result.unwrap() {
                Ok(_) => created += 1,
                Err(e) => {
                    assert_eq!(e.kind(), ErrorKind::Conflict);
                    conflicts += 1;
                }
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let (service, _) = service();
        let err = service.get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_get_all_returns_created_set() {
        let (service, _) = service();
        assert!(service.get_all().await.unwrap().is_empty());

        let a = service.create(register("a@example.com", "alice")).await.unwrap();
        let b = service.create(register("b@example.com", "bob")).await.unwrap();

        let mut ids: Vec<Uuid> = service
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        ids.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_storage_failures_are_internal() {
        let service = PersonService::new(Arc::new(BrokenStore));

        let err = service.get_all().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);

        let err = service.get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);

        let err = service.create(register("a@example.com", "a")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
