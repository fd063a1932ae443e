//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod person_service;

pub use person_service::{PersonService, RegisterPerson};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
#[derive(Clone)]
pub struct Services {
    pub persons: PersonService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            persons: PersonService::new(repos.persons),
        }
    }
}
