//! Data Transfer Objects for API requests and responses.

mod person;

pub use person::{PersonResponse, RegisterPersonRequest};
