//! HTTP request handlers for API endpoints.

pub mod persons;
