//! Typed clients for the backend features the console consumes. Each feature
//! pairs request/response types with free functions that go through the shared
//! `ApiClient`, keeping endpoint paths and payload shapes in one place.

pub mod appointments;
pub mod auth;
pub mod health;
pub mod patients;
