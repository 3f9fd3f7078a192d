//! Authentication feature: login, logout, and token verification. Login is the
//! only flow exempt from the 401 session-eviction side effect, and logout must
//! never leave the user locked in locally when the backend is unreachable.
//! Password material travels as `SecretString` and must never be logged.

pub mod client;
pub mod types;
