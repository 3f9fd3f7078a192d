//! Session and API client core for the MediSecure administrative console.
//!
//! The crate covers everything the console shell needs to authenticate and
//! talk to the MediSecure backend: a [`SessionStore`] that persists the bearer
//! credential and identity across reloads, and an [`ApiClient`] that attaches
//! the credential at send time, enforces a fixed timeout, unwraps response
//! bodies, and evicts the session on expiry. The pieces a browser normally
//! supplies are ports ([`SessionStorage`], [`Navigator`]) so the whole flow is
//! testable headless. View code lives elsewhere and goes through the typed
//! clients in [`features`].
//!
//! Wiring happens once at startup:
//!
//! ```no_run
//! use std::sync::Arc;
//! use medisecure_console::{ApiClient, ConsoleConfig, MemoryNavigator, MemoryStorage, SessionStore};
//!
//! # fn main() -> Result<(), medisecure_console::ApiError> {
//! let config = ConsoleConfig::from_env()?;
//! let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
//! let api = ApiClient::new(&config, session, Arc::new(MemoryNavigator::new()))?;
//! # let _ = api;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod navigation;
pub mod session;
pub mod storage;

pub use api::{ApiClient, CallIntent, RequestOptions};
pub use config::ConsoleConfig;
pub use error::ApiError;
pub use navigation::{MemoryNavigator, Navigator, LOGIN_ROUTE};
pub use session::SessionStore;
pub use storage::{MemoryStorage, SessionStorage, ACCESS_TOKEN_SLOT, USER_SLOT};
