//! Patient-records feature: folder creation, lookup, updates, archiving, and
//! search over the backend patient endpoints.

pub mod client;
pub mod types;
