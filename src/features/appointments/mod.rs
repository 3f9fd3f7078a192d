//! Appointment feature: scheduling, updates, cancellation, and the per-patient,
//! per-doctor, and calendar listings.

pub mod client;
pub mod types;
