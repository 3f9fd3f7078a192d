//! Request and response types for authentication. The identity is cached in
//! durable storage for session restore, so `User` stays serializable in both
//! directions.

use chrono::NaiveDateTime;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Doctor,
    Nurse,
    Patient,
    Receptionist,
}

/// Signed-in identity as returned by the backend. Immutable for the session's
/// duration; replaced wholesale on the next login.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Login form input. The password is wrapped so it is redacted from `Debug`
/// output and exposed only at form-encoding time.
#[derive(Clone, Debug)]
pub struct LoginCredentials {
    pub email: String,
    pub password: SecretString,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Successful login payload: the bearer credential plus the identity.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: User,
}

/// Result of asking the backend whether the current token is still valid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_round_trips_through_json() {
        let raw = r#"{
            "id": "7a4ae0ac-0790-4a05-a1e3-d0e1e2f3a4b5",
            "email": "admin@medisecure.dev",
            "first_name": "Alex",
            "last_name": "Durand",
            "role": "ADMIN",
            "is_active": true,
            "created_at": "2025-01-15T08:30:00",
            "updated_at": null
        }"#;

        let user: User = serde_json::from_str(raw).expect("Failed to deserialize");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.full_name(), "Alex Durand");
        assert!(user.updated_at.is_none());

        let json = serde_json::to_string(&user).expect("Failed to serialize");
        assert!(json.contains("\"ADMIN\""));
    }

    #[test]
    fn credentials_debug_redacts_the_password() {
        let credentials = LoginCredentials::new("admin@medisecure.dev", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("hunter2"));
    }
}
