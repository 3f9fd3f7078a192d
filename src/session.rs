//! Session state backed by durable storage. The store is created once at
//! startup and optimistically restores the cached identity so the UI does not
//! flash a logged-out state before the first network round-trip. The restore
//! is not a verified session; any later 401 evicts it. The credential is
//! re-read from storage on every call so a rotation is picked up by requests
//! that have not been sent yet.

use crate::error::ApiError;
use crate::features::auth::types::User;
use crate::storage::{SessionStorage, ACCESS_TOKEN_SLOT, USER_SLOT};
use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    identity: RwLock<Option<User>>,
}

impl SessionStore {
    /// Creates the store and restores any cached identity from storage.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let identity = restore_identity(storage.as_ref());
        Self {
            storage,
            identity: RwLock::new(identity),
        }
    }

    /// True iff a credential is currently recorded in durable storage.
    pub fn is_authenticated(&self) -> bool {
        self.storage.read(ACCESS_TOKEN_SLOT).is_some()
    }

    /// Current bearer credential, read from storage at call time.
    pub fn credential(&self) -> Option<SecretString> {
        self.storage.read(ACCESS_TOKEN_SLOT).map(SecretString::from)
    }

    /// Records a fresh credential and identity, replacing any previous session.
    /// Both slots are written together; a serialization failure leaves storage
    /// untouched.
    pub fn establish(&self, credential: &SecretString, user: &User) -> Result<(), ApiError> {
        let serialized = serde_json::to_string(user)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode identity: {err}")))?;

        self.storage
            .write(ACCESS_TOKEN_SLOT, credential.expose_secret());
        self.storage.write(USER_SLOT, &serialized);

        let mut identity = self
            .identity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *identity = Some(user.clone());

        debug!(user_id = %user.id, "session established");
        Ok(())
    }

    /// Removes the credential and identity from storage and memory. Idempotent.
    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_SLOT);
        self.storage.remove(USER_SLOT);

        let mut identity = self
            .identity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *identity = None;

        debug!("session cleared");
    }

    /// The cached identity, if any.
    pub fn user(&self) -> Option<User> {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Reads the cached identity from storage. A corrupt payload evicts both
/// slots so the session never restores half-broken.
fn restore_identity(storage: &dyn SessionStorage) -> Option<User> {
    let raw = storage.read(USER_SLOT)?;

    match serde_json::from_str::<User>(&raw) {
        Ok(user) => {
            debug!(user_id = %user.id, "restored cached identity");
            Some(user)
        }
        Err(err) => {
            warn!(error = %err, "cached identity is corrupt, evicting session");
            storage.remove(ACCESS_TOKEN_SLOT);
            storage.remove(USER_SLOT);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::{User, UserRole};
    use crate::storage::MemoryStorage;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "admin@medisecure.dev".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Durand".to_string(),
            role: UserRole::Admin,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn establish_stores_both_slots_and_identity() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        let user = sample_user();

        store
            .establish(&SecretString::from("token-abc".to_string()), &user)
            .unwrap();

        assert!(store.is_authenticated());
        assert_eq!(storage.read(ACCESS_TOKEN_SLOT), Some("token-abc".to_string()));
        assert!(storage.read(USER_SLOT).is_some());
        assert_eq!(store.user().map(|u| u.email), Some(user.email));
    }

    #[test]
    fn clear_removes_both_slots_and_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store
            .establish(&SecretString::from("token-abc".to_string()), &sample_user())
            .unwrap();

        store.clear();
        store.clear();

        assert!(!store.is_authenticated());
        assert_eq!(storage.read(ACCESS_TOKEN_SLOT), None);
        assert_eq!(storage.read(USER_SLOT), None);
        assert!(store.user().is_none());
    }

    #[test]
    fn restore_recovers_identity_without_network() {
        let storage = Arc::new(MemoryStorage::new());
        let user = sample_user();
        {
            let store = SessionStore::new(storage.clone());
            store
                .establish(&SecretString::from("token-abc".to_string()), &user)
                .unwrap();
        }

        // Simulates a page reload: a new store over the same storage.
        let restored = SessionStore::new(storage);
        assert!(restored.is_authenticated());
        assert_eq!(restored.user().map(|u| u.id), Some(user.id));
    }

    #[test]
    fn corrupt_identity_evicts_the_whole_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(ACCESS_TOKEN_SLOT, "token-abc");
        storage.write(USER_SLOT, "{not json");

        let store = SessionStore::new(storage.clone());

        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
        assert_eq!(storage.read(USER_SLOT), None);
    }

    #[test]
    fn credential_reflects_storage_at_call_time() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        assert!(store.credential().is_none());

        storage.write(ACCESS_TOKEN_SLOT, "rotated-token");
        assert_eq!(
            store.credential().map(|c| c.expose_secret().to_string()),
            Some("rotated-token".to_string())
        );
    }
}
