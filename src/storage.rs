//! Durable client storage port. The console keeps exactly two named slots: the
//! bearer credential and the serialized identity. Both are written together on
//! login and removed together on logout or session expiry, so a half-written
//! session is never observable. Browser shells back this with `localStorage`;
//! the in-memory adapter below serves tests and headless embedding.

use std::collections::HashMap;
use std::sync::Mutex;

/// Slot holding the opaque bearer credential.
pub const ACCESS_TOKEN_SLOT: &str = "access_token";
/// Slot holding the signed-in identity, serialized as JSON.
pub const USER_SLOT: &str = "user";

/// Durable key/value storage for session slots.
pub trait SessionStorage: Send + Sync {
    fn read(&self, slot: &str) -> Option<String>;
    fn write(&self, slot: &str, value: &str);
    fn remove(&self, slot: &str);
}

/// In-memory storage adapter with the same semantics as browser storage.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, slot: &str) -> Option<String> {
        let slots = self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        slots.get(slot).cloned()
    }

    fn write(&self, slot: &str, value: &str) {
        let mut slots = self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        slots.insert(slot.to_string(), value.to_string());
    }

    fn remove(&self, slot: &str) {
        let mut slots = self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        slots.remove(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let storage = MemoryStorage::new();
        storage.write(ACCESS_TOKEN_SLOT, "token-123");

        assert_eq!(
            storage.read(ACCESS_TOKEN_SLOT),
            Some("token-123".to_string())
        );
        assert_eq!(storage.read(USER_SLOT), None);
    }

    #[test]
    fn remove_clears_a_slot() {
        let storage = MemoryStorage::new();
        storage.write(USER_SLOT, "{}");
        storage.remove(USER_SLOT);

        assert_eq!(storage.read(USER_SLOT), None);
    }

    #[test]
    fn write_overwrites_previous_value() {
        let storage = MemoryStorage::new();
        storage.write(ACCESS_TOKEN_SLOT, "old");
        storage.write(ACCESS_TOKEN_SLOT, "new");

        assert_eq!(storage.read(ACCESS_TOKEN_SLOT), Some("new".to_string()));
    }
}
