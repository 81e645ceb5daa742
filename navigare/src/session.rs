//! In-memory session storage.

use navigare_core::SessionStore;
use std::{collections::HashMap, sync::Mutex};

/// A process-local key-value store for the session marker.
///
/// The navigation layer only reads through the [`SessionStore`] trait;
/// the inherent write methods exist for the login-side collaborator that
/// places the marker, and for tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any previous value.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .lock()
            .expect("session store lock poisoned")
            .insert(key.into(), value.into());
    }

    /// Remove the value under `key`, if any.
    pub fn remove(&self, key: &str) {
        self.values
            .lock()
            .expect("session store lock poisoned")
            .remove(key);
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("session store lock poisoned")
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_read_remove() {
        let store = MemorySessionStore::new();
        assert!(!store.contains("blogday.session"));

        store.insert("blogday.session", "opaque-token");
        assert_eq!(store.get("blogday.session").as_deref(), Some("opaque-token"));
        assert!(store.contains("blogday.session"));

        store.remove("blogday.session");
        assert!(store.get("blogday.session").is_none());
    }
}
