//! Session marker storage.

/// A read-only view of a local key-value store holding the session marker.
///
/// The navigation layer only ever reads: presence of a value under the
/// configured key is what gates access. Writing the marker at login time
/// and validating its contents are external concerns.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Check whether a value is present under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
