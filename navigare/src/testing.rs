//! Testing utilities for Navigare.
//!
//! This module provides utilities to make testing guards and navigators
//! easier:
//!
//! - [`RecordingGuard`]: a guard that records every destination it sees
//! - [`FixedSessionStore`]: a store whose marker is always present or
//!   always absent

use navigare_core::{BoxError, Decision, Destination, Guard, SessionStore};
use std::sync::{Arc, Mutex};

/// A guard that records all destinations it is asked about.
///
/// Useful for verifying guard ordering and redirect re-entry.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingGuard::new();
/// let nav = Navigator::new(table).guard(recorder.clone());
///
/// nav.navigate("/about").await?;
///
/// assert_eq!(recorder.count(), 1);
/// assert_eq!(recorder.visits()[0].name, "about");
/// ```
pub struct RecordingGuard {
    visits: Arc<Mutex<Vec<Destination>>>,
    decision: Decision,
}

impl RecordingGuard {
    /// Create a recording guard that always proceeds.
    pub fn new() -> Self {
        Self {
            visits: Arc::new(Mutex::new(Vec::new())),
            decision: Decision::Proceed,
        }
    }

    /// Create a recording guard that returns a specific decision.
    pub fn with_decision(decision: Decision) -> Self {
        Self {
            visits: Arc::new(Mutex::new(Vec::new())),
            decision,
        }
    }

    /// Get a clone of the recorded destinations.
    pub fn visits(&self) -> Vec<Destination> {
        self.visits.lock().unwrap().clone()
    }

    /// Get the number of recorded destinations.
    pub fn count(&self) -> usize {
        self.visits.lock().unwrap().len()
    }

    /// Clear all recorded destinations.
    pub fn clear(&self) {
        self.visits.lock().unwrap().clear();
    }
}

impl Default for RecordingGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingGuard {
    fn clone(&self) -> Self {
        Self {
            visits: self.visits.clone(),
            decision: self.decision.clone(),
        }
    }
}

impl Guard for RecordingGuard {
    async fn before(&self, to: &Destination) -> Result<Decision, BoxError> {
        self.visits.lock().unwrap().push(to.clone());
        Ok(self.decision.clone())
    }
}

/// A session store whose marker state is fixed at construction.
///
/// `get` returns the same answer for every key, which is enough for a
/// layer that only checks presence under one fixed key.
pub struct FixedSessionStore {
    value: Option<String>,
}

impl FixedSessionStore {
    /// A store that always has a marker.
    pub fn present() -> Self {
        Self {
            value: Some("opaque-token".to_string()),
        }
    }

    /// A store that never has a marker.
    pub fn absent() -> Self {
        Self { value: None }
    }
}

impl SessionStore for FixedSessionStore {
    fn get(&self, _key: &str) -> Option<String> {
        self.value.clone()
    }
}
