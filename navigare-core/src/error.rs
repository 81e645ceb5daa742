//! Error types for Navigare.
//!
//! This module provides a structured error type using `thiserror`:
//!
//! - [`NavError`] - Top-level error type for navigation operations
//!
//! Note that an absent session marker is NOT an error anywhere in this
//! hierarchy: unauthenticated navigation is a normal state and results in a
//! redirect, never a surfaced failure.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for navigation operations.
#[derive(Error, Debug)]
pub enum NavError {
    /// A route pattern was rejected by the matcher at table build time.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The offending pattern, as declared.
        pattern: String,
        /// Why the matcher rejected it.
        reason: String,
    },

    /// Two routes were declared with the same name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    /// No route matches the requested path.
    #[error("no route matches path: {0}")]
    NotFound(String),

    /// No route is registered under the requested name.
    #[error("no route named: {0}")]
    UnknownName(String),

    /// The named route has parameter segments and cannot be navigated to
    /// by name alone.
    #[error("route `{0}` has parameter segments and cannot be resolved by name alone")]
    ParamsRequired(String),

    /// Guards kept redirecting past the hop limit.
    #[error("redirect limit exceeded while navigating to: {0}")]
    RedirectLoop(String),

    /// A guard failed with an infrastructure error.
    #[error("guard error")]
    Guard(#[source] BoxError),
}
