//! # navigare-core
//!
//! Core traits for the Navigare client-side navigation layer.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! guards and storage backends that don't need the full `navigare`
//! implementation.
//!
//! # Three Pieces
//!
//! Navigare is built from three small pieces:
//!
//! ## Route Descriptors ([`Route`], [`Destination`])
//!
//! A [`Route`] is a static mapping from a URL pattern to a view and metadata.
//! A [`Destination`] is what a guard observes about a concrete navigation
//! target: the matched route's name and metadata plus the captured parameter
//! segments.
//!
//! ## Guards ([`Guard`])
//!
//! A pre-navigation hook. Receives the target [`Destination`] and decides to
//! let the navigation proceed unchanged or redirect it elsewhere. All guard
//! composition (chains, ordering) lives in `navigare`; this crate only
//! defines the contract.
//!
//! ## Session Storage ([`SessionStore`])
//!
//! A read-only view of a local key-value store. The navigation layer only
//! checks for the presence of a marker under a fixed key; issuing, writing,
//! and validating markers belongs to external collaborators.
//!
//! # Error Types
//!
//! - [`NavError`] - Top-level error type for navigation operations

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod guard;
mod route;
mod session;

// Re-exports
pub use error::{BoxError, NavError};
pub use guard::{Decision, DynGuard, Guard};
pub use route::{Destination, Route, RouteMeta};
pub use session::SessionStore;
