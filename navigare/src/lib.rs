//! # navigare
//!
//! Client-side navigation with pre-navigation guards for single-page
//! applications.
//!
//! This crate provides:
//! - **Route tables**: [`RouteTable`], built from declarative [`Route`]
//!   descriptors with pattern matching via `matchit`
//! - **The navigator**: [`Navigator`], the router instance that resolves
//!   paths and runs the guard chain
//! - **Standard guards**: [`AuthGuard`] (session-marker gate), [`TraceGuard`]
//! - **Session storage**: [`MemorySessionStore`]
//! - **The blogday route set**: [`blogday`], the application's concrete
//!   route table
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use navigare::{blogday, MemorySessionStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemorySessionStore::new());
//! let nav = blogday::navigator(store.clone())?;
//!
//! // No session marker yet: guarded routes redirect.
//! let outcome = nav.navigate("/about").await?;
//! assert_eq!(outcome.destination.name, "unauthorized");
//!
//! store.insert(blogday::SESSION_KEY, "opaque-token");
//! let outcome = nav.navigate("/about").await?;
//! assert_eq!(outcome.destination.name, "about");
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod blogday;
pub mod guards;
pub mod navigator;
pub mod session;
pub mod table;
pub mod testing;

// Re-export the core contract types so most users only import `navigare`.
pub use navigare_core::{
    // Error types
    BoxError,
    // Guard
    Decision,
    // Route descriptors
    Destination,
    DynGuard,
    Guard,
    NavError,
    Route,
    RouteMeta,
    // Session storage
    SessionStore,
};

pub use guards::{AuthGuard, TraceGuard};
pub use navigator::{Navigation, Navigator, REDIRECT_LIMIT};
pub use session::MemorySessionStore;
pub use table::{Resolved, RouteTable, RouteTableBuilder};
