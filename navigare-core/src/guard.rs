//! # Navigation Guards
//!
//! The pre-navigation hook point of Navigare.
//!
//! A guard runs once per navigation attempt, before the target view is
//! handed back to the caller, and returns a [`Decision`]: proceed
//! unchanged, or redirect to another path. Guards never fail a navigation
//! outright; anything short of an infrastructure error is expressed as a
//! redirect.
//!
//! # Use Cases
//!
//! - Gating routes behind a session marker
//! - Observing navigations (logging, tracing)
//! - Building custom navigation middleware without depending on the full
//!   `navigare` crate
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Guard`] uses native `async fn` for zero-cost static dispatch. For
//! dynamic dispatch (e.g. a navigator holding a heterogeneous guard chain),
//! use [`DynGuard`]; every `Guard` implements it automatically.

use crate::{error::BoxError, route::Destination};
use std::{future::Future, pin::Pin};

/// The outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the navigation to complete unchanged.
    Proceed,
    /// Abandon the current target and navigate to the given path instead.
    Redirect(String),
}

impl Decision {
    /// Returns true if the navigation may proceed.
    pub fn is_proceed(&self) -> bool {
        matches!(self, Decision::Proceed)
    }

    /// Returns the redirect target, if any.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Decision::Proceed => None,
            Decision::Redirect(path) => Some(path),
        }
    }
}

/// A pre-navigation hook.
///
/// Guards receive the target [`Destination`] and decide whether the
/// navigation proceeds or is redirected. They run sequentially in
/// registration order; the first redirect wins.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot act as a navigation guard",
    label = "missing `Guard` implementation",
    note = "Implement `Guard` with an async `before` method returning a `Decision`."
)]
pub trait Guard: Send + Sync + 'static {
    /// Called with the target destination before a navigation completes.
    fn before(
        &self,
        to: &Destination,
    ) -> impl Future<Output = Result<Decision, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Guard`].
///
/// Use this trait when you need runtime polymorphism (e.g. a guard chain).
pub trait DynGuard: Send + Sync + 'static {
    /// Called with the target destination (dynamic dispatch version).
    fn before_dyn<'a>(
        &'a self,
        to: &'a Destination,
    ) -> Pin<Box<dyn Future<Output = Result<Decision, BoxError>> + Send + 'a>>;
}

// Blanket implementation: any type implementing Guard implements DynGuard.
impl<G: Guard> DynGuard for G {
    fn before_dyn<'a>(
        &'a self,
        to: &'a Destination,
    ) -> Pin<Box<dyn Future<Output = Result<Decision, BoxError>> + Send + 'a>> {
        Box::pin(self.before(to))
    }
}

// Allow Box<dyn DynGuard> to be used where Guard is expected.
impl Guard for Box<dyn DynGuard> {
    async fn before(&self, to: &Destination) -> Result<Decision, BoxError> {
        self.as_ref().before_dyn(to).await
    }
}
