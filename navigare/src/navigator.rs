//! # The Navigator
//!
//! The router instance: a [`RouteTable`] plus an ordered guard chain.
//!
//! Each navigation attempt resolves the requested path, runs every guard in
//! registration order, and either completes (updating the current route) or
//! follows a redirect. A redirect re-enters the whole pipeline for the new
//! target, so guards also run on the route being redirected to.
//!
//! Navigations are serialized by the host's navigation lifecycle; the
//! navigator itself is `Send + Sync` and its only interior state is the
//! current-route cell.

use crate::table::{Resolved, RouteTable};
use navigare_core::{Decision, Destination, DynGuard, Guard, NavError};
use std::sync::Mutex;

/// Maximum number of redirects a single navigation may follow before it is
/// abandoned as a loop.
pub const REDIRECT_LIMIT: usize = 10;

/// A completed navigation.
#[derive(Debug)]
pub struct Navigation<'a, V> {
    /// Where the navigation ended up.
    pub destination: Destination,
    /// The view registered for the final route.
    pub view: &'a V,
    /// The originally requested path, when a guard redirected away from it.
    pub redirected_from: Option<String>,
}

/// The router instance.
///
/// Holds the route table and the guard chain, and tracks the current route
/// across completed navigations.
pub struct Navigator<V> {
    table: RouteTable<V>,
    guards: Vec<Box<dyn DynGuard>>,
    current: Mutex<Option<Destination>>,
}

impl<V: Send + Sync + 'static> Navigator<V> {
    /// Create a navigator over the given table, with no guards.
    pub fn new(table: RouteTable<V>) -> Self {
        Self {
            table,
            guards: Vec::new(),
            current: Mutex::new(None),
        }
    }

    /// Append a guard to the chain.
    ///
    /// Guards run in registration order on every navigation attempt; the
    /// first redirect wins.
    pub fn guard<G: Guard>(mut self, guard: G) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    /// The underlying route table.
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// The destination of the last completed navigation, if any.
    pub fn current(&self) -> Option<Destination> {
        self.current
            .lock()
            .expect("current route lock poisoned")
            .clone()
    }

    /// Navigate to a concrete path.
    ///
    /// Resolves the path, runs the guard chain, and follows redirects until
    /// a target proceeds. Returns [`NavError::NotFound`] for unmatched
    /// paths and [`NavError::RedirectLoop`] if guards keep redirecting past
    /// [`REDIRECT_LIMIT`].
    pub async fn navigate(&self, path: &str) -> Result<Navigation<'_, V>, NavError> {
        let mut target = path.to_string();
        let mut redirected_from = None;

        for _ in 0..=REDIRECT_LIMIT {
            let resolved: Resolved<'_, V> = self
                .table
                .resolve(&target)
                .ok_or_else(|| NavError::NotFound(target.clone()))?;
            tracing::debug!(path = %target, name = %resolved.destination.name, "resolved route");

            match self.run_guards(&resolved.destination).await? {
                Decision::Proceed => {
                    tracing::info!(
                        name = %resolved.destination.name,
                        path = %resolved.destination.path,
                        "navigation complete"
                    );
                    *self
                        .current
                        .lock()
                        .expect("current route lock poisoned") =
                        Some(resolved.destination.clone());

                    return Ok(Navigation {
                        destination: resolved.destination,
                        view: resolved.view,
                        redirected_from,
                    });
                }
                Decision::Redirect(next) => {
                    tracing::warn!(from = %target, to = %next, "navigation redirected");
                    if redirected_from.is_none() {
                        redirected_from = Some(target);
                    }
                    target = next;
                }
            }
        }

        Err(NavError::RedirectLoop(path.to_string()))
    }

    /// Navigate to a route by its unique name.
    ///
    /// Only routes without parameter segments can be reached this way;
    /// parameterized routes need a concrete path via [`navigate`](Self::navigate).
    pub async fn navigate_to(&self, name: &str) -> Result<Navigation<'_, V>, NavError> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| NavError::UnknownName(name.to_string()))?;

        if route.pattern.contains(':') || route.pattern.contains('{') {
            return Err(NavError::ParamsRequired(name.to_string()));
        }

        let pattern = route.pattern.clone();
        self.navigate(&pattern).await
    }

    async fn run_guards(&self, to: &Destination) -> Result<Decision, NavError> {
        for guard in &self.guards {
            match guard.as_ref().before_dyn(to).await.map_err(NavError::Guard)? {
                Decision::Proceed => continue,
                redirect @ Decision::Redirect(_) => return Ok(redirect),
            }
        }
        Ok(Decision::Proceed)
    }
}
