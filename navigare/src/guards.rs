//! Standard guard implementations.

use navigare_core::{BoxError, Decision, Destination, Guard, SessionStore};
use std::sync::Arc;

/// The authentication gate.
///
/// If the target route requires authentication and no session marker is
/// present under the configured key, the navigation is redirected to the
/// configured path. In every other case (including routes that say nothing
/// about authentication) the navigation proceeds.
///
/// The marker's contents are never inspected; presence alone decides.
pub struct AuthGuard {
    store: Arc<dyn SessionStore>,
    session_key: String,
    redirect: String,
}

impl AuthGuard {
    /// Create a guard reading the marker under `session_key` from `store`,
    /// redirecting unauthenticated navigations to `redirect`.
    pub fn new(
        store: Arc<dyn SessionStore>,
        session_key: impl Into<String>,
        redirect: impl Into<String>,
    ) -> Self {
        Self {
            store,
            session_key: session_key.into(),
            redirect: redirect.into(),
        }
    }
}

impl Guard for AuthGuard {
    async fn before(&self, to: &Destination) -> Result<Decision, BoxError> {
        if to.meta.requires_auth && !self.store.contains(&self.session_key) {
            Ok(Decision::Redirect(self.redirect.clone()))
        } else {
            Ok(Decision::Proceed)
        }
    }
}

/// A guard that logs each navigation target and always proceeds.
pub struct TraceGuard;

impl Guard for TraceGuard {
    async fn before(&self, to: &Destination) -> Result<Decision, BoxError> {
        tracing::debug!(name = %to.name, path = %to.path, "navigation target");
        Ok(Decision::Proceed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedSessionStore;
    use navigare_core::RouteMeta;

    fn destination(requires_auth: bool) -> Destination {
        Destination {
            name: "about".to_string(),
            pattern: "/about".to_string(),
            path: "/about".to_string(),
            params: Vec::new(),
            meta: RouteMeta { requires_auth },
        }
    }

    fn guard(store: FixedSessionStore) -> AuthGuard {
        AuthGuard::new(Arc::new(store), "blogday.session", "/unauthorized")
    }

    #[tokio::test]
    async fn test_guarded_route_without_marker_redirects() {
        let guard = guard(FixedSessionStore::absent());
        let decision = guard.before(&destination(true)).await.unwrap();
        assert_eq!(decision.redirect_target(), Some("/unauthorized"));
    }

    #[tokio::test]
    async fn test_guarded_route_with_marker_proceeds() {
        let guard = guard(FixedSessionStore::present());
        let decision = guard.before(&destination(true)).await.unwrap();
        assert!(decision.is_proceed());
    }

    #[tokio::test]
    async fn test_open_route_proceeds_regardless_of_marker() {
        for store in [FixedSessionStore::absent(), FixedSessionStore::present()] {
            let guard = guard(store);
            let decision = guard.before(&destination(false)).await.unwrap();
            assert!(decision.is_proceed());
        }
    }
}
