//! The blogday application route set.
//!
//! Seven routes: four behind the session gate, the login/register pair,
//! and the unauthorized landing page that gated navigations redirect to.
//! The views themselves are rendered elsewhere; [`View`] only identifies
//! them.

use crate::{
    guards::AuthGuard,
    navigator::Navigator,
    table::{RouteTable, RouteTableBuilder},
};
use navigare_core::{NavError, Route, SessionStore};
use std::sync::Arc;

/// Storage key the session marker is read from.
pub const SESSION_KEY: &str = "blogday.session";

/// Path unauthenticated navigations are redirected to.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Identifiers for the application's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The home page feed.
    Home,
    /// Posts by other authors.
    OtherPosts,
    /// A single post, addressed by id.
    PostDetail,
    /// The about page.
    About,
    /// The login form.
    Login,
    /// The registration form.
    Register,
    /// Landing page for gated navigations without a session marker.
    Unauthorized,
}

/// Build the application route table.
pub fn routes() -> Result<RouteTable<View>, NavError> {
    let mut builder = RouteTableBuilder::new();
    builder.insert(Route::new("/", "home", View::Home).requires_auth())?;
    builder.insert(Route::new("/other-posts", "other-posts", View::OtherPosts).requires_auth())?;
    builder.insert(Route::new("/post/:id", "post-detail", View::PostDetail).requires_auth())?;
    builder.insert(Route::new("/about", "about", View::About).requires_auth())?;
    builder.insert(Route::new("/login", "login", View::Login))?;
    builder.insert(Route::new("/register", "register", View::Register))?;
    builder.insert(Route::new(UNAUTHORIZED_PATH, "unauthorized", View::Unauthorized).open())?;
    Ok(builder.build())
}

/// Build the application navigator: the route table plus the session gate
/// reading [`SESSION_KEY`] from `store`.
pub fn navigator(store: Arc<dyn SessionStore>) -> Result<Navigator<View>, NavError> {
    Ok(Navigator::new(routes()?).guard(AuthGuard::new(store, SESSION_KEY, UNAUTHORIZED_PATH)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_set_shape() {
        let table = routes().unwrap();
        assert_eq!(table.len(), 7);

        let gated = ["home", "other-posts", "post-detail", "about"];
        for name in gated {
            let route = table.by_name(name).unwrap();
            assert!(route.meta.requires_auth, "{name} should be gated");
        }

        let open = ["login", "register", "unauthorized"];
        for name in open {
            let route = table.by_name(name).unwrap();
            assert!(!route.meta.requires_auth, "{name} should be open");
        }
    }
}
