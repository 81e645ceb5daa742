//! Route descriptors and resolved destinations.
//!
//! A [`Route`] is declared once, at table build time. A [`Destination`] is
//! produced per navigation attempt, when a concrete path matches a route's
//! pattern, and is the only thing guards get to inspect.

/// Metadata attached to a route descriptor.
///
/// Routes default to `requires_auth = false`: a route that says nothing
/// about authentication is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    /// Whether navigating to this route requires a session marker.
    pub requires_auth: bool,
}

impl RouteMeta {
    /// Metadata for a route that requires a session marker.
    pub const fn auth() -> Self {
        Self {
            requires_auth: true,
        }
    }

    /// Metadata for a route that is explicitly open.
    pub const fn open() -> Self {
        Self {
            requires_auth: false,
        }
    }
}

/// A static mapping from a URL pattern to a view and metadata.
///
/// The view is opaque to the navigation layer; it is carried through
/// resolution untouched and handed back to the caller on a completed
/// navigation.
///
/// Patterns may contain named parameter segments written with a leading
/// colon, e.g. `/post/:id`.
#[derive(Debug, Clone)]
pub struct Route<V> {
    /// The URL pattern this route matches.
    pub pattern: String,
    /// Unique identifier for this route.
    pub name: String,
    /// The view rendered when this route is active.
    pub view: V,
    /// Route metadata.
    pub meta: RouteMeta,
}

impl<V> Route<V> {
    /// Create a new open route.
    pub fn new(pattern: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            pattern: pattern.into(),
            name: name.into(),
            view,
            meta: RouteMeta::default(),
        }
    }

    /// Mark this route as requiring a session marker.
    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    /// Mark this route as explicitly open.
    ///
    /// Routes are open by default; use this where the declaration should
    /// say so out loud, e.g. the route that gated navigations redirect to.
    pub fn open(mut self) -> Self {
        self.meta = RouteMeta::open();
        self
    }
}

/// A concrete navigation target, produced by matching a path against a
/// route table.
///
/// This is the guard's entire view of a navigation: the matched route's
/// identity and metadata, the concrete path that was requested, and any
/// parameter segments captured during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Name of the matched route.
    pub name: String,
    /// Pattern of the matched route, as declared.
    pub pattern: String,
    /// The concrete path that was navigated to.
    pub path: String,
    /// Parameter segments captured during matching, in pattern order.
    pub params: Vec<(String, String)>,
    /// Metadata of the matched route.
    pub meta: RouteMeta,
}

impl Destination {
    /// Look up a captured parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_defaults_to_open() {
        let route = Route::new("/login", "login", ());
        assert!(!route.meta.requires_auth);
    }

    #[test]
    fn test_requires_auth_flips_meta() {
        let route = Route::new("/", "home", ()).requires_auth();
        assert!(route.meta.requires_auth);
        assert_eq!(route.meta, RouteMeta::auth());
    }

    #[test]
    fn test_open_is_explicit() {
        let route = Route::new("/unauthorized", "unauthorized", ()).open();
        assert_eq!(route.meta, RouteMeta::open());

        // Explicit open overrides an earlier gate.
        let route = Route::new("/about", "about", ()).requires_auth().open();
        assert!(!route.meta.requires_auth);
    }

    #[test]
    fn test_destination_param_lookup() {
        let dest = Destination {
            name: "post-detail".to_string(),
            pattern: "/post/:id".to_string(),
            path: "/post/42".to_string(),
            params: vec![("id".to_string(), "42".to_string())],
            meta: RouteMeta::auth(),
        };

        assert_eq!(dest.param("id"), Some("42"));
        assert_eq!(dest.param("slug"), None);
    }
}
