//! # Route Tables
//!
//! An ordered list of route descriptors compiled into a path matcher.
//!
//! Tables are built once, up front, through [`RouteTableBuilder`]; the
//! builder validates each descriptor eagerly so that a misdeclared table
//! fails at construction rather than at navigation time. The two
//! invariants enforced here:
//!
//! - route names are unique across the table;
//! - every pattern is accepted by the matcher, and no two patterns
//!   conflict in a way that would make matching ambiguous.
//!
//! At navigation time exactly one descriptor matches a concrete path (or
//! none), which is what the matcher guarantees once the table builds.

use matchit::Router as Matcher;
use navigare_core::{Destination, NavError, Route};
use std::collections::HashMap;

/// The result of resolving a concrete path against a [`RouteTable`]: the
/// destination guards will inspect, plus a reference to the matched view.
#[derive(Debug)]
pub struct Resolved<'a, V> {
    /// The concrete navigation target.
    pub destination: Destination,
    /// The view registered for the matched route.
    pub view: &'a V,
}

/// An immutable table of routes with pattern-based path resolution.
///
/// Build one with [`RouteTableBuilder`].
pub struct RouteTable<V> {
    matcher: Matcher<usize>,
    routes: Vec<Route<V>>,
    names: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    /// Resolve a concrete path to a destination and view.
    ///
    /// Returns `None` if no registered pattern matches.
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_, V>> {
        let matched = self.matcher.at(path).ok()?;
        let route = &self.routes[*matched.value];

        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Some(Resolved {
            destination: Destination {
                name: route.name.clone(),
                pattern: route.pattern.clone(),
                path: path.to_string(),
                params,
                meta: route.meta,
            },
            view: &route.view,
        })
    }

    /// Look up a route descriptor by its unique name.
    pub fn by_name(&self, name: &str) -> Option<&Route<V>> {
        self.names.get(name).map(|&idx| &self.routes[idx])
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for [`RouteTable`].
///
/// Descriptors are validated as they are inserted; [`build`](Self::build)
/// itself cannot fail.
pub struct RouteTableBuilder<V> {
    matcher: Matcher<usize>,
    routes: Vec<Route<V>>,
    names: HashMap<String, usize>,
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self {
            matcher: Matcher::new(),
            routes: Vec::new(),
            names: HashMap::new(),
        }
    }
}

impl<V> RouteTableBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route descriptor.
    ///
    /// Returns an error if the route's name is already taken, or if its
    /// pattern is invalid or conflicts with an earlier pattern.
    pub fn insert(&mut self, route: Route<V>) -> Result<(), NavError> {
        if self.names.contains_key(&route.name) {
            return Err(NavError::DuplicateName(route.name));
        }

        let idx = self.routes.len();
        self.matcher
            .insert(normalize(&route.pattern), idx)
            .map_err(|e| NavError::InvalidPattern {
                pattern: route.pattern.clone(),
                reason: e.to_string(),
            })?;

        self.names.insert(route.name.clone(), idx);
        self.routes.push(route);
        Ok(())
    }

    /// Build the table, consuming the builder.
    pub fn build(self) -> RouteTable<V> {
        RouteTable {
            matcher: self.matcher,
            routes: self.routes,
            names: self.names,
        }
    }
}

/// Rewrite `:param` segments into the matcher's `{param}` syntax.
///
/// Segments already written in brace syntax pass through unchanged, as do
/// literal segments.
fn normalize(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{name}}}"),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_param_segments() {
        assert_eq!(normalize("/post/:id"), "/post/{id}");
        assert_eq!(normalize("/a/:b/c/:d"), "/a/{b}/c/{d}");
        assert_eq!(normalize("/about"), "/about");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/post/{id}"), "/post/{id}");
    }

    #[test]
    fn test_resolve_literal_and_param() {
        let mut builder = RouteTableBuilder::new();
        builder.insert(Route::new("/about", "about", 1)).unwrap();
        builder
            .insert(Route::new("/post/:id", "post-detail", 2))
            .unwrap();
        let table = builder.build();

        let resolved = table.resolve("/about").unwrap();
        assert_eq!(resolved.destination.name, "about");
        assert_eq!(*resolved.view, 1);
        assert!(resolved.destination.params.is_empty());

        let resolved = table.resolve("/post/42").unwrap();
        assert_eq!(resolved.destination.name, "post-detail");
        assert_eq!(resolved.destination.pattern, "/post/:id");
        assert_eq!(resolved.destination.path, "/post/42");
        assert_eq!(resolved.destination.param("id"), Some("42"));
        assert_eq!(*resolved.view, 2);

        assert!(table.resolve("/missing").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut builder = RouteTableBuilder::new();
        builder.insert(Route::new("/", "home", ())).unwrap();
        let err = builder.insert(Route::new("/home", "home", ())).unwrap_err();
        assert!(matches!(err, NavError::DuplicateName(name) if name == "home"));
    }

    #[test]
    fn test_conflicting_pattern_rejected() {
        let mut builder = RouteTableBuilder::new();
        builder.insert(Route::new("/about", "about", ())).unwrap();
        let err = builder
            .insert(Route::new("/about", "about-too", ()))
            .unwrap_err();
        assert!(matches!(err, NavError::InvalidPattern { .. }));
    }

    #[test]
    fn test_by_name() {
        let mut builder = RouteTableBuilder::new();
        builder.insert(Route::new("/login", "login", ())).unwrap();
        let table = builder.build();

        assert_eq!(table.by_name("login").map(|r| r.pattern.as_str()), Some("/login"));
        assert!(table.by_name("logout").is_none());
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
