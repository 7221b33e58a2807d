use std::{collections::BTreeMap, fmt::Debug, slice::Iter};

use log::error;

use super::Route;

/// An ordered collection of [`Route`]s.
///
/// Routes are matched in declaration order: the first structurally matching pattern wins. Static
/// patterns therefore have to be declared before parameterized patterns that would also match
/// their paths, and the final route must be the catch-all `/*`, which makes
/// [`resolve`](Self::resolve) total.
///
/// The table is constructed once at application startup and is immutable afterwards.
#[derive(Clone)]
pub struct RouteTable<C> {
    routes: Vec<Route<C>>,
}

impl<C> RouteTable<C> {
    /// Create a table from `routes`.
    ///
    /// # Panic
    /// If the table violates one of its invariants, but only in debug builds:
    /// - route names must be unique,
    /// - the final route must be the catch-all `/*`,
    /// - no other route may contain a catch-all segment (it would shadow every route after it).
    #[must_use]
    pub fn new(routes: Vec<Route<C>>) -> Self {
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|prior| prior.name == route.name) {
                error!(
                    r#"route names must be unique; duplicate name: "{name}""#,
                    name = route.name
                );
                #[cfg(debug_assertions)]
                panic!(r#"duplicate route name: "{name}""#, name = route.name);
            }
        }

        match routes.last() {
            Some(last) if last.pattern.is_universal() => {}
            Some(last) => {
                error!(
                    r#"the final route must be the catch-all "/*", found "{pattern}""#,
                    pattern = last.pattern.as_str()
                );
                #[cfg(debug_assertions)]
                panic!(
                    r#"the final route must be the catch-all "/*", found "{pattern}""#,
                    pattern = last.pattern.as_str()
                );
            }
            None => {
                error!("route table must not be empty");
                #[cfg(debug_assertions)]
                panic!("route table must not be empty");
            }
        }

        for route in routes.iter().rev().skip(1) {
            if route.pattern.has_catch_all() {
                error!(
                    r#"only the final route may contain a catch-all: "{pattern}""#,
                    pattern = route.pattern.as_str()
                );
                #[cfg(debug_assertions)]
                panic!(
                    r#"only the final route may contain a catch-all: "{pattern}""#,
                    pattern = route.pattern.as_str()
                );
            }
        }

        Self { routes }
    }

    /// Find the route matching `path`.
    ///
    /// Deterministic and total: the routes are checked in declaration order, the first
    /// structurally matching pattern wins, and paths no other pattern matches fall through to
    /// the final catch-all route.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_, C> {
        for route in &self.routes {
            if let Some(parameters) = route.pattern.matches(path) {
                return Resolution { route, parameters };
            }
        }

        // unreachable with a valid table, the catch-all matches everything
        error!(r#"no route matched "{path}", falling back to the final route"#);
        Resolution {
            route: self.routes.last().expect("route tables are never empty"),
            parameters: BTreeMap::new(),
        }
    }

    /// Find a route by its unique name.
    #[must_use]
    pub fn route_by_name(&self, name: &str) -> Option<&Route<C>> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// The routes in declaration order.
    pub fn iter(&self) -> Iter<'_, Route<C>> {
        self.routes.iter()
    }

    /// The number of routes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the table contains no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<C> Debug for RouteTable<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .finish()
    }
}

impl<'a, C> IntoIterator for &'a RouteTable<C> {
    type Item = &'a Route<C>;
    type IntoIter = Iter<'a, Route<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The result of [`RouteTable::resolve`]: the matched route and the parameters captured from
/// the path.
pub struct Resolution<'a, C> {
    /// The first route whose pattern matched.
    pub route: &'a Route<C>,
    /// The parameter values captured from the path.
    pub parameters: BTreeMap<&'static str, String>,
}

impl<C> Debug for Resolution<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolution")
            .field("route", &self.route)
            .field("parameters", &self.parameters)
            .finish()
    }
}
