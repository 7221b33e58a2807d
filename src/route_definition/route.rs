use std::fmt::Debug;

use super::{Pattern, RouteContent};
use crate::navigation::NavigationTarget;

/// A binding from a path pattern to a page and a unique name.
///
/// The name is used for programmatic navigation, see
/// [`NavigationTarget::Named`](crate::navigation::NavigationTarget::Named). Make sure it is
/// unique among the routes passed to [`RouteTable::new`](super::RouteTable::new).
#[derive(Clone)]
pub struct Route<C> {
    pub(crate) pattern: Pattern,
    pub(crate) name: &'static str,
    pub(crate) content: RouteContent<C>,
}

impl<C> Route<C> {
    /// Create a route showing `page` when `pattern` matches.
    ///
    /// # Panic
    /// - If `pattern` is malformed, but only in debug builds. See [`Pattern::parse`].
    pub fn page(pattern: &'static str, name: &'static str, page: C) -> Self {
        Self {
            pattern: Pattern::parse(pattern),
            name,
            content: RouteContent::Page(page),
        }
    }

    /// Create a route redirecting to `target` when `pattern` matches.
    ///
    /// # Panic
    /// - If `pattern` is malformed, but only in debug builds. See [`Pattern::parse`].
    pub fn redirect(
        pattern: &'static str,
        name: &'static str,
        target: impl Into<NavigationTarget>,
    ) -> Self {
        Self {
            pattern: Pattern::parse(pattern),
            name,
            content: RouteContent::Redirect(target.into()),
        }
    }

    /// The unique name of the route.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The path pattern the route matches.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// What the route shows when it matches.
    #[must_use]
    pub fn content(&self) -> &RouteContent<C> {
        &self.content
    }
}

impl<C> Debug for Route<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("name", &self.name)
            .field("content", &self.content)
            .finish()
    }
}
