//! Types describing where the router can navigate to.

use log::error;
use url::Url;

/// A target for the router to navigate to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NavigationTarget {
    /// Navigate to the specified path.
    ///
    /// If the path matches no route, the catch-all route of the table is shown instead.
    Path(String),
    /// Navigate to the route with the corresponding name.
    Named {
        /// The unique name of the target route.
        name: &'static str,
        /// Values for the parameters the target routes pattern captures.
        parameters: Vec<(&'static str, String)>,
        /// A query to append to the constructed path.
        query: Query,
    },
    /// Navigate to an external URL.
    ///
    /// Not all history providers can leave the application. See
    /// [`HistoryProvider::can_external`](crate::history::HistoryProvider::can_external) for what
    /// happens when the current one cannot.
    External(String),
}

impl NavigationTarget {
    /// Create a [`NavigationTarget::Named`] without parameters or query.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self::Named {
            name,
            parameters: Vec::new(),
            query: Query::None,
        }
    }

    /// Add a parameter value to a [`NavigationTarget::Named`].
    ///
    /// # Panic
    /// - If `self` is not a [`NavigationTarget::Named`], but only in debug builds.
    pub fn parameter(mut self, key: &'static str, value: impl Into<String>) -> Self {
        if let Self::Named { parameters, .. } = &mut self {
            parameters.push((key, value.into()));
        } else {
            error!(r#"parameters can only be added to named targets, ignoring "{key}""#);
            #[cfg(debug_assertions)]
            panic!(r#"parameters can only be added to named targets: "{key}""#);
        }

        self
    }

    /// Set the query of a [`NavigationTarget::Named`].
    ///
    /// # Panic
    /// - If `self` is not a [`NavigationTarget::Named`], but only in debug builds.
    pub fn query(mut self, query: Query) -> Self {
        if let Self::Named { query: existing, .. } = &mut self {
            *existing = query;
        } else {
            error!("a query can only be set on named targets, ignoring it");
            #[cfg(debug_assertions)]
            panic!("a query can only be set on named targets");
        }

        self
    }

    /// Returns `true` if the navigation target is [`External`].
    ///
    /// [`External`]: NavigationTarget::External
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(..))
    }
}

impl From<&str> for NavigationTarget {
    fn from(value: &str) -> Self {
        match Url::parse(value) {
            Ok(url) if !url.cannot_be_a_base() => Self::External(value.to_string()),
            _ => Self::Path(value.to_string()),
        }
    }
}

impl From<String> for NavigationTarget {
    fn from(value: String) -> Self {
        match Url::parse(&value) {
            Ok(url) if !url.cannot_be_a_base() => Self::External(value),
            _ => Self::Path(value),
        }
    }
}

/// The query part of a [`NavigationTarget::Named`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Query {
    /// No query.
    #[default]
    None,
    /// A raw query string, with or without the leading `?`.
    Raw(String),
    /// Key-value pairs, percent-encoded when the path is constructed.
    Pairs(Vec<(String, String)>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_with_scheme_is_external() {
        assert_eq!(
            NavigationTarget::from("https://example.com/"),
            NavigationTarget::External(String::from("https://example.com/"))
        );
    }

    #[test]
    fn str_without_scheme_is_a_path() {
        assert_eq!(
            NavigationTarget::from("/recipe/42"),
            NavigationTarget::Path(String::from("/recipe/42"))
        );
    }

    #[test]
    fn named_builder() {
        let target = NavigationTarget::named("RecipeDetail")
            .parameter("id", "42")
            .query(Query::Raw(String::from("tab=steps")));

        assert_eq!(
            target,
            NavigationTarget::Named {
                name: "RecipeDetail",
                parameters: vec![("id", String::from("42"))],
                query: Query::Raw(String::from("tab=steps")),
            }
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = r#"parameters can only be added to named targets: "id""#]
    fn parameter_on_path_panics_in_debug() {
        let _ = NavigationTarget::Path(String::from("/")).parameter("id", "42");
    }

    #[test]
    fn is_external() {
        assert!(NavigationTarget::External(String::from("https://example.com/")).is_external());
        assert!(!NavigationTarget::Path(String::from("/")).is_external());
    }
}
