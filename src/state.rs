use std::{collections::BTreeMap, fmt::Debug};

use crate::navigation::NavigationTarget;

/// The current routing information.
///
/// Written only by the router service when navigation occurs, read by the rendering layer
/// through the [`Router`](crate::Router) handle.
pub struct RouterState<C> {
    /// Whether the history provider can handle external navigation targets.
    pub can_external: bool,

    /// Whether there is a prior path to go back to.
    ///
    /// This might be [`true`] even if there isn't.
    pub can_go_back: bool,

    /// Whether there is a later path to go forward to.
    ///
    /// This might be [`true`] even if there isn't.
    pub can_go_forward: bool,

    /// The page of the active route.
    ///
    /// [`None`] until the first routing pass has completed.
    pub page: Option<C>,

    /// The name of the active route.
    pub name: Option<&'static str>,

    /// The current path.
    pub path: String,

    /// The current prefix.
    pub prefix: String,

    /// The current query string, if present.
    pub query: Option<String>,

    /// The parameters captured from the current path.
    pub parameters: BTreeMap<&'static str, String>,
}

impl<C> RouterState<C> {
    /// Checks if the provided `target` is currently active.
    ///
    /// # [`Path`](NavigationTarget::Path)
    /// If the target is a path and `exact` is [`true`], the current path must match the `target`
    /// path exactly.
    ///
    /// If `exact` is [`false`] and the `target` path is absolute (starts with `/`), the current
    /// path must start with the `target` path.
    ///
    /// Otherwise, the last segment of the current path must match the `target` path.
    ///
    /// # [`Named`](NavigationTarget::Named)
    /// The `target` name must be the active routes name.
    ///
    /// If `exact` is [`true`], all `target` parameters must be matched by current parameters.
    /// The `target` is still active, even if the current parameters are more than the `target`
    /// parameters. The query is ignored.
    ///
    /// # [`External`](NavigationTarget::External)
    /// Always [`false`].
    #[must_use]
    pub fn is_active(&self, target: &NavigationTarget, exact: bool) -> bool {
        match target {
            NavigationTarget::Path(path) => {
                if exact {
                    return &self.path == path;
                }

                // absolute path
                if path.starts_with('/') {
                    return self.path.starts_with(path.as_str());
                }

                // relative path
                if let Some(segment) = self.path.split('/').last() {
                    return segment == path;
                }

                false
            }
            NavigationTarget::Named {
                name, parameters, ..
            } => {
                if self.name != Some(*name) {
                    return false;
                }

                // ensure specified parameters match when exact
                if exact {
                    for (key, value) in parameters {
                        match self.parameters.get(key) {
                            Some(current) if current == value => {}
                            _ => return false,
                        }
                    }
                }

                true
            }
            NavigationTarget::External(_) => false,
        }
    }

    /// Get the query parameters as a [`BTreeMap`].
    #[must_use]
    pub fn query_params(&self) -> Option<BTreeMap<String, String>> {
        self.query
            .as_ref()
            .and_then(|query| serde_urlencoded::from_str(query).ok())
    }
}

impl<C> Default for RouterState<C> {
    fn default() -> Self {
        Self {
            can_external: Default::default(),
            can_go_back: Default::default(),
            can_go_forward: Default::default(),
            page: None,
            name: Default::default(),
            path: Default::default(),
            prefix: Default::default(),
            query: Default::default(),
            parameters: Default::default(),
        }
    }
}

// the page type is not required to implement Debug
impl<C> Debug for RouterState<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterState")
            .field("can_external", &self.can_external)
            .field("can_go_back", &self.can_go_back)
            .field("can_go_forward", &self.can_go_forward)
            .field("name", &self.name)
            .field("path", &self.path)
            .field("prefix", &self.prefix)
            .field("query", &self.query)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
