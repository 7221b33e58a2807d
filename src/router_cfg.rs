use std::sync::Arc;

use crate::{
    history::HistoryProvider,
    route_definition::RouteTable,
    router::Router,
    service::{RouterService, SubscriberId},
};

/// Configuration for a router instance.
///
/// Follows the builder pattern:
/// ```rust
/// # use recipe_router::prelude::*;
/// let cfg = RouterConfig::new(RouteTable::new(vec![
///     Route::page("/", "Home", "landing"),
///     Route::page("/*", "NotFound", "fallback"),
/// ]))
/// .history(Box::new(MemoryHistory::default()));
/// # let _ = cfg;
/// ```
pub struct RouterConfig<C: Clone> {
    pub(crate) routes: RouteTable<C>,
    pub(crate) history: Option<Box<dyn HistoryProvider>>,
    pub(crate) prefix: Option<String>,
    pub(crate) update: Option<Arc<dyn Fn(SubscriberId)>>,
}

impl<C: Clone> RouterConfig<C> {
    /// Create a configuration with the provided route table and defaults for everything else.
    #[must_use]
    pub fn new(routes: RouteTable<C>) -> Self {
        Self {
            routes,
            history: None,
            prefix: None,
            update: None,
        }
    }

    /// The history provider to use.
    ///
    /// Defaults to `WebHistory` when the `web` feature is enabled, [`MemoryHistory`] otherwise.
    ///
    /// [`MemoryHistory`]: crate::history::MemoryHistory
    pub fn history(mut self, history: Box<dyn HistoryProvider>) -> Self {
        self.history = Some(history);
        self
    }

    /// The path prefix for deployments not hosted at the root of their domain.
    ///
    /// Only used when the default history provider is constructed. A provider set via
    /// [`history`](Self::history) brings its own prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The callback invoked with a subscriber id whenever the active route changes.
    ///
    /// Defaults to doing nothing.
    pub fn on_update(mut self, update: Arc<dyn Fn(SubscriberId)>) -> Self {
        self.update = Some(update);
        self
    }
}

/// Construct a router from `cfg`.
///
/// Returns the [`RouterService`] and the [`Router`] handle the application navigates with.
/// Drive the services [`run`](RouterService::run) loop (or pump it via
/// [`run_until_idle`](RouterService::run_until_idle)) for the lifetime of the application.
#[must_use]
pub fn create_router<C: Clone>(cfg: RouterConfig<C>) -> (RouterService<C>, Router<C>) {
    let RouterConfig {
        routes,
        history,
        prefix,
        update,
    } = cfg;

    RouterService::new(
        Arc::new(routes),
        history,
        prefix,
        update.unwrap_or_else(|| Arc::new(|_| {})),
    )
}
