use std::sync::{Arc, RwLock, RwLockReadGuard};

use futures_channel::mpsc::UnboundedSender;
use log::error;

use crate::{
    helpers::construct_named_path,
    navigation::{NavigationTarget, Query},
    route_definition::{Resolution, RouteTable},
    service::{RouterMessage, SubscriberId},
    state::RouterState,
};

/// A handle to the router, used to navigate and to inspect the routing state.
///
/// Created by [`create_router`](crate::create_router) alongside the
/// [`RouterService`](crate::RouterService) it talks to. Handles are cheap to clone and all
/// clones talk to the same service.
pub struct Router<C: Clone> {
    routes: Arc<RouteTable<C>>,
    state: Arc<RwLock<RouterState<C>>>,
    tx: UnboundedSender<RouterMessage>,
}

impl<C: Clone> Router<C> {
    pub(crate) fn new(
        tx: UnboundedSender<RouterMessage>,
        state: Arc<RwLock<RouterState<C>>>,
        routes: Arc<RouteTable<C>>,
    ) -> Self {
        Self { routes, state, tx }
    }

    /// Navigate to `target`, pushing a new history entry.
    ///
    /// Targets that match no route are not an error; they fall through to the catch-all route.
    pub fn push(&self, target: impl Into<NavigationTarget>) {
        self.send(RouterMessage::Push(target.into()));
    }

    /// Navigate to `target`, replacing the current history entry.
    pub fn replace(&self, target: impl Into<NavigationTarget>) {
        self.send(RouterMessage::Replace(target.into()));
    }

    /// Go back a step in the navigation history.
    pub fn go_back(&self) {
        self.send(RouterMessage::GoBack);
    }

    /// Go a step forward in the navigation history.
    pub fn go_forward(&self) {
        self.send(RouterMessage::GoForward);
    }

    /// Subscribe to routing updates.
    ///
    /// The service calls the update callback with `id` whenever the active route changes. The
    /// subscription ends when the last [`Arc`] of `id` is dropped.
    pub fn subscribe(&self, id: Arc<SubscriberId>) {
        self.send(RouterMessage::Subscribe(id));
    }

    /// Read the current routing state.
    ///
    /// Make sure to [`drop`] the returned guard when done rendering. Holding on to it blocks
    /// the router from updating the state when navigating.
    #[must_use]
    pub fn state(&self) -> RwLockReadGuard<'_, RouterState<C>> {
        self.state.read().unwrap()
    }

    /// Match `path` against the route table without navigating.
    ///
    /// Deterministic and total: the first matching route in declaration order wins, and paths
    /// no other route matches resolve to the catch-all route.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_, C> {
        self.routes.resolve(path)
    }

    /// Construct the path to the route named `name`.
    ///
    /// Returns [`None`] if no route has the `name` or a required parameter is missing from
    /// `parameters`; in debug builds those are panics instead.
    #[must_use]
    pub fn named_path(
        &self,
        name: &'static str,
        parameters: &[(&'static str, String)],
        query: &Query,
    ) -> Option<String> {
        construct_named_path(name, parameters, query, &self.routes)
    }

    fn send(&self, message: RouterMessage) {
        if self.tx.unbounded_send(message).is_err() {
            error!("router service is gone, navigation dropped");
        }
    }
}

impl<C: Clone> Clone for Router<C> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
            state: self.state.clone(),
            tx: self.tx.clone(),
        }
    }
}
