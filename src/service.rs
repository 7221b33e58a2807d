use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, Weak},
};

use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use futures_util::StreamExt;
use urlencoding::encode;

#[cfg(not(feature = "web"))]
use crate::history::MemoryHistory;
#[cfg(feature = "web")]
use crate::history::WebHistory;
use crate::{
    helpers::construct_named_path,
    history::HistoryProvider,
    navigation::NavigationTarget,
    route_definition::{RouteContent, RouteTable},
    router::Router,
    state::RouterState,
    PATH_FOR_EXTERNAL_NAVIGATION_FAILURE, PATH_FOR_NAMED_NAVIGATION_FAILURE,
};

/// The id of a component or task subscribed to routing updates.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriberId(pub usize);

/// A set of messages the [`RouterService`] can handle.
pub(crate) enum RouterMessage {
    /// Go back a step in the navigation history.
    GoBack,

    /// Go a step forward in the navigation history.
    GoForward,

    /// Push a new history entry.
    Push(NavigationTarget),

    /// Replace the current history entry with a new one.
    Replace(NavigationTarget),

    /// Subscribe the specified id to router updates.
    Subscribe(Arc<SubscriberId>),

    /// Tell the router to update the current state.
    Update,
}

/// The core of the router.
///
/// This combines the [route table](crate::route_definition) and a [`HistoryProvider`] to find
/// the active page. Also triggers updates of subscribers when the current route changes.
///
/// Constructed together with a linked [`Router`] handle by
/// [`create_router`](crate::create_router); the handle is how the application talks to the
/// service.
pub struct RouterService<C: Clone> {
    history: Box<dyn HistoryProvider>,
    routes: Arc<RouteTable<C>>,
    rx: UnboundedReceiver<RouterMessage>,
    state: Arc<RwLock<RouterState<C>>>,
    subscribers: Vec<Weak<SubscriberId>>,
    update: Arc<dyn Fn(SubscriberId)>,
}

impl<C: Clone> RouterService<C> {
    /// Create a new [`RouterService`].
    ///
    /// The returned [`RouterService`] and [`Router`] are linked with each other.
    #[must_use]
    pub(crate) fn new(
        routes: Arc<RouteTable<C>>,
        history: Option<Box<dyn HistoryProvider>>,
        prefix: Option<String>,
        update: Arc<dyn Fn(SubscriberId)>,
    ) -> (Self, Router<C>) {
        // create channel
        let (tx, rx) = unbounded();

        // create state and handle
        let state = Arc::new(RwLock::new(RouterState::default()));
        let router = Router::new(tx.clone(), state.clone(), routes.clone());

        // initiate the history provider
        #[cfg(feature = "web")]
        let mut history = history.unwrap_or_else(|| match prefix {
            Some(prefix) => Box::new(WebHistory::with_prefix(prefix)),
            None => Box::<WebHistory>::default(),
        });
        #[cfg(not(feature = "web"))]
        let mut history = {
            let _ = prefix;
            history.unwrap_or_else(|| Box::<MemoryHistory>::default())
        };
        history.foreign_navigation_handler(Arc::new(move || {
            tx.unbounded_send(RouterMessage::Update).ok();
        }));

        (
            Self {
                history,
                routes,
                rx,
                state,
                subscribers: vec![],
                update,
            },
            router,
        )
    }

    /// Perform a single routing pass. Doesn't process queued messages or trigger updates.
    pub fn single_routing(&mut self) {
        self.update_routing();
    }

    /// The routers event loop. Drive this future for as long as the application runs.
    pub async fn run(&mut self) {
        // Trigger initial routing. Subscribers rendering before this happens will be updated
        // when the subscription is registered.
        self.update_routing();

        while let Some(message) = self.rx.next().await {
            if self.handle_message(message) {
                self.update_routing();
                self.update_subscribers();
            }
        }
    }

    /// Process all queued messages, then return.
    ///
    /// For hosts that drive the router from their own event loop instead of awaiting
    /// [`run`](Self::run).
    pub fn run_until_idle(&mut self) {
        let mut routed = false;

        while let Ok(Some(message)) = self.rx.try_next() {
            routed |= self.handle_message(message);
        }

        if routed {
            self.update_routing();
            self.update_subscribers();
        }
    }

    /// Handle a single message. Returns whether a routing update is needed.
    fn handle_message(&mut self, message: RouterMessage) -> bool {
        match message {
            RouterMessage::GoBack => self.history.go_back(),
            RouterMessage::GoForward => self.history.go_forward(),
            RouterMessage::Push(target) => {
                if let Some(path) = resolve_target(&mut self.history, &self.routes, target) {
                    self.history.push(path);
                }
            }
            RouterMessage::Replace(target) => {
                if let Some(path) = resolve_target(&mut self.history, &self.routes, target) {
                    self.history.replace(path);
                }
            }
            RouterMessage::Subscribe(id) => {
                self.subscribers.push(Arc::downgrade(&id));
                (self.update)(*id);
                return false; // no navigation happened
            }
            RouterMessage::Update => { /* update triggered by the caller */ }
        }

        true
    }

    /// Update the current state of the router.
    fn update_routing(&mut self) {
        let mut state = self.state.write().unwrap();

        loop {
            // snapshot the history provider
            state.can_external = self.history.can_external();
            state.can_go_back = self.history.can_go_back();
            state.can_go_forward = self.history.can_go_forward();
            state.path = self.history.current_path();
            state.prefix = self.history.current_prefix();
            state.query = self.history.current_query();
            state.page = None;
            state.name = None;
            state.parameters = BTreeMap::new();

            let resolution = self.routes.resolve(&state.path);
            match resolution.route.content() {
                RouteContent::Page(page) => {
                    state.page = Some(page.clone());
                    state.name = Some(resolution.route.name());
                    state.parameters = resolution.parameters;
                    break;
                }
                RouteContent::Redirect(target) => {
                    let target = target.clone();
                    drop(resolution);

                    match resolve_target(&mut self.history, &self.routes, target) {
                        Some(path) => self.history.replace(path),
                        // the provider took an external navigation, nothing left to route
                        None => break,
                    }
                }
            }
        }
    }

    /// Trigger an update of all subscribers.
    ///
    /// Also sorts out the subscribers that have been dropped since the last update, as well as
    /// any duplicates.
    fn update_subscribers(&mut self) {
        let update = self.update.as_ref();
        let mut ids = Vec::with_capacity(self.subscribers.len());

        self.subscribers.retain(|subscriber| {
            // get rid of dropped subscribers
            if let Some(subscriber) = subscriber.upgrade() {
                // get rid of duplicates and trigger only one update
                if !ids.contains(&*subscriber) {
                    ids.push(*subscriber);
                    (update)(*subscriber);
                    true
                } else {
                    false
                }
            } else {
                false
            }
        });
    }
}

/// Turn `target` into a path for the history provider.
///
/// External targets are handed to the provider directly when it supports them; the result then
/// is [`None`]. Otherwise they degrade to an internal failure path, which the catch-all route
/// of the table handles.
#[must_use]
fn resolve_target<C>(
    history: &mut Box<dyn HistoryProvider>,
    routes: &RouteTable<C>,
    target: NavigationTarget,
) -> Option<String> {
    match target {
        NavigationTarget::Path(path) => Some(path),
        NavigationTarget::Named {
            name,
            parameters,
            query,
        } => Some(
            construct_named_path(name, &parameters, &query, routes)
                .unwrap_or_else(|| format!("/{PATH_FOR_NAMED_NAVIGATION_FAILURE}")),
        ),
        NavigationTarget::External(url) => {
            if history.can_external() {
                history.external(url);
                None
            } else {
                Some(format!(
                    "/{PATH_FOR_EXTERNAL_NAVIGATION_FAILURE}?url={url}",
                    url = encode(&url)
                ))
            }
        }
    }
}
