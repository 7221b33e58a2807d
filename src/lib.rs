#![doc = include_str!("../README.md")]

pub mod history;
pub mod navigation;
pub mod recipes;
pub mod route_definition;

mod helpers;
mod router;
mod router_cfg;
mod service;
mod state;

pub use router::Router;
pub use router_cfg::{create_router, RouterConfig};
pub use service::{RouterService, SubscriberId};
pub use state::RouterState;

/// The in-app path the router navigates to when the history provider cannot handle an external
/// navigation target. Resolved by the catch-all route of the table; the original URL is
/// attached as the `url` query parameter.
pub const PATH_FOR_EXTERNAL_NAVIGATION_FAILURE: &str = "external-navigation-failure";

/// The in-app path the router navigates to when a named navigation target cannot be turned
/// into a path. Resolved by the catch-all route of the table.
pub const PATH_FOR_NAMED_NAVIGATION_FAILURE: &str = "named-navigation-failure";

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::history::*;
    pub use crate::navigation::*;
    pub use crate::route_definition::*;
    pub use crate::router::Router;
    pub use crate::router_cfg::{create_router, RouterConfig};
    pub use crate::service::{RouterService, SubscriberId};
    pub use crate::state::RouterState;
}
