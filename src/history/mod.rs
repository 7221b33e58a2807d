//! History integration.
//!
//! The router relies on a [`HistoryProvider`] to store the current path, and possibly a past
//! (i.e. a browsers back button) and future (i.e. a browsers forward button).
//!
//! To integrate the router with any kind of history, implement the [`HistoryProvider`] trait.
//! Two implementations are provided: [`MemoryHistory`] (always available) and `WebHistory`
//! (behind the `web` feature), which uses the browsers History API.

use std::sync::Arc;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// An integration with some kind of navigation history.
///
/// The described behaviors are designed to mimic a web browser. Implementations may deviate, as
/// long as `current_path` keeps the described format, but should document how.
pub trait HistoryProvider {
    /// Get the path of the current URL.
    ///
    /// **Must start** with `/`. **Must _not_ contain** the prefix.
    #[must_use]
    fn current_path(&self) -> String;

    /// Get the current path prefix of the URL.
    ///
    /// Not all [`HistoryProvider`]s need a prefix feature. It is meant for environments where the
    /// routed application is not running on `/`. The [`HistoryProvider`] is responsible for
    /// removing the prefix from the router-internal path, and for adding it back in during
    /// navigation.
    #[must_use]
    fn current_prefix(&self) -> String {
        String::new()
    }

    /// Get the current query string, without the leading `?`, if present.
    #[must_use]
    fn current_query(&self) -> Option<String> {
        None
    }

    /// Check whether there is a previous path to navigate back to.
    ///
    /// If a [`HistoryProvider`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to a previous path.
    ///
    /// If a [`HistoryProvider`] cannot go to a previous path, it should do nothing. This method
    /// might be called, even if `can_go_back` returns [`false`].
    fn go_back(&mut self);

    /// Check whether there is a future path to navigate forward to.
    ///
    /// If a [`HistoryProvider`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to a future path.
    ///
    /// If a [`HistoryProvider`] cannot go to a future path, it should do nothing. This method
    /// might be called, even if `can_go_forward` returns [`false`].
    fn go_forward(&mut self);

    /// Go to another path.
    ///
    /// This should do three things:
    /// 1. Merge the current URL with the `path` parameter (which may also include a query part).
    /// 2. Add the previous URL to the navigation past.
    /// 3. Clear the navigation future.
    fn push(&mut self, path: String);

    /// Replace the current path with another one.
    ///
    /// This should merge the current URL with the `path` parameter (which may also include a
    /// query part). In contrast to `push`, the navigation past and future should stay untouched.
    fn replace(&mut self, path: String);

    /// Check whether the provider can navigate to external URLs.
    #[must_use]
    fn can_external(&self) -> bool {
        false
    }

    /// Navigate to an external URL, leaving the application.
    ///
    /// Only called when `can_external` returns [`true`].
    #[allow(unused_variables)]
    fn external(&mut self, url: String) {}

    /// Provide the [`HistoryProvider`] with an update callback.
    ///
    /// Some [`HistoryProvider`]s may receive updates from outside the router, e.g. a browsers
    /// back button. When such updates are received, they should call `callback`, which will
    /// cause the router to update.
    #[allow(unused_variables)]
    fn foreign_navigation_handler(&mut self, callback: Arc<dyn Fn() + Send + Sync>) {}
}
