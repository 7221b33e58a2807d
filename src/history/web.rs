use std::sync::Arc;

use gloo_events::EventListener;
use log::error;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::{History, HtmlElement, Window};

use super::HistoryProvider;

/// The scroll position the router keeps in the browser history state.
#[derive(Default, Deserialize, Serialize)]
struct ScrollPosition {
    x: i32,
    y: i32,
}

/// A [`HistoryProvider`] that uses the [History API] and [Location API] to integrate with the
/// browser.
///
/// [History API]: https://developer.mozilla.org/en-US/docs/Web/API/History_API
/// [Location API]: https://developer.mozilla.org/en-US/docs/Web/API/Location
///
/// # Prefix
/// This [`HistoryProvider`] supports a prefix, which allows its use for web apps not located at
/// the root of their domain.
///
/// When fetching the current path, the prefix is removed from the start of it, if it is present.
/// When navigating somewhere, the path provided by the router is prefixed with it.
///
/// It is up to the application developer to ensure the prefix ends at a `/`. Otherwise, the
/// first navigation from within the app will add one.
pub struct WebHistory {
    body: HtmlElement,
    history: History,
    listener: Option<EventListener>,
    prefix: Option<String>,
    window: Window,
}

impl WebHistory {
    /// Create a new [`WebHistory`] with a prefix.
    #[must_use]
    pub fn with_prefix(prefix: String) -> Self {
        Self {
            prefix: Some(prefix),
            ..Default::default()
        }
    }

    fn scroll_position(&self) -> ScrollPosition {
        match self.history.state() {
            Ok(state) => serde_wasm_bindgen::from_value(state).unwrap_or_default(),
            Err(_) => ScrollPosition::default(),
        }
    }

    fn restore_scroll(&self) {
        let ScrollPosition { x, y } = self.scroll_position();
        self.body.set_scroll_left(x);
        self.body.set_scroll_top(y);
    }

    fn prefixed(&self, path: String) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{path}"),
            None => path,
        }
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        let window = web_sys::window().unwrap();
        let body = window.document().unwrap().body().unwrap();
        let history = window.history().unwrap();

        Self {
            body,
            history,
            listener: Default::default(),
            prefix: Default::default(),
            window,
        }
    }
}

impl HistoryProvider for WebHistory {
    fn current_path(&self) -> String {
        let mut path = self
            .window
            .location()
            .pathname()
            .expect("location can provide a path");

        if let Some(prefix) = &self.prefix {
            if path.starts_with(prefix.as_str()) {
                path = path.split_at(prefix.len()).1.to_string();
            }
        }

        if !path.starts_with('/') {
            path = format!("/{path}");
        }

        path
    }

    fn current_prefix(&self) -> String {
        self.prefix.clone().unwrap_or_default()
    }

    fn current_query(&self) -> Option<String> {
        let mut query = self
            .window
            .location()
            .search()
            .expect("location can provide a query");

        if query.starts_with('?') {
            query.remove(0);
        }

        match query.is_empty() {
            false => Some(query),
            true => None,
        }
    }

    fn go_back(&mut self) {
        self.history.back().ok();
        self.restore_scroll();
    }

    fn go_forward(&mut self) {
        self.history.forward().ok();
        self.restore_scroll();
    }

    fn push(&mut self, path: String) {
        let path = self.prefixed(path);
        let scroll = serde_wasm_bindgen::to_value(&ScrollPosition {
            x: self.body.scroll_left(),
            y: self.body.scroll_top(),
        })
        .unwrap_or(JsValue::NULL);

        if self
            .history
            .push_state_with_url(&scroll, "", Some(&path))
            .is_ok()
        {
            self.body.set_scroll_top(0);
            self.body.set_scroll_left(0);
        }
    }

    fn replace(&mut self, path: String) {
        let path = self.prefixed(path);
        let scroll = serde_wasm_bindgen::to_value(&ScrollPosition {
            x: self.body.scroll_left(),
            y: self.body.scroll_top(),
        })
        .unwrap_or(JsValue::NULL);

        if self
            .history
            .replace_state_with_url(&scroll, "", Some(&path))
            .is_err()
        {
            error!("failed to replace the current history entry");
        }
    }

    fn can_external(&self) -> bool {
        true
    }

    fn external(&mut self, url: String) {
        if self.window.location().set_href(&url).is_err() {
            error!(r#"failed to navigate to external url: "{url}""#);
        }
    }

    fn foreign_navigation_handler(&mut self, callback: Arc<dyn Fn() + Send + Sync>) {
        self.listener = Some(EventListener::new(&self.window, "popstate", move |_| {
            callback()
        }));
    }
}
