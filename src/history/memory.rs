use log::error;
use url::Url;

use super::HistoryProvider;

/// A [`HistoryProvider`] that stores all information in memory.
///
/// Used as the default provider when the `web` feature is disabled, and useful for tests.
pub struct MemoryHistory {
    current: Url,
    past: Vec<String>,
    future: Vec<String>,
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] starting at `path` instead of `/`.
    #[must_use]
    pub fn with_initial_path(path: &str) -> Self {
        let mut history = Self::default();
        history.replace(path.to_string());
        history
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self {
            current: Url::parse("memory://router/").unwrap(),
            past: Default::default(),
            future: Default::default(),
        }
    }
}

impl HistoryProvider for MemoryHistory {
    fn current_path(&self) -> String {
        self.current.path().to_string()
    }

    fn current_query(&self) -> Option<String> {
        self.current.query().map(|query| query.to_string())
    }

    fn can_go_back(&self) -> bool {
        !self.past.is_empty()
    }

    fn can_go_forward(&self) -> bool {
        !self.future.is_empty()
    }

    fn go_back(&mut self) {
        if self.can_go_back() {
            self.future.push(self.current.to_string());
            self.current = Url::parse(&self.past.pop().unwrap()).unwrap();

            // past urls are always valid, they came from the url struct itself
        }
    }

    fn go_forward(&mut self) {
        if self.can_go_forward() {
            self.past.push(self.current.to_string());
            self.current = Url::parse(&self.future.pop().unwrap()).unwrap();

            // future urls are always valid, they came from the url struct itself
        }
    }

    fn push(&mut self, path: String) {
        if path.starts_with("//") {
            error!(r#"cannot navigate to paths starting with "//", path: {path}"#);
            return;
        }

        let previous = self.current.to_string();

        if let Ok(url) = self.current.join(&path) {
            self.past.push(previous);
            self.current = url;
            self.future.clear();
        }
    }

    fn replace(&mut self, path: String) {
        if path.starts_with("//") {
            error!(r#"cannot navigate to paths starting with "//", path: {path}"#);
            return;
        }

        if let Ok(url) = self.current.join(&path) {
            self.current = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_root() {
        let history = MemoryHistory::default();

        assert_eq!(history.current_path(), "/");
        assert_eq!(history.current_query(), None);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn with_initial_path() {
        let history = MemoryHistory::with_initial_path("/recipe/9");

        assert_eq!(history.current_path(), "/recipe/9");
        assert!(!history.can_go_back());
    }

    #[test]
    fn push_and_go_back() {
        let mut history = MemoryHistory::default();

        history.push(String::from("/recipe/1"));
        assert_eq!(history.current_path(), "/recipe/1");
        assert!(history.can_go_back());

        history.go_back();
        assert_eq!(history.current_path(), "/");
        assert!(history.can_go_forward());

        history.go_forward();
        assert_eq!(history.current_path(), "/recipe/1");
    }

    #[test]
    fn push_clears_the_future() {
        let mut history = MemoryHistory::default();

        history.push(String::from("/recipe/1"));
        history.go_back();
        history.push(String::from("/recipe/2"));

        assert!(!history.can_go_forward());
        assert_eq!(history.current_path(), "/recipe/2");
    }

    #[test]
    fn replace_leaves_past_and_future_untouched() {
        let mut history = MemoryHistory::default();

        history.replace(String::from("/recipe/1"));

        assert_eq!(history.current_path(), "/recipe/1");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn query_is_split_from_the_path() {
        let mut history = MemoryHistory::default();

        history.push(String::from("/recipe/1?tab=steps"));

        assert_eq!(history.current_path(), "/recipe/1");
        assert_eq!(history.current_query(), Some(String::from("tab=steps")));
    }

    #[test]
    fn protocol_relative_paths_are_rejected() {
        let mut history = MemoryHistory::default();

        history.push(String::from("//evil.example/"));

        assert_eq!(history.current_path(), "/");
        assert!(!history.can_go_back());
    }
}
