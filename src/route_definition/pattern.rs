use std::collections::BTreeMap;

use log::error;
use urlencoding::{decode, encode};

/// A single segment of a [`Pattern`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum PatternSegment {
    /// Matches one path segment with exactly the contained value.
    Static(&'static str),
    /// Matches one non-empty path segment, capturing its value under the contained key.
    Parameter(&'static str),
    /// Matches any remainder of the path, including none.
    CatchAll,
}

/// A parsed path pattern, e.g. `/recipe/:id`.
///
/// A pattern consists of `/`-separated segments:
/// - a plain segment (`recipe`) matches that value exactly,
/// - a segment starting with `:` (`:id`) matches any single non-empty value and captures it as a
///   parameter,
/// - a `*` segment matches any remainder of the path and must be the final segment.
///
/// Path segments are percent-decoded before they are compared or captured. A single trailing `/`
/// on the checked path is ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pattern {
    raw: &'static str,
    segments: Vec<PatternSegment>,
}

impl Pattern {
    /// Parse a pattern.
    ///
    /// # Panic
    /// If the pattern is malformed, but only in debug builds. A pattern must start with `/`,
    /// parameter segments must have a name, and a catch-all must be the final segment.
    #[must_use]
    pub fn parse(raw: &'static str) -> Self {
        let rel = match raw.strip_prefix('/') {
            Some(rel) => rel,
            None => {
                error!(r#"pattern must be absolute (start with "/"): "{raw}""#);
                #[cfg(debug_assertions)]
                panic!(r#"pattern must be absolute (start with "/"): "{raw}""#);
                #[cfg(not(debug_assertions))]
                raw
            }
        };

        // trailing slashes carry no information
        let rel = rel.strip_suffix('/').unwrap_or(rel);

        let mut segments = Vec::new();
        if !rel.is_empty() {
            for segment in rel.split('/') {
                if matches!(segments.last(), Some(PatternSegment::CatchAll)) {
                    error!(r#"catch-all must be the final segment: "{raw}""#);
                    #[cfg(debug_assertions)]
                    panic!(r#"catch-all must be the final segment: "{raw}""#);
                    #[cfg(not(debug_assertions))]
                    break;
                }

                if segment == "*" {
                    segments.push(PatternSegment::CatchAll);
                } else if let Some(key) = segment.strip_prefix(':') {
                    if key.is_empty() {
                        error!(r#"parameter segment without a name: "{raw}""#);
                        #[cfg(debug_assertions)]
                        panic!(r#"parameter segment without a name: "{raw}""#);
                        #[cfg(not(debug_assertions))]
                        segments.push(PatternSegment::Static(segment));
                    } else {
                        segments.push(PatternSegment::Parameter(key));
                    }
                } else {
                    segments.push(PatternSegment::Static(segment));
                }
            }
        }

        Self { raw, segments }
    }

    /// The pattern as it was written.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.raw
    }

    /// Check `path` against the pattern.
    ///
    /// Returns the captured parameters if the path structurally matches, [`None`] otherwise.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<BTreeMap<&'static str, String>> {
        let mut parameters = BTreeMap::new();

        // a lone catch-all accepts anything, even values without a leading slash
        if self.is_universal() {
            return Some(parameters);
        }

        let rel = path.strip_prefix('/')?;
        let rel = rel.strip_suffix('/').unwrap_or(rel);
        let values: Vec<&str> = match rel.is_empty() {
            true => Vec::new(),
            false => rel.split('/').collect(),
        };

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PatternSegment::CatchAll => return Some(parameters),
                PatternSegment::Static(expected) => {
                    let value = decode_segment(values.get(i).copied()?);
                    if value != *expected {
                        return None;
                    }
                }
                PatternSegment::Parameter(key) => {
                    let value = decode_segment(values.get(i).copied()?);
                    if value.is_empty() {
                        return None;
                    }
                    parameters.insert(*key, value);
                }
            }
        }

        // the path must not be more specific than the pattern
        match values.len() == self.segments.len() {
            true => Some(parameters),
            false => None,
        }
    }

    /// Build a concrete path from the pattern, percent-encoding the provided parameter values.
    ///
    /// # Return values
    /// - [`Some`] of the constructed path.
    /// - [`None`] if a parameter has no value in `parameters`, or the pattern contains a
    ///   catch-all segment (there is nothing to substitute for it).
    ///
    /// # Panic
    /// - In debug builds, when the release build would return [`None`].
    #[must_use]
    pub(crate) fn construct(&self, parameters: &[(&'static str, String)]) -> Option<String> {
        let mut path = String::from("/");

        for segment in &self.segments {
            match segment {
                PatternSegment::Static(value) => path = format!("{path}{value}/"),
                PatternSegment::Parameter(key) => {
                    let value = match parameters.iter().find(|(k, _)| k == key) {
                        Some((_, value)) => encode(value).into_owned(),
                        None => {
                            error!(r#"no value for parameter "{key}", cannot construct path"#);
                            #[cfg(debug_assertions)]
                            panic!(r#"no value for parameter "{key}""#);
                            #[cfg(not(debug_assertions))]
                            return None;
                        }
                    };
                    path = format!("{path}{value}/");
                }
                PatternSegment::CatchAll => {
                    error!(
                        r#"cannot construct a path from a catch-all pattern: "{raw}""#,
                        raw = self.raw
                    );
                    #[cfg(debug_assertions)]
                    panic!(
                        r#"cannot construct a path from a catch-all pattern: "{raw}""#,
                        raw = self.raw
                    );
                    #[cfg(not(debug_assertions))]
                    return None;
                }
            }
        }

        Some(path)
    }

    /// Whether the pattern is a lone catch-all, matching every possible path.
    #[must_use]
    pub(crate) fn is_universal(&self) -> bool {
        matches!(self.segments.as_slice(), [PatternSegment::CatchAll])
    }

    /// Whether any segment of the pattern is a catch-all.
    #[must_use]
    pub(crate) fn has_catch_all(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, PatternSegment::CatchAll))
    }
}

/// Percent-decode a path segment, falling back to the raw value.
fn decode_segment(value: &str) -> String {
    match decode(value) {
        Ok(value) => value.into_owned(),
        Err(_) => {
            error!(r#"failed to decode path segment, using it raw: "{value}""#);
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root() {
        let pattern = Pattern::parse("/");

        assert!(pattern.segments.is_empty());
    }

    #[test]
    fn parse_static_and_parameter() {
        let pattern = Pattern::parse("/recipe/:id");

        assert_eq!(
            pattern.segments,
            vec![
                PatternSegment::Static("recipe"),
                PatternSegment::Parameter("id")
            ]
        );
    }

    #[test]
    fn parse_catch_all() {
        let pattern = Pattern::parse("/*");

        assert!(pattern.is_universal());
        assert!(pattern.has_catch_all());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = r#"pattern must be absolute (start with "/"): "recipe""#]
    fn parse_relative_panics_in_debug() {
        let _ = Pattern::parse("recipe");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = r#"parameter segment without a name: "/recipe/:""#]
    fn parse_unnamed_parameter_panics_in_debug() {
        let _ = Pattern::parse("/recipe/:");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = r#"catch-all must be the final segment: "/*/recipe""#]
    fn parse_inner_catch_all_panics_in_debug() {
        let _ = Pattern::parse("/*/recipe");
    }

    #[test]
    fn matches_root() {
        let pattern = Pattern::parse("/");

        assert_eq!(pattern.matches("/"), Some(BTreeMap::new()));
        assert_eq!(pattern.matches(""), None);
        assert_eq!(pattern.matches("/recipe"), None);
    }

    #[test]
    fn matches_captures_parameters() {
        let pattern = Pattern::parse("/recipe/:id");

        let parameters = pattern.matches("/recipe/42").unwrap();
        assert_eq!(parameters.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn matches_decodes_values() {
        let pattern = Pattern::parse("/recipe/:id");

        let parameters = pattern.matches("/recipe/b%C3%A9arnaise").unwrap();
        assert_eq!(parameters.get("id").map(String::as_str), Some("béarnaise"));
    }

    #[test]
    fn matches_rejects_empty_parameter() {
        let pattern = Pattern::parse("/recipe/:id");

        assert_eq!(pattern.matches("/recipe/"), None);
        assert_eq!(pattern.matches("/recipe//"), None);
    }

    #[test]
    fn matches_ignores_one_trailing_slash() {
        let pattern = Pattern::parse("/recipe/:id");

        assert!(pattern.matches("/recipe/42/").is_some());
    }

    #[test]
    fn matches_universal_catch_all() {
        let pattern = Pattern::parse("/*");

        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("").is_some());
        assert!(pattern.matches("/some/deep/path").is_some());
    }

    #[test]
    fn matches_rejects_longer_paths() {
        let pattern = Pattern::parse("/recipe/:id");

        assert_eq!(pattern.matches("/recipe/42/reviews"), None);
    }

    #[test]
    fn construct_static() {
        let pattern = Pattern::parse("/test/nest");

        assert_eq!(pattern.construct(&[]), Some(String::from("/test/nest/")));
    }

    #[test]
    fn construct_encodes_parameters() {
        let pattern = Pattern::parse("/recipe/:id");

        assert_eq!(
            pattern.construct(&[("id", String::from("béarnaise"))]),
            Some(String::from("/recipe/b%C3%A9arnaise/"))
        );
    }

    #[test]
    fn construct_root() {
        let pattern = Pattern::parse("/");

        assert_eq!(pattern.construct(&[]), Some(String::from("/")));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = r#"no value for parameter "id""#]
    fn construct_missing_parameter_panics_in_debug() {
        let _ = Pattern::parse("/recipe/:id").construct(&[]);
    }
}
