use log::error;

use crate::{navigation::Query, route_definition::RouteTable};

/// Constructs a path for named navigation.
///
/// # Parameters
/// - `name`: the name of the route to navigate to
/// - `parameters`: values for the parameters the target routes pattern captures
/// - `query`: the query to append to the path
/// - `routes`: the table the name is looked up in
///
/// # Return values
/// - [`Some`] if the path could be constructed.
/// - [`None`] if no route has the `name`, or a required parameter was not provided.
///
/// # Panic
/// - In debug builds, when the release build would return [`None`].
#[must_use]
pub(crate) fn construct_named_path<C>(
    name: &'static str,
    parameters: &[(&'static str, String)],
    query: &Query,
    routes: &RouteTable<C>,
) -> Option<String> {
    let route = match routes.route_by_name(name) {
        Some(route) => route,
        None => {
            error!(r#"no route for name "{name}""#);
            #[cfg(debug_assertions)]
            panic!(r#"no route for name "{name}""#);
            #[cfg(not(debug_assertions))]
            return None;
        }
    };

    let mut path = route.pattern().construct(parameters)?;

    match query {
        Query::None => {}
        Query::Raw(qs) => {
            if qs.is_empty() {
                // do nothing
            } else if qs.starts_with('?') {
                path = format!("{path}{qs}");
            } else {
                path = format!("{path}?{qs}");
            }
        }
        Query::Pairs(pairs) => {
            if let Ok(qs) = serde_urlencoded::to_string(pairs) {
                path = format!("{path}?{qs}");
            }
        }
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route_definition::{Route, RouteTable};

    #[test]
    fn named_path_fixed() {
        assert_eq!(
            Some(String::from("/test/nest/")),
            construct_named_path("fixed", &[], &Query::None, &test_routes())
        );
    }

    #[test]
    fn named_path_parameters() {
        assert_eq!(
            Some(String::from("/test/value/")),
            construct_named_path(
                "parameter",
                &[("para", String::from("value"))],
                &Query::None,
                &test_routes()
            )
        );
    }

    #[test]
    fn named_path_root() {
        assert_eq!(
            Some(String::from("/")),
            construct_named_path("root", &[], &Query::None, &test_routes())
        );
    }

    #[test]
    fn named_path_query_with_marker() {
        assert_eq!(
            Some(String::from("/test/nest/?query=works")),
            construct_named_path(
                "fixed",
                &[],
                &Query::Raw(String::from("?query=works")),
                &test_routes()
            )
        );
    }

    #[test]
    fn named_path_query_without_marker() {
        assert_eq!(
            Some(String::from("/test/nest/?query=works")),
            construct_named_path(
                "fixed",
                &[],
                &Query::Raw(String::from("query=works")),
                &test_routes()
            )
        );
    }

    #[test]
    fn named_path_query_as_pairs() {
        assert_eq!(
            Some(String::from("/test/nest/?query=works")),
            construct_named_path(
                "fixed",
                &[],
                &Query::Pairs(vec![(String::from("query"), String::from("works"))]),
                &test_routes()
            )
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = r#"no route for name "invalid""#]
    fn named_path_not_found_panics_in_debug() {
        let _ = construct_named_path("invalid", &[], &Query::None, &test_routes());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = r#"no value for parameter "para""#]
    fn named_path_missing_parameter_panics_in_debug() {
        let _ = construct_named_path("parameter", &[], &Query::None, &test_routes());
    }

    fn test_routes() -> RouteTable<()> {
        RouteTable::new(vec![
            Route::page("/", "root", ()),
            Route::page("/test/nest", "fixed", ()),
            Route::page("/test/:para", "parameter", ()),
            Route::page("/*", "fallback", ()),
        ])
    }
}
