//! The route surface of the recipe application.
//!
//! Three pages: the landing page, the recipe detail page (parameterized by the recipe id), and
//! the not-found fallback.

use std::sync::Arc;

use crate::{
    route_definition::{Route, RouteTable},
    router::Router,
    router_cfg::{create_router, RouterConfig},
    service::{RouterService, SubscriberId},
};

/// The pages of the recipe application.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Page {
    /// The landing page, listing recipes.
    Home,
    /// The detail page for a single recipe. The recipe id is available as the `id` parameter.
    RecipeDetail,
    /// Shown for every path no other route matches.
    NotFound,
}

/// The route table of the recipe application.
///
/// Static patterns come before parameterized ones and the catch-all is last; anything else
/// would shadow legitimate routes.
#[must_use]
pub fn routes() -> RouteTable<Page> {
    RouteTable::new(vec![
        Route::page("/", "Home", Page::Home),
        Route::page("/recipe/:id", "RecipeDetail", Page::RecipeDetail),
        Route::page("/*", "NotFound", Page::NotFound),
    ])
}

/// The base path the app is served under, for deployments not hosted at a domain root.
///
/// Taken from the `BASE_URL` environment variable at compile time.
#[must_use]
pub fn base_url() -> Option<String> {
    option_env!("BASE_URL").map(|prefix| prefix.to_string())
}

/// Construct the application router.
///
/// `update` is called with a subscriber id whenever the active route changes; the rendering
/// root uses this to re-mount the page region. The returned service and handle live for the
/// lifetime of the application.
#[must_use]
pub fn create_recipe_router(
    update: Arc<dyn Fn(SubscriberId)>,
) -> (RouterService<Page>, Router<Page>) {
    let mut cfg = RouterConfig::new(routes()).on_update(update);
    if let Some(prefix) = base_url() {
        cfg = cfg.prefix(prefix);
    }

    create_router(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_declaration_order() {
        let names: Vec<_> = routes().iter().map(Route::name).collect();

        assert_eq!(names, vec!["Home", "RecipeDetail", "NotFound"]);
    }

    #[test]
    fn create_recipe_router_starts_unrouted() {
        let (_service, router) = create_recipe_router(Arc::new(|_| {}));

        assert_eq!(router.state().page, None);
    }
}
