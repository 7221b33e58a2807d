use std::fmt::Debug;

use crate::navigation::NavigationTarget;

/// The content of a [`Route`](super::Route).
#[derive(Clone)]
pub enum RouteContent<C> {
    /// A page to hand to the rendering layer.
    Page(C),
    /// Causes a redirect when the route is matched.
    ///
    /// Redirects are performed as a _replace_ operation. This means that the original path won't
    /// be part of the history.
    ///
    /// Be careful to not create an infinite loop. The router does not detect them.
    Redirect(NavigationTarget),
}

impl<C> RouteContent<C> {
    /// Returns `true` if the route content is [`Redirect`].
    ///
    /// [`Redirect`]: RouteContent::Redirect
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

// the page type is not required to implement Debug
impl<C> Debug for RouteContent<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(_) => f.debug_tuple("Page").finish(),
            Self::Redirect(target) => f.debug_tuple("Redirect").field(target).finish(),
        }
    }
}
