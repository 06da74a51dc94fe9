//! Route table and navigation decisions.

/// Access class of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Requires an authenticated session.
    Protected,
    /// Only reachable while signed out (login/signup).
    GuestOnly,
    /// No restriction.
    Public,
}

/// A static route table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Route path as registered.
    pub path: &'static str,
    /// Access class.
    pub access: RouteAccess,
}

/// Where unauthenticated sellers are redirected.
pub const LOGIN_ROUTE: &str = "/login";
/// Where authenticated sellers are redirected away from guest routes.
pub const HOME_ROUTE: &str = "/";

/// Static route configuration. Not mutated at runtime.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/login",
        access: RouteAccess::GuestOnly,
    },
    RouteDescriptor {
        path: "/signup",
        access: RouteAccess::GuestOnly,
    },
    RouteDescriptor {
        path: "/",
        access: RouteAccess::Protected,
    },
    RouteDescriptor {
        path: "/payments",
        access: RouteAccess::Protected,
    },
    RouteDescriptor {
        path: "/orders",
        access: RouteAccess::Protected,
    },
];

/// Looks up the access class for a path. Unknown paths are public.
#[must_use]
pub fn route_access(path: &str) -> RouteAccess {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map_or(RouteAccess::Public, |route| route.access)
}

/// Outcome of a navigation-guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested route.
    Allow,
    /// Redirect to the given path instead.
    RedirectTo(String),
}

impl GuardDecision {
    /// Pure guard rule, evaluated before each route transition.
    ///
    /// Protected routes require authentication, guest-only routes reject
    /// authenticated sessions, everything else is allowed.
    #[must_use]
    pub fn evaluate(access: RouteAccess, is_authenticated: bool) -> Self {
        match access {
            RouteAccess::Protected if !is_authenticated => {
                Self::RedirectTo(LOGIN_ROUTE.to_owned())
            }
            RouteAccess::GuestOnly if is_authenticated => Self::RedirectTo(HOME_ROUTE.to_owned()),
            RouteAccess::Protected | RouteAccess::GuestOnly | RouteAccess::Public => Self::Allow,
        }
    }
}
