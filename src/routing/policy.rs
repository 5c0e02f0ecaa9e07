/// Path of the maintenance notice page
pub const MAINTENANCE_PATH: &str = "/maintenance";

/// Landing page, also the target after sign-out
pub const HOME_PATH: &str = "/";

/// Outcome of evaluating the routing policy for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hand the request on to the authentication stage
    Allow,
    /// Short-circuit with a redirect to the given path
    RedirectTo(&'static str),
}

impl RouteDecision {
    /// Label used for metrics and logs
    pub fn label(&self) -> &'static str {
        match self {
            RouteDecision::Allow => "allow",
            RouteDecision::RedirectTo(MAINTENANCE_PATH) => "redirect_maintenance",
            RouteDecision::RedirectTo(_) => "redirect_home",
        }
    }
}

/// Decide what to do with a request given its path and the maintenance flag.
///
/// The maintenance path is compared exactly: no case folding and no
/// trailing-slash stripping, so `/maintenance/` counts as an ordinary path.
pub fn decide(path: &str, maintenance_mode: bool) -> RouteDecision {
    if path == MAINTENANCE_PATH {
        if maintenance_mode {
            return RouteDecision::Allow;
        }
        return RouteDecision::RedirectTo(HOME_PATH);
    }

    if maintenance_mode {
        return RouteDecision::RedirectTo(MAINTENANCE_PATH);
    }

    RouteDecision::Allow
}
