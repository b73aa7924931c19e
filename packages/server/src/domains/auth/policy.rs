//! Request authorization policy
//!
//! A pure predicate over (session presence, request path). The routing layer
//! calls it on every request and enforces the verdict; nothing here holds
//! state, so concurrent calls are trivially safe.

/// Path prefix gated behind a login session
pub const PROTECTED_PREFIX: &str = "/dashboard";

/// Where authenticated users land when they hit a public page
pub const DASHBOARD_HOME: &str = "/dashboard";

/// Verdict for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// Let the request proceed
    Allow,
    /// Block; the caller sends unauthenticated users to the login page
    Deny,
    /// Authenticated user on a public page; send them to the dashboard
    RedirectTo(String),
}

/// Decide whether a request may proceed.
///
/// Dashboard paths require a session. Authenticated users visiting public
/// pages (e.g. the login form) are bounced to the dashboard.
pub fn authorized(session_present: bool, path: &str) -> AuthDecision {
    if path.starts_with(PROTECTED_PREFIX) {
        if session_present {
            AuthDecision::Allow
        } else {
            AuthDecision::Deny
        }
    } else if session_present {
        AuthDecision::RedirectTo(DASHBOARD_HOME.to_string())
    } else {
        AuthDecision::Allow
    }
}
