use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::domains::auth::{authorized, AuthDecision, Session, SessionStore};
use crate::server::app::AppState;

/// Where denied requests are sent
const LOGIN_PATH: &str = "/login";

/// Middleware enforcing the authorization policy on every request
///
/// This middleware:
/// 1. Extracts the session token from the Authorization header
/// 2. Looks the session up in the SessionStore
/// 3. Asks the policy for a verdict on (session presence, path)
/// 4. Enforces it: Deny becomes a redirect to the login page
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = extract_session(request.headers(), &state.deps.sessions).await;

    match authorized(session.is_some(), request.uri().path()) {
        AuthDecision::Allow => {
            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }
            next.run(request).await
        }
        AuthDecision::Deny => Redirect::to(LOGIN_PATH).into_response(),
        AuthDecision::RedirectTo(url) => Redirect::to(&url).into_response(),
    }
}

/// Extract and verify the session from the request
async fn extract_session(
    headers: &axum::http::HeaderMap,
    sessions: &SessionStore,
) -> Option<Session> {
    let auth_header = headers.get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Remove "Bearer " prefix; owned so no request borrow is held across the
    // await (axum's Body is !Sync, which would make the future !Send)
    let token = auth_str
        .strip_prefix("Bearer ")
        .unwrap_or(auth_str)
        .to_string();

    sessions.get_session(&token).await
}
