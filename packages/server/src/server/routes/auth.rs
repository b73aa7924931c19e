//! Login form handler

use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::common::FormData;
use crate::domains::auth::{authenticate, AuthOutcome};
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct LoginResponse {
    token: String,
}

/// Credentials sign-in endpoint
///
/// Rejected credentials come back as 401 with the sentinel the login form
/// expects; unexpected provider failures surface as 500.
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<FormData>,
) -> Response {
    match authenticate(None, &form, state.deps.identity.as_ref()).await {
        Ok(AuthOutcome::SignedIn(token)) => Json(LoginResponse { token }).into_response(),
        Ok(AuthOutcome::Rejected(sentinel)) => {
            (StatusCode::UNAUTHORIZED, sentinel).into_response()
        }
        Err(e) => {
            error!("Sign-in failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
