//! Invoice form submission handlers
//!
//! Each handler feeds the raw form to its action and maps the ActionResult
//! back onto HTTP: redirects become 303 See Other, validation failures 422,
//! swallowed persistence failures 500, everything else 200 with the state as
//! JSON.

use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::common::FormData;
use crate::domains::invoices::{
    create_invoice, delete_invoice, update_invoice, ActionResult, ActionState,
};
use crate::server::app::AppState;

fn action_response(result: ActionResult) -> Response {
    match result {
        ActionResult::Redirected(path) => Redirect::to(&path).into_response(),
        ActionResult::Completed(state) => {
            let status = if state.errors.is_some() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else if state
                .message
                .as_deref()
                .is_some_and(|m| m.starts_with("Database Error"))
            {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::OK
            };
            (status, Json(state)).into_response()
        }
    }
}

pub async fn create_invoice_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<FormData>,
) -> Response {
    action_response(create_invoice(ActionState::default(), &form, &state.deps).await)
}

pub async fn update_invoice_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<FormData>,
) -> Response {
    action_response(update_invoice(ActionState::default(), &form, &state.deps).await)
}

pub async fn delete_invoice_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<FormData>,
) -> Response {
    action_response(delete_invoice(&form, &state.deps).await)
}
