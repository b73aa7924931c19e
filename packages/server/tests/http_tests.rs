//! Router-level tests for the form-handling HTTP surface
//!
//! Drives the assembled app against mock collaborators and asserts the
//! HTTP mapping: redirects as 303, validation failures as 422 JSON, rejected
//! logins as 401 with the sentinel body, and the authorization middleware
//! bouncing unauthenticated dashboard requests to the login page.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::{harness, with_identity, with_store, TestDeps};
use dashboard_core::domains::auth::Session;
use dashboard_core::kernel::test_dependencies::{MockIdentityProvider, MockInvoiceStore};
use dashboard_core::server::build_app_with_deps;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

// The pool is lazy: nothing in these tests issues a statement against it,
// so no database is needed.
fn app(t: &TestDeps) -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unreachable")
        .unwrap();
    build_app_with_deps(pool, Arc::new(t.deps.clone()))
}

fn form_request(path: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn signed_in_token(t: &TestDeps) -> String {
    t.deps
        .sessions
        .create_session(Session {
            user_id: Uuid::new_v4(),
            email: "user@acme.test".to_string(),
            created_at: chrono::Utc::now(),
        })
        .await
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn unauthenticated_dashboard_requests_are_redirected_to_login() {
    let t = harness();

    let response = app(&t)
        .oneshot(form_request(
            "/dashboard/invoices",
            "customerId=c1&amount=45.50&status=pending",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    assert_eq!(t.invoices.statement_count(), 0);
}

#[tokio::test]
async fn valid_create_submission_redirects_to_the_listing() {
    let t = harness();
    let token = signed_in_token(&t).await;

    let response = app(&t)
        .oneshot(form_request(
            "/dashboard/invoices",
            "customerId=c1&amount=45.50&status=pending",
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/dashboard/invoices");
    assert_eq!(t.invoices.inserted().len(), 1);
    assert!(t.view_cache.was_revalidated("/dashboard/invoices"));
}

#[tokio::test]
async fn invalid_submission_returns_422_with_field_errors() {
    let t = harness();
    let token = signed_in_token(&t).await;

    let response = app(&t)
        .oneshot(form_request(
            "/dashboard/invoices",
            "customerId=c1&amount=0&status=pending",
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"]["amount"][0],
        "Please enter an amount greater than $0."
    );
    assert_eq!(json["message"], "Missing Fields. Failed to Create Invoice.");
    assert_eq!(t.invoices.statement_count(), 0);
}

#[tokio::test]
async fn store_failure_maps_to_500_with_the_static_message() {
    let t = with_store(MockInvoiceStore::new().failing());
    let token = signed_in_token(&t).await;

    let response = app(&t)
        .oneshot(form_request(
            "/dashboard/invoices",
            "customerId=c1&amount=45.50&status=pending",
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Database Error: Failed to Create Invoice.");
}

#[tokio::test]
async fn delete_stays_on_page_with_200() {
    let t = harness();
    let token = signed_in_token(&t).await;

    let response = app(&t)
        .oneshot(form_request(
            "/dashboard/invoices/delete",
            "id=inv1",
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Deleted Invoice.");
}

#[tokio::test]
async fn rejected_login_returns_401_with_the_sentinel_body() {
    let t = with_identity(MockIdentityProvider::rejecting());

    let response = app(&t)
        .oneshot(form_request(
            "/login",
            "email=user%40acme.test&password=wrong",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], &b"CredentialSignin"[..]);
}

#[tokio::test]
async fn successful_login_returns_the_session_token() {
    let t = with_identity(MockIdentityProvider::accepting("token-1"));

    let response = app(&t)
        .oneshot(form_request(
            "/login",
            "email=user%40acme.test&password=hunter2",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["token"], "token-1");
}

#[tokio::test]
async fn signed_in_users_are_bounced_off_the_login_page() {
    let t = harness();
    let token = signed_in_token(&t).await;

    let response = app(&t)
        .oneshot(form_request(
            "/login",
            "email=user%40acme.test&password=hunter2",
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/dashboard");
}
