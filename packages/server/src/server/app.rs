//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{
    create_invoice_handler, delete_invoice_handler, health_handler, login_handler,
    update_invoice_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// Build the application router with production wiring
pub fn build_app(pool: PgPool) -> Router {
    let deps = Arc::new(ServerDeps::postgres(pool.clone()));
    build_app_with_deps(pool, deps)
}

/// Build the router around explicit dependencies (tests inject mocks here)
pub fn build_app_with_deps(pool: PgPool, deps: Arc<ServerDeps>) -> Router {
    let state = AppState {
        db_pool: pool,
        deps,
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/login", post(login_handler))
        .route("/dashboard/invoices", post(create_invoice_handler))
        .route("/dashboard/invoices/update", post(update_invoice_handler))
        .route("/dashboard/invoices/delete", post(delete_invoice_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
