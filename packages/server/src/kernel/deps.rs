//! Server dependencies for actions (using traits for testability)
//!
//! This module provides the central dependency container handed to all domain
//! actions, plus the production Postgres-backed adapters.

use anyhow::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::common::FormData;
use crate::domains::auth::{Session, SessionStore, SessionToken, SignInError};
use crate::domains::invoices::models::{invoice, InvoiceUpdate, NewInvoice};
use crate::kernel::{BaseIdentityProvider, BaseInvoiceStore, BaseViewCache};

// =============================================================================
// Postgres Invoice Store (implements BaseInvoiceStore trait)
// =============================================================================

/// Invoice store backed by the Postgres pool
pub struct PgInvoiceStore(pub PgPool);

#[async_trait]
impl BaseInvoiceStore for PgInvoiceStore {
    async fn insert(&self, new_invoice: &NewInvoice) -> Result<()> {
        new_invoice.insert(&self.0).await
    }

    async fn update(&self, update: &InvoiceUpdate) -> Result<()> {
        update.apply(&self.0).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        invoice::delete_invoice_row(id, &self.0).await
    }
}

// =============================================================================
// Postgres Credentials Provider (implements BaseIdentityProvider trait)
// =============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password: String,
}

/// Credentials sign-in against the users table.
///
/// Stored passwords are sha256 hex digests; a successful match establishes a
/// session in the shared store.
pub struct PgCredentialsProvider {
    pool: PgPool,
    sessions: Arc<SessionStore>,
}

impl PgCredentialsProvider {
    pub fn new(pool: PgPool, sessions: Arc<SessionStore>) -> Self {
        Self { pool, sessions }
    }
}

#[async_trait]
impl BaseIdentityProvider for PgCredentialsProvider {
    async fn sign_in(&self, method: &str, form: &FormData) -> Result<SessionToken, SignInError> {
        if method != "credentials" {
            return Err(SignInError::Other(anyhow::anyhow!(
                "unsupported sign-in method: {method}"
            )));
        }

        let (Some(email), Some(password)) = (form.get("email"), form.get("password")) else {
            return Err(SignInError::InvalidCredentials);
        };

        let user = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SignInError::Other(e.into()))?
        .ok_or(SignInError::InvalidCredentials)?;

        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        if format!("{:x}", hasher.finalize()) != user.password {
            return Err(SignInError::InvalidCredentials);
        }

        let token = self
            .sessions
            .create_session(Session {
                user_id: user.id,
                email: user.email,
                created_at: chrono::Utc::now(),
            })
            .await;

        Ok(token)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub invoices: Arc<dyn BaseInvoiceStore>,
    pub view_cache: Arc<dyn BaseViewCache>,
    pub identity: Arc<dyn BaseIdentityProvider>,
    pub sessions: Arc<SessionStore>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given collaborators
    pub fn new(
        invoices: Arc<dyn BaseInvoiceStore>,
        view_cache: Arc<dyn BaseViewCache>,
        identity: Arc<dyn BaseIdentityProvider>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            invoices,
            view_cache,
            identity,
            sessions,
        }
    }

    /// Production wiring: Postgres store and credentials provider, in-process
    /// view cache and session store
    pub fn postgres(pool: PgPool) -> Self {
        let sessions = Arc::new(SessionStore::new());
        Self {
            invoices: Arc::new(PgInvoiceStore(pool.clone())),
            view_cache: Arc::new(super::InMemoryViewCache::new()),
            identity: Arc::new(PgCredentialsProvider::new(pool, sessions.clone())),
            sessions,
        }
    }
}
