// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Actions (like
// "create an invoice") are domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseInvoiceStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::FormData;
use crate::domains::auth::{SessionToken, SignInError};
use crate::domains::invoices::models::{InvoiceUpdate, NewInvoice};

// =============================================================================
// Invoice Store Trait (Infrastructure - persistence)
// =============================================================================

/// Write access to the invoices table. One statement per call; the store is
/// responsible for per-statement atomicity.
#[async_trait]
pub trait BaseInvoiceStore: Send + Sync {
    /// INSERT a new invoice row
    async fn insert(&self, invoice: &NewInvoice) -> Result<()>;

    /// UPDATE the row matching `update.id`
    async fn update(&self, update: &InvoiceUpdate) -> Result<()>;

    /// DELETE the row matching `id`
    async fn delete(&self, id: &str) -> Result<()>;
}

// =============================================================================
// View Cache Trait (Infrastructure - cached-view invalidation)
// =============================================================================

/// Marks cached renderings of a logical path stale so they are recomputed on
/// next access. Fire-and-forget; only ever called after a confirmed write.
#[async_trait]
pub trait BaseViewCache: Send + Sync {
    async fn revalidate(&self, path: &str);
}

// =============================================================================
// Identity Provider Trait (Infrastructure - credential sign-in)
// =============================================================================

/// External identity provider. On success it establishes a session and
/// returns the token; bad credentials surface as
/// [`SignInError::InvalidCredentials`].
#[async_trait]
pub trait BaseIdentityProvider: Send + Sync {
    /// Sign in with the given method tag ("credentials") and the full set of
    /// submitted fields
    async fn sign_in(&self, method: &str, form: &FormData) -> Result<SessionToken, SignInError>;
}
