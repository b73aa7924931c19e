// TestDependencies - mock implementations for testing
//
// Provides spy collaborators that can be injected into ServerDeps for tests.
// Each mock records the calls it receives so tests can assert on exactly what
// was issued (or that nothing was).

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseIdentityProvider, BaseInvoiceStore, BaseViewCache, ServerDeps};
use crate::common::FormData;
use crate::domains::auth::{SessionStore, SessionToken, SignInError};
use crate::domains::invoices::models::{InvoiceUpdate, NewInvoice};

// =============================================================================
// Mock Invoice Store
// =============================================================================

#[derive(Default)]
pub struct MockInvoiceStore {
    inserts: Arc<Mutex<Vec<NewInvoice>>>,
    updates: Arc<Mutex<Vec<InvoiceUpdate>>>,
    deletes: Arc<Mutex<Vec<String>>>,
    failing: bool,
}

impl MockInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every statement fail, as if the database rejected it
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn inserted(&self) -> Vec<NewInvoice> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<InvoiceUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }

    /// Total statements issued across all three operations
    pub fn statement_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
            + self.updates.lock().unwrap().len()
            + self.deletes.lock().unwrap().len()
    }

    fn check_failure(&self) -> Result<()> {
        if self.failing {
            Err(anyhow::anyhow!("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BaseInvoiceStore for MockInvoiceStore {
    async fn insert(&self, new_invoice: &NewInvoice) -> Result<()> {
        self.check_failure()?;
        self.inserts.lock().unwrap().push(new_invoice.clone());
        Ok(())
    }

    async fn update(&self, update: &InvoiceUpdate) -> Result<()> {
        self.check_failure()?;
        self.updates.lock().unwrap().push(update.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.check_failure()?;
        self.deletes.lock().unwrap().push(id.to_string());
        Ok(())
    }
}

// =============================================================================
// Mock View Cache
// =============================================================================

#[derive(Default)]
pub struct MockViewCache {
    revalidations: Arc<Mutex<Vec<String>>>,
}

impl MockViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revalidated(&self) -> Vec<String> {
        self.revalidations.lock().unwrap().clone()
    }

    pub fn was_revalidated(&self, path: &str) -> bool {
        self.revalidations.lock().unwrap().iter().any(|p| p == path)
    }
}

#[async_trait]
impl BaseViewCache for MockViewCache {
    async fn revalidate(&self, path: &str) {
        self.revalidations.lock().unwrap().push(path.to_string());
    }
}

// =============================================================================
// Mock Identity Provider
// =============================================================================

enum SignInBehavior {
    Accept(SessionToken),
    Reject,
    Fail(String),
}

pub struct MockIdentityProvider {
    behavior: SignInBehavior,
    calls: Arc<Mutex<Vec<(String, FormData)>>>,
}

impl MockIdentityProvider {
    /// Provider that accepts any credentials and returns `token`
    pub fn accepting(token: &str) -> Self {
        Self {
            behavior: SignInBehavior::Accept(token.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider that rejects every sign-in as bad credentials
    pub fn rejecting() -> Self {
        Self {
            behavior: SignInBehavior::Reject,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider that fails with an unrelated error
    pub fn erroring(message: &str) -> Self {
        Self {
            behavior: SignInBehavior::Fail(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get all sign-in calls with their method tag and submitted fields
    pub fn calls(&self) -> Vec<(String, FormData)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseIdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, method: &str, form: &FormData) -> Result<SessionToken, SignInError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), form.clone()));

        match &self.behavior {
            SignInBehavior::Accept(token) => Ok(token.clone()),
            SignInBehavior::Reject => Err(SignInError::InvalidCredentials),
            SignInBehavior::Fail(message) => {
                Err(SignInError::Other(anyhow::anyhow!("{}", message)))
            }
        }
    }
}

// =============================================================================
// Test ServerDeps builder
// =============================================================================

/// Assemble ServerDeps from mock collaborators, keeping handles to the spies
pub fn mock_deps(
    invoices: Arc<MockInvoiceStore>,
    view_cache: Arc<MockViewCache>,
    identity: Arc<MockIdentityProvider>,
) -> ServerDeps {
    ServerDeps::new(invoices, view_cache, identity, Arc::new(SessionStore::new()))
}
