// Shared test harness: ServerDeps wired to spy collaborators

use std::sync::Arc;

use dashboard_core::kernel::test_dependencies::{
    mock_deps, MockIdentityProvider, MockInvoiceStore, MockViewCache,
};
use dashboard_core::kernel::ServerDeps;

pub struct TestDeps {
    pub deps: ServerDeps,
    pub invoices: Arc<MockInvoiceStore>,
    pub view_cache: Arc<MockViewCache>,
    pub identity: Arc<MockIdentityProvider>,
}

pub fn harness() -> TestDeps {
    with_store(MockInvoiceStore::new())
}

pub fn with_store(store: MockInvoiceStore) -> TestDeps {
    build(store, MockIdentityProvider::accepting("test-token"))
}

pub fn with_identity(identity: MockIdentityProvider) -> TestDeps {
    build(MockInvoiceStore::new(), identity)
}

fn build(store: MockInvoiceStore, identity: MockIdentityProvider) -> TestDeps {
    let invoices = Arc::new(store);
    let view_cache = Arc::new(MockViewCache::new());
    let identity = Arc::new(identity);
    TestDeps {
        deps: mock_deps(invoices.clone(), view_cache.clone(), identity.clone()),
        invoices,
        view_cache,
        identity,
    }
}
