use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::traits::BaseViewCache;

/// In-process stale-path registry
///
/// The rendering layer checks [`take_stale`](Self::take_stale) before serving
/// a cached view; actions call `revalidate` after confirmed writes.
pub struct InMemoryViewCache {
    stale: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryViewCache {
    pub fn new() -> Self {
        Self {
            stale: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Consume the stale mark for a path, returning whether it was set
    pub async fn take_stale(&self, path: &str) -> bool {
        let mut stale = self.stale.write().await;
        stale.remove(path)
    }
}

impl Default for InMemoryViewCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseViewCache for InMemoryViewCache {
    async fn revalidate(&self, path: &str) {
        let mut stale = self.stale.write().await;
        stale.insert(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn revalidated_paths_are_marked_stale_once() {
        let cache = InMemoryViewCache::new();
        cache.revalidate("/dashboard/invoices").await;
        assert!(cache.take_stale("/dashboard/invoices").await);
        assert!(!cache.take_stale("/dashboard/invoices").await);
    }
}
