use crate::application::registry::GatewayRegistry;
use crate::domain::gateway::{GatewayEntry, GatewayRef};
use crate::domain::ports::GatewayProvider;
use crate::error::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe handle to a [`GatewayRegistry`].
///
/// Uses `Arc<RwLock<GatewayRegistry>>` so cloned handles share one set of slots.
/// Already-resolved gateways are served under the read lock; building a slot takes the
/// write lock and re-checks it first, so concurrent callers never construct the same
/// gateway twice.
#[derive(Clone)]
pub struct SharedGatewayRegistry {
    inner: Arc<RwLock<GatewayRegistry>>,
}

impl SharedGatewayRegistry {
    pub fn new(registry: GatewayRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Replaces every slot. Waits for in-flight lookups to finish.
    pub async fn set_gateways<I, E>(&self, entries: I)
    where
        I: IntoIterator<Item = (String, E)>,
        E: Into<GatewayEntry>,
    {
        self.inner.write().await.set_gateways(entries);
    }

    pub async fn is_resolved(&self, id: &str) -> bool {
        self.inner.read().await.is_resolved(id)
    }

    async fn cached(&self, id: &str) -> Option<GatewayRef> {
        self.inner.read().await.peek(id)
    }
}

#[async_trait]
impl GatewayProvider for SharedGatewayRegistry {
    async fn has_gateway(&self, id: &str) -> bool {
        self.inner.read().await.has_gateway(id)
    }

    async fn get_gateway(&self, id: &str) -> Result<GatewayRef> {
        if let Some(gateway) = self.cached(id).await {
            return Ok(gateway);
        }
        // get_gateway re-checks the slot under the write lock
        self.inner.write().await.get_gateway(id)
    }

    async fn get_gateways(&self) -> Result<IndexMap<String, GatewayRef>> {
        self.inner.write().await.get_gateways()
    }
}
