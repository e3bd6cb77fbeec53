use crate::config::AppConfig;
use crate::model::OfflineError;
use crate::offline::storage::CacheStorage;
use crate::scraper::PageFetcher;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Parsed,
    Installed,
    Activated,
}

/// Network-first request handler backed by versioned caches. Responses are
/// never written here; whatever filled the caches earlier is the fallback.
pub struct NetworkFirstCache {
    cache_name: String,
    storage: Arc<CacheStorage>,
    network: Arc<dyn PageFetcher>,
    state: RwLock<WorkerState>,
}

impl NetworkFirstCache {
    pub fn new(
        cache_name: impl Into<String>,
        storage: Arc<CacheStorage>,
        network: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            cache_name: cache_name.into(),
            storage,
            network,
            state: RwLock::new(WorkerState::Parsed),
        }
    }

    pub fn from_config(
        config: &AppConfig,
        storage: Arc<CacheStorage>,
        network: Arc<dyn PageFetcher>,
    ) -> Self {
        Self::new(config.cache_name(), storage, network)
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    pub async fn state(&self) -> WorkerState {
        *self.state.read().await
    }

    /// Install and skip waiting: nothing is pre-cached.
    pub async fn install(&self) -> WorkerState {
        let mut state = self.state.write().await;
        *state = WorkerState::Installed;
        info!("Worker {} installed, skipping wait", self.cache_name);
        *state
    }

    /// Drops every cache but the current one and takes over clients.
    /// Returns the names that were deleted.
    pub async fn activate(&self) -> Vec<String> {
        let mut deleted = Vec::new();
        for name in self.storage.keys().await {
            if name != self.cache_name && self.storage.delete(&name).await {
                info!("Deleted stale cache {}", name);
                deleted.push(name);
            }
        }
        *self.state.write().await = WorkerState::Activated;
        info!("Worker {} activated", self.cache_name);
        deleted
    }

    pub async fn handle_fetch(&self, url: &str) -> Result<String, OfflineError> {
        if self.state().await != WorkerState::Activated {
            debug!("Worker not active, passing {} through", url);
            return Ok(self.network.fetch(url).await?);
        }

        match self.network.fetch(url).await {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!("Network failed for {}: {}, trying cache", url, e);
                self.storage
                    .match_request(url)
                    .await
                    .ok_or(OfflineError::NotCached {
                        url: url.to_string(),
                        source: e,
                    })
            }
        }
    }
}
