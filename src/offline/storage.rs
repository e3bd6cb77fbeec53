use std::collections::HashMap;
use tokio::sync::RwLock;

/// Named response caches, kept in creation order so lookups across all of
/// them hit the oldest cache first.
#[derive(Default)]
pub struct CacheStorage {
    caches: RwLock<Vec<(String, HashMap<String, String>)>>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the cache if it does not exist yet.
    pub async fn open(&self, name: &str) {
        let mut caches = self.caches.write().await;
        if !caches.iter().any(|(n, _)| n == name) {
            caches.push((name.to_string(), HashMap::new()));
        }
    }

    pub async fn put(&self, name: &str, url: &str, body: impl Into<String>) {
        let mut caches = self.caches.write().await;
        let index = match caches.iter().position(|(n, _)| n == name) {
            Some(i) => i,
            None => {
                caches.push((name.to_string(), HashMap::new()));
                caches.len() - 1
            }
        };
        caches[index].1.insert(url.to_string(), body.into());
    }

    pub async fn keys(&self) -> Vec<String> {
        self.caches.read().await.iter().map(|(n, _)| n.clone()).collect()
    }

    pub async fn delete(&self, name: &str) -> bool {
        let mut caches = self.caches.write().await;
        let before = caches.len();
        caches.retain(|(n, _)| n != name);
        caches.len() != before
    }

    /// First cached body for `url` in any cache.
    pub async fn match_request(&self, url: &str) -> Option<String> {
        self.caches
            .read()
            .await
            .iter()
            .find_map(|(_, entries)| entries.get(url).cloned())
    }
}
