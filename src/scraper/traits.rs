use crate::model::FetchError;

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the body of the page at `url`, after any redirects.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
