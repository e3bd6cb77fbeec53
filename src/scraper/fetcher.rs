use crate::config::AppConfig;
use crate::model::FetchError;
use crate::scraper::traits::PageFetcher;

use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{info, warn};

/// Plain GET fetcher. Redirects are followed by hand so the hop count
/// stays under our control.
pub struct HttpFetcher {
    client: Client,
    max_redirects: usize,
}

impl HttpFetcher {
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        max_redirects: usize,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            max_redirects,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.user_agent, config.timeout(), config.max_redirects)
    }
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e.to_string())
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut current =
            Url::parse(url).map_err(|e| FetchError::Transport(format!("{}: {}", url, e)))?;
        let mut redirects = 0;

        loop {
            let response = self
                .client
                .get(current.clone())
                .send()
                .await
                .map_err(classify)?;
            let status = response.status();

            if status.is_redirection() {
                if let Some(location) = response.headers().get(LOCATION) {
                    if redirects >= self.max_redirects {
                        return Err(FetchError::TooManyRedirects(redirects));
                    }
                    let location = location
                        .to_str()
                        .map_err(|_| FetchError::InvalidRedirect(format!("{:?}", location)))?;
                    let next = current
                        .join(location)
                        .map_err(|_| FetchError::InvalidRedirect(location.to_string()))?;
                    info!("↪️ {} redirected to {}", status, next);
                    current = next;
                    redirects += 1;
                    continue;
                }
            }

            if !status.is_success() {
                warn!("Unexpected status {} from {}", status, current);
            }
            return response.text().await.map_err(classify);
        }
    }
}
