// One monitoring run: fetch, normalize, match, reconcile, persist.
use crate::analyzer::reconcile;
use crate::config::AppConfig;
use crate::model::{CheckError, RunOutcome};
use crate::normalizer::normalize_html;
use crate::parser::ExhaustedMatcher;
use crate::scraper::PageFetcher;
use crate::storage::StatusStore;
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct PromoChecker {
    target_url: String,
    fetcher: Arc<dyn PageFetcher>,
    matcher: ExhaustedMatcher,
    store: StatusStore,
}

impl PromoChecker {
    pub fn new(config: &AppConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            target_url: config.target_url.clone(),
            fetcher,
            matcher: ExhaustedMatcher::new(),
            store: StatusStore::new(config.status_file.clone()),
        }
    }

    pub async fn run(&self, today: NaiveDate) -> Result<RunOutcome, CheckError> {
        let (year, month) = (today.year(), today.month());
        info!("Checking {}年{}月 exhausted status at {}", year, month, self.target_url);

        let previous = self.store.load();

        let html = match self.fetcher.fetch(&self.target_url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Page fetch failed: {}", e);
                warn!("Keeping {} unchanged", self.store.path().display());
                return Ok(RunOutcome::FetchFailed {
                    reason: e.to_string(),
                });
            }
        };
        info!("Page loaded, {} bytes", html.len());

        let text = normalize_html(&html);
        let announcement = self.matcher.find(&text, year, month)?;
        match &announcement {
            Some(found) => info!("🚫 Exhausted for this month: 「{}」", found),
            None => info!("✅ {}年{}月 not exhausted yet", year, month),
        }

        let result = reconcile(&previous, announcement.as_deref(), today);
        self.store.save(&result.status)?;
        info!("Status: {:?}", result.status);

        Ok(RunOutcome::Updated {
            status: result.status,
            changed: result.changed,
            month_rolled_over: result.month_rolled_over,
        })
    }
}
