// Core structs: PersistedStatus, RunOutcome and the error enums
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot of the promotion state as written to the status file.
///
/// Field order matters: it is the key order of the serialized JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedStatus {
    pub uniopen_icash_full: bool,
    #[serde(default)]
    pub uniopen_icash_msg: String,
    #[serde(default)]
    pub uniopen_icash_date: String,
    #[serde(default)]
    pub updated: String,
}

impl PersistedStatus {
    /// `YYYY-MM` prefix of `updated`, or whatever shorter text is there.
    pub fn updated_month(&self) -> &str {
        self.updated.get(..7).unwrap_or(self.updated.as_str())
    }
}

/// Result of one checker run that did not hit a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Updated {
        status: PersistedStatus,
        changed: bool,
        month_rolled_over: bool,
    },
    FetchFailed {
        reason: String,
    },
}

impl RunOutcome {
    /// Value reported as `STATUS_CHANGED=`.
    pub fn changed(&self) -> bool {
        match self {
            RunOutcome::Updated { changed, .. } => *changed,
            RunOutcome::FetchFailed { .. } => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("gave up after {0} redirects")]
    TooManyRedirects(usize),
    #[error("invalid redirect location: {0}")]
    InvalidRedirect(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("month out of range: {0}")]
    InvalidMonth(u32),
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum OfflineError {
    #[error("worker not active, network failed: {0}")]
    Network(#[from] FetchError),
    #[error("network failed and no cached response for {url}: {source}")]
    NotCached {
        url: String,
        #[source]
        source: FetchError,
    },
}

/// Failures that abort a run with a non-zero exit.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
