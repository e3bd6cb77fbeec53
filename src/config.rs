use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_TARGET_URL: &str = "https://www.icashpay.com.tw/advertMessage/view/id/1982";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub target_url: String,
    pub status_file: PathBuf,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_redirects: usize,
    pub cache_prefix: String,
    pub cache_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            status_file: PathBuf::from("promo_status.json"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 15,
            max_redirects: 10,
            cache_prefix: "creditcard".to_string(),
            cache_version: "v125.5".to_string(),
        }
    }
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn cache_name(&self) -> String {
        format!("{}-{}", self.cache_prefix, self.cache_version)
    }
}

/// Loads the config file. A missing file means defaults; a broken one is an error.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path().join("config.json")).unwrap();
        assert_eq!(config.target_url, DEFAULT_TARGET_URL);
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.cache_name(), "creditcard-v125.5");
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "target_url": "http://127.0.0.1:9/page", "max_redirects": 3 }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.target_url, "http://127.0.0.1:9/page");
        assert_eq!(config.max_redirects, 3);
        assert_eq!(config.status_file, PathBuf::from("promo_status.json"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }
}
