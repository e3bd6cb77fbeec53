use crate::model::{PersistedStatus, StorageError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The status file: one JSON object, replaced wholesale on every save.
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored record. Field types are checked; absent fields
    /// take their empty value.
    pub fn read(&self) -> Result<PersistedStatus, StorageError> {
        let content = fs::read_to_string(&self.path)?;
        let status: PersistedStatus = serde_json::from_str(&content)?;
        Ok(status)
    }

    /// Best-effort read: a missing or malformed file is an empty record.
    pub fn load(&self) -> PersistedStatus {
        match self.read() {
            Ok(status) => status,
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No status file at {}, starting fresh", self.path.display());
                PersistedStatus::default()
            }
            Err(e) => {
                warn!("Ignoring unreadable status file {}: {}", self.path.display(), e);
                PersistedStatus::default()
            }
        }
    }

    /// Overwrites the file with pretty JSON (2-space indent) and a trailing newline.
    pub fn save(&self, status: &PersistedStatus) -> Result<(), StorageError> {
        let mut data = serde_json::to_string_pretty(status)?;
        data.push('\n');
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> PersistedStatus {
        PersistedStatus {
            uniopen_icash_full: true,
            uniopen_icash_msg: "2026年2月 icash Pay 4%加碼已額滿".to_string(),
            uniopen_icash_date: "2026年2月活動額滿".to_string(),
            updated: "2026-02-10".to_string(),
        }
    }

    #[test]
    fn save_then_load_gives_same_record() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("promo_status.json"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn saved_file_layout() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("promo_status.json"));
        let status = PersistedStatus {
            updated: "2026-03-01".to_string(),
            ..PersistedStatus::default()
        };

        store.save(&status).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "{\n  \"uniopen_icash_full\": false,\n  \"uniopen_icash_msg\": \"\",\n  \"uniopen_icash_date\": \"\",\n  \"updated\": \"2026-03-01\"\n}\n"
        );
    }

    #[test]
    fn missing_file_is_empty_record() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load(), PersistedStatus::default());
    }

    #[test]
    fn corrupt_or_mistyped_file_is_empty_record() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("promo_status.json"));

        for content in [
            "{ truncated",
            r#"{"uniopen_icash_full": "yes", "updated": "2026-02-10"}"#,
            r#"{"uniopen_icash_full": true, "updated": 20260210}"#,
            r#"{"uniopen_icash_full": true, "uniopen_icash_msg": null}"#,
            r#"{"updated": "2026-02-10"}"#,
            r#"[true]"#,
        ] {
            fs::write(store.path(), content).unwrap();
            assert_eq!(store.load(), PersistedStatus::default(), "{}", content);
        }
    }

    #[test]
    fn short_record_fills_missing_strings() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("promo_status.json"));
        fs::write(
            store.path(),
            r#"{"uniopen_icash_full": true, "updated": "2026-02-28", "extra": 1}"#,
        )
        .unwrap();

        let status = store.read().unwrap();
        assert!(status.uniopen_icash_full);
        assert!(status.uniopen_icash_msg.is_empty());
        assert_eq!(status.updated, "2026-02-28");
    }

    #[test]
    fn full_flag_survives_missing_or_odd_updated() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("promo_status.json"));

        for content in [
            r#"{"uniopen_icash_full": true}"#,
            r#"{"uniopen_icash_full": true, "updated": "February"}"#,
        ] {
            fs::write(store.path(), content).unwrap();
            let status = store.load();
            assert!(status.uniopen_icash_full, "{}", content);
        }
        assert_eq!(store.load().updated, "February");
    }
}
