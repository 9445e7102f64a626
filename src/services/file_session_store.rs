use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{AppError, SessionAttribute};
use crate::ports::SessionStore;

/// Session attributes persisted as JSON on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    attributes: Vec<SessionAttribute>,
}

impl FileSessionStore {
    /// Create a store backed by the given file. The file is created on first write.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store `session.json` inside a state directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SessionFile, AppError> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SessionFile::default());
        }
        // Unreadable state carries no role; the next write replaces it.
        Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
            SessionFile::default()
        }))
    }

    fn write(&self, file: &SessionFile) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(file)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, name: &str, now: DateTime<Utc>) -> Result<Option<String>, AppError> {
        let mut file = self.read()?;
        let before = file.attributes.len();
        file.attributes.retain(|attribute| !attribute.is_expired(now));
        if file.attributes.len() != before {
            debug!(purged = before - file.attributes.len(), "dropping expired session attributes");
            self.write(&file)?;
        }
        Ok(file.attributes.into_iter().find(|a| a.name == name).map(|a| a.value))
    }

    fn set(&self, attribute: SessionAttribute) -> Result<(), AppError> {
        let mut file = self.read()?;
        file.attributes.retain(|existing| existing.name != attribute.name);
        file.attributes.push(attribute);
        self.write(&file)
    }

    fn remove(&self, name: &str) -> Result<(), AppError> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut file = self.read()?;
        file.attributes.retain(|existing| existing.name != name);
        self.write(&file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn role(value: &str, expires_at: DateTime<Utc>) -> SessionAttribute {
        SessionAttribute {
            name: "X-User-Role".into(),
            value: value.into(),
            path: "/".into(),
            expires_at,
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        assert_eq!(store.get("X-User-Role", now()).unwrap(), None);
    }

    #[test]
    fn set_then_get_survives_a_new_handle() {
        let dir = TempDir::new().unwrap();
        FileSessionStore::in_dir(dir.path()).set(role("admin", now() + Duration::days(1))).unwrap();

        let reopened = FileSessionStore::in_dir(dir.path());
        assert_eq!(reopened.get("X-User-Role", now()).unwrap(), Some("admin".to_string()));
    }

    #[test]
    fn set_replaces_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path().join("nested").as_path());
        store.set(role("guest", now() + Duration::days(1))).unwrap();
        store.set(role("admin", now() + Duration::days(1))).unwrap();
        assert_eq!(store.get("X-User-Role", now()).unwrap(), Some("admin".to_string()));
    }

    #[test]
    fn expired_attribute_is_purged_on_read() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        store.set(role("admin", now() + Duration::hours(1))).unwrap();

        assert_eq!(store.get("X-User-Role", now() + Duration::hours(2)).unwrap(), None);
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(!content.contains("admin"));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        store.remove("X-User-Role").unwrap();
        store.set(role("admin", now() + Duration::days(1))).unwrap();
        store.remove("X-User-Role").unwrap();
        store.remove("X-User-Role").unwrap();
        assert_eq!(store.get("X-User-Role", now()).unwrap(), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.get("X-User-Role", now()).unwrap(), None);

        store.set(role("admin", now() + Duration::days(1))).unwrap();
        assert_eq!(store.get("X-User-Role", now()).unwrap(), Some("admin".to_string()));
        store.remove("X-User-Role").unwrap();
        assert_eq!(store.get("X-User-Role", now()).unwrap(), None);
    }

    #[test]
    fn corrupt_file_can_be_removed_from() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        fs::write(store.path(), "[1, 2").unwrap();
        store.remove("X-User-Role").unwrap();
        assert_eq!(store.get("X-User-Role", now()).unwrap(), None);
    }
}
