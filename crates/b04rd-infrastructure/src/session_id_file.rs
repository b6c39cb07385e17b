//! File-backed session id store.
//!
//! The browser client kept the session id under a single localStorage key;
//! here it is a single file under the per-user config directory
//! (`~/.config/1337b04rd/session_id` on Linux).

use async_trait::async_trait;
use b04rd_core::error::{BoardError, Result};
use b04rd_core::session::SessionIdStore;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "1337b04rd";
const SESSION_ID_FILE: &str = "session_id";

/// Stores the current session id as a single file.
#[derive(Debug, Clone)]
pub struct FileSessionIdStore {
    path: PathBuf,
}

impl FileSessionIdStore {
    /// Creates a store under the platform config directory.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BoardError::storage("cannot determine config directory"))?;
        Ok(Self {
            path: config_dir.join(APP_DIR).join(SESSION_ID_FILE),
        })
    }

    /// Creates a store at an explicit file path. Intended for tests and
    /// embedders with their own directory layout.
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file the id is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionIdStore for FileSessionIdStore {
    async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let id = raw.trim().to_string();
                if id.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(id))
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, id).await?;
        debug!(path = %self.path.display(), "persisted session id");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_is_none_before_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionIdStore::at_path(dir.path().join("session_id"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionIdStore::at_path(dir.path().join("nested").join("session_id"));

        store.save("s-42").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("s-42".to_string()));

        store.save("s-43").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("s-43".to_string()));
    }

    #[tokio::test]
    async fn clear_removes_the_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionIdStore::at_path(dir.path().join("session_id"));

        store.save("s-42").await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);

        // Clearing an already-empty store succeeds.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn whitespace_only_file_counts_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_id");
        tokio::fs::write(&path, "\n").await.unwrap();

        let store = FileSessionIdStore::at_path(&path);
        assert_eq!(store.load().await.unwrap(), None);
    }
}
