//! Storage backend keeping each session as a YAML file
//!
//! Sessions are stored as `<session-id>.session.yaml` in the configured
//! directory. Writes go to a temporary file first and are renamed into place,
//! so a crash never leaves a half-written record behind.

use super::{SessionData, SessionError, SessionId, SessionStore};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Session store backed by YAML files on disk
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    /// Base directory for session files
    base_dir: PathBuf,
}

impl FileSessionStore {
    /// Create a store over `base_dir`, creating the directory if needed
    pub async fn open(base_dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).await?;
        tracing::debug!("Session directory ready at {}", base_dir.display());
        Ok(Self { base_dir })
    }

    /// Directory holding the session files
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn session_path(&self, id: &SessionId) -> PathBuf {
        self.base_dir.join(format!("{id}.session.yaml"))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionData>, SessionError> {
        let path = self.session_path(id);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let data = serde_yaml_ng::from_str(&content).map_err(|source| {
            SessionError::Serialization {
                id: id.to_string(),
                source,
            }
        })?;
        Ok(Some(data))
    }

    async fn store(&self, id: &SessionId, data: &SessionData) -> Result<(), SessionError> {
        let content =
            serde_yaml_ng::to_string(data).map_err(|source| SessionError::Serialization {
                id: id.to_string(),
                source,
            })?;

        let path = self.session_path(id);
        let staging = path.with_extension("yaml.tmp");
        fs::write(&staging, content).await?;
        fs::rename(&staging, &path).await?;
        Ok(())
    }

    async fn remove(&self, id: &SessionId) -> Result<(), SessionError> {
        match fs::remove_file(self.session_path(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FlashMessage;
    use tempfile::TempDir;
    use todo_lists::TodoList;

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::open(temp_dir.path().join("sessions"))
            .await
            .unwrap();
        let id = SessionId::new();

        assert!(store.load(&id).await.unwrap().is_none());

        let mut list = TodoList::new("Groceries");
        list.add_todo("Milk");
        let data = SessionData {
            lists: vec![list],
            flash: vec![FlashMessage::success("The list has been created.")],
        };
        store.store(&id, &data).await.unwrap();

        let loaded = store.load(&id).await.unwrap().unwrap();
        assert_eq!(loaded, data);
        assert!(store.base_dir().join(format!("{id}.session.yaml")).is_file());
    }

    #[tokio::test]
    async fn test_file_store_overwrites_whole_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::open(temp_dir.path()).await.unwrap();
        let id = SessionId::new();

        let first = SessionData {
            lists: vec![TodoList::new("A"), TodoList::new("B")],
            flash: Vec::new(),
        };
        store.store(&id, &first).await.unwrap();
        store.store(&id, &SessionData::default()).await.unwrap();

        assert_eq!(store.load(&id).await.unwrap(), Some(SessionData::default()));
    }

    #[tokio::test]
    async fn test_file_store_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::open(temp_dir.path()).await.unwrap();
        let id = SessionId::new();

        store.store(&id, &SessionData::default()).await.unwrap();
        store.remove(&id).await.unwrap();
        store.remove(&id).await.unwrap();
        assert!(store.load(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_reports_corrupt_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::open(temp_dir.path()).await.unwrap();
        let id = SessionId::new();

        std::fs::write(
            temp_dir.path().join(format!("{id}.session.yaml")),
            "lists: [not, a, list: {",
        )
        .unwrap();

        assert!(matches!(
            store.load(&id).await,
            Err(SessionError::Serialization { .. })
        ));
    }
}
