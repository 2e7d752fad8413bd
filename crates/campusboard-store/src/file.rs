//! JSON file store.
//!
//! All keys live in a single JSON object on disk. Writes go through a
//! temporary file followed by a rename, so a crash mid-write leaves the
//! previous contents intact.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::{KeyValueStore, StoreError};

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(Entries::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(store.path = %self.path.display(), store.entries = entries.len(), "Preferences written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self), fields(store.operation = "GET"))]
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.load().await?;
        Ok(entries.get(key).cloned())
    }

    #[instrument(skip(self, value), fields(store.operation = "SET"))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    #[instrument(skip(self), fields(store.operation = "DEL"))]
    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!(
            "campusboard-store-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        FileStore::new(dir.join("nested").join("preferences.json"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let store = temp_store("missing");
        assert_eq!(store.get("campusboard:menu:role").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_persists_across_instances() {
        let store = temp_store("persist");
        store.set("campusboard:menu:role", "Teacher").await.unwrap();

        let reopened = FileStore::new(store.path());
        assert_eq!(
            reopened.get("campusboard:menu:role").await.unwrap().as_deref(),
            Some("Teacher")
        );
    }

    #[tokio::test]
    async fn test_set_keeps_other_keys() {
        let store = temp_store("keeps");
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.set("a", "3").await.unwrap();

        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = temp_store("remove");
        store.set("a", "1").await.unwrap();
        store.remove("a").await.unwrap();
        store.remove("never-set").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let store = temp_store("corrupt");
        let parent = store.path().parent().unwrap();
        std::fs::create_dir_all(parent).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        let err = store.get("a").await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
