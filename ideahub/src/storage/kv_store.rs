//! Durable key-value storage
//!
//! A small string-to-string store used for per-device state such as the
//! like map and the onboarding flag. The file-backed implementation keeps
//! every key in one JSON object on disk.
//!
//! Example file contents:
//! `{"hasStarted":"true","likedItems":"{\"7\":true}"}`

use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// String key-value storage that survives restarts
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_string(&self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store persisted as a single JSON file
pub struct FileKvStore {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl FileKvStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Entries to write back on `set_string`.
    ///
    /// An unparseable file is moved aside to `<name>.corrupt` and replaced by
    /// an empty map, so one bad write cannot block every later one.
    async fn read_for_update(&self) -> Result<BTreeMap<String, String>> {
        match self.read_all().await {
            Err(AppError::Serialization(e)) => {
                let backup = self.path.with_extension("corrupt");
                tracing::warn!(
                    "Storage file {:?} is corrupt ({}), moving it to {:?}",
                    self.path,
                    e,
                    backup
                );
                if let Err(e) = fs::rename(&self.path, &backup).await {
                    tracing::warn!("Failed to move corrupt storage file aside: {}", e);
                }
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_vec_pretty(entries)?;

        // Write to temp file first (atomic write)
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(&content).await?;
        file.sync_all().await?;

        fs::rename(temp_path, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let entries = self.read_all().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_for_update().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await?;

        tracing::debug!("Stored key {:?} ({} bytes)", key, value.len());

        Ok(())
    }
}

/// In-memory key-value store, lost on drop
#[derive(Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Generic("Memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Generic("Memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
