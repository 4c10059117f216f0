//! Vote ledger
//!
//! Per-device record of which ideas this installation has already liked,
//! persisted under the `likedItems` key as a JSON object (`{"7": true}`).
//!
//! Reads and writes never fail from the caller's point of view: a missing or
//! unreadable record loads as "no prior likes", and a failed write is logged
//! while the in-memory map stays authoritative for the session.

use crate::config::LIKED_ITEMS_KEY;
use crate::storage::KeyValueStore;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Idea id -> liked by this device
pub type LikeMap = BTreeMap<String, bool>;

/// Whether `id` has been liked, `false` for unknown ids
pub fn has_liked(likes: &LikeMap, id: &str) -> bool {
    likes.get(id).copied().unwrap_or(false)
}

/// Loads and saves the like map
#[derive(Clone)]
pub struct VoteLedger {
    store: Arc<dyn KeyValueStore>,
}

impl VoteLedger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the persisted like map
    pub async fn load(&self) -> LikeMap {
        let raw = match self.store.get_string(LIKED_ITEMS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No liked items stored yet");
                return LikeMap::new();
            }
            Err(e) => {
                tracing::error!("Failed to load liked items: {}", e);
                return LikeMap::new();
            }
        };

        match serde_json::from_str::<LikeMap>(&raw) {
            Ok(likes) => {
                tracing::info!("Loaded {} liked items", likes.len());
                likes
            }
            Err(e) => {
                tracing::error!("Failed to parse liked items: {}", e);
                LikeMap::new()
            }
        }
    }

    /// Persist the like map
    pub async fn save(&self, likes: &LikeMap) {
        let raw = match serde_json::to_string(likes) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to serialize liked items: {}", e);
                return;
            }
        };

        match self.store.set_string(LIKED_ITEMS_KEY, &raw).await {
            Ok(()) => tracing::debug!("Saved {} liked items", likes.len()),
            Err(e) => tracing::error!("Failed to save liked items: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::storage::{FileKvStore, MemoryKvStore};
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get_string(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::Generic("disk unavailable".to_string()))
        }

        async fn set_string(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Generic("disk unavailable".to_string()))
        }
    }

    fn likes(ids: &[&str]) -> LikeMap {
        ids.iter().map(|id| (id.to_string(), true)).collect()
    }

    #[test]
    fn test_has_liked_defaults_to_false() {
        let map = likes(&["42"]);

        assert!(has_liked(&map, "42"));
        assert!(!has_liked(&map, "43"));
        assert!(!has_liked(&LikeMap::new(), "42"));
    }

    #[tokio::test]
    async fn test_load_without_record_is_empty() {
        let ledger = VoteLedger::new(Arc::new(MemoryKvStore::new()));

        assert!(ledger.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_reproduces_map() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let original = likes(&["7", "9"]);

        VoteLedger::new(Arc::new(FileKvStore::new(path.clone())))
            .save(&original)
            .await;

        // Fresh store, as after an application restart
        let reloaded = VoteLedger::new(Arc::new(FileKvStore::new(path)))
            .load()
            .await;

        assert_eq!(reloaded, original);
    }

    #[tokio::test]
    async fn test_round_trip_keeps_false_and_empty_maps() {
        let maps = vec![
            LikeMap::new(),
            [("3".to_string(), false)].into_iter().collect(),
            [
                ("1".to_string(), true),
                ("2".to_string(), false),
                ("idea-x".to_string(), true),
            ]
            .into_iter()
            .collect::<LikeMap>(),
        ];

        for original in maps {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("storage.json");

            VoteLedger::new(Arc::new(FileKvStore::new(path.clone())))
                .save(&original)
                .await;
            let reloaded = VoteLedger::new(Arc::new(FileKvStore::new(path)))
                .load()
                .await;

            assert_eq!(reloaded, original);
        }
    }

    #[tokio::test]
    async fn test_save_heals_corrupt_storage_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "garbage").unwrap();
        let ledger = VoteLedger::new(Arc::new(FileKvStore::new(path)));

        assert!(ledger.load().await.is_empty());
        ledger.save(&likes(&["7"])).await;

        assert_eq!(ledger.load().await, likes(&["7"]));
    }

    #[tokio::test]
    async fn test_unparseable_record_loads_as_empty() {
        let store = Arc::new(MemoryKvStore::new());
        store.set_string(LIKED_ITEMS_KEY, "{not json").await.unwrap();

        let ledger = VoteLedger::new(store);
        assert!(ledger.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_storage_failures_are_swallowed() {
        let ledger = VoteLedger::new(Arc::new(BrokenStore));

        ledger.save(&likes(&["1"])).await;
        assert!(ledger.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_record_format_is_json_object() {
        let store = Arc::new(MemoryKvStore::new());
        let ledger = VoteLedger::new(store.clone());

        ledger.save(&likes(&["7", "9"])).await;

        let raw = store.get_string(LIKED_ITEMS_KEY).await.unwrap().unwrap();
        assert_eq!(raw, r#"{"7":true,"9":true}"#);
    }
}
