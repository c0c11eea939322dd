use async_trait::async_trait;
use skycompare_core::{SearchHistoryEntry, SearchHistoryRepository, SearchParams};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::app_config::{HistoryBackend, HistoryConfig};
use crate::kv::{FileStore, KeyValueStore, MemoryStore};
use crate::redis_repo::RedisStore;
use crate::StoreError;

pub const SEARCH_HISTORY_KEY: &str = "flightSearchHistory";

/// Search history kept as one JSON array, newest first, under a single key.
pub struct KvSearchHistory {
    store: Arc<dyn KeyValueStore>,
    key: String,
    capacity: usize,
    // Serializes read-modify-write cycles issued through this instance.
    write_lock: Mutex<()>,
}

impl KvSearchHistory {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, capacity: usize) -> Self {
        Self {
            store,
            key: key.into(),
            capacity,
            write_lock: Mutex::new(()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), SEARCH_HISTORY_KEY, 10)
    }

    async fn load(&self) -> Result<Vec<SearchHistoryEntry>, StoreError> {
        let Some(raw) = self.store.get_item(&self.key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Discarding unreadable search history under {}: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, entries: &[SearchHistoryEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set_item(&self.key, &raw).await
    }
}

#[async_trait]
impl SearchHistoryRepository for KvSearchHistory {
    async fn list(&self) -> Result<Vec<SearchHistoryEntry>, Box<dyn Error + Send + Sync>> {
        Ok(self.load().await?)
    }

    async fn append(
        &self,
        params: SearchParams,
    ) -> Result<SearchHistoryEntry, Box<dyn Error + Send + Sync>> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;

        let entry = SearchHistoryEntry::new(params);
        entries.insert(0, entry.clone());
        entries.truncate(self.capacity);
        self.save(&entries).await?;

        info!(
            "Search saved to history: {} -> {} ({} entries)",
            entry.search_params.origin,
            entry.search_params.destination,
            entries.len()
        );
        Ok(entry)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;

        let before = entries.len();
        entries.retain(|e| e.id != id);
        let removed = entries.len() != before;
        if removed {
            self.save(&entries).await?;
            info!("Search {} removed from history", id);
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let _guard = self.write_lock.lock().await;
        self.store.remove_item(&self.key).await?;
        info!("Search history cleared");
        Ok(())
    }
}

/// Opens the history store selected by configuration.
pub fn build_history(config: &HistoryConfig) -> Result<KvSearchHistory, StoreError> {
    let store: Arc<dyn KeyValueStore> = match config.backend {
        HistoryBackend::Memory => Arc::new(MemoryStore::new()),
        HistoryBackend::File => {
            let path = config.path.as_deref().ok_or_else(|| {
                StoreError::Misconfigured("history.path is required for the file backend".into())
            })?;
            Arc::new(FileStore::new(path))
        }
        HistoryBackend::Redis => {
            let url = config.redis_url.as_deref().ok_or_else(|| {
                StoreError::Misconfigured("history.redis_url is required for the redis backend".into())
            })?;
            Arc::new(RedisStore::new(url)?)
        }
    };
    info!("Search history backend: {:?}", config.backend);
    Ok(KvSearchHistory::new(store, config.storage_key.clone(), config.capacity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skycompare_core::TripType;

    fn params(origin: &str, destination: &str) -> SearchParams {
        SearchParams {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            return_date: None,
            passengers: 1,
            trip_type: TripType::OneWay,
        }
    }

    #[tokio::test]
    async fn test_append_is_newest_first_and_round_trips() {
        let history = KvSearchHistory::in_memory();
        let first = history.append(params("DEL", "BOM")).await.unwrap();
        let second = history.append(params("BLR", "DXB")).await.unwrap();

        let entries = history.list().await.unwrap();
        assert_eq!(entries, vec![second, first]);
    }

    #[tokio::test]
    async fn test_capacity_cap() {
        let history = KvSearchHistory::new(Arc::new(MemoryStore::new()), SEARCH_HISTORY_KEY, 10);
        let mut last = None;
        for _ in 0..12 {
            last = Some(history.append(params("DEL", "BOM")).await.unwrap());
        }

        let entries = history.list().await.unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries.first(), last.as_ref());
    }

    #[tokio::test]
    async fn test_remove_deletes_exactly_one() {
        let history = KvSearchHistory::in_memory();
        let a = history.append(params("DEL", "BOM")).await.unwrap();
        let b = history.append(params("DEL", "BOM")).await.unwrap();

        assert!(history.remove(a.id).await.unwrap());
        assert!(!history.remove(a.id).await.unwrap());
        assert_eq!(history.list().await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let store = Arc::new(MemoryStore::new());
        let history = KvSearchHistory::new(store.clone(), SEARCH_HISTORY_KEY, 10);
        history.append(params("DEL", "BOM")).await.unwrap();

        history.clear().await.unwrap();
        assert!(history.list().await.unwrap().is_empty());
        assert_eq!(store.get_item(SEARCH_HISTORY_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_stored_format_and_corrupt_data() {
        let store = Arc::new(MemoryStore::new());
        let history = KvSearchHistory::new(store.clone(), SEARCH_HISTORY_KEY, 10);
        history.append(params("DEL", "BOM")).await.unwrap();

        let raw = store.get_item(SEARCH_HISTORY_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["searchParams"]["origin"], "DEL");
        assert!(value[0]["timestamp"].is_i64());

        store.set_item(SEARCH_HISTORY_KEY, "{broken").await.unwrap();
        assert!(history.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_backend_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = HistoryConfig {
            backend: HistoryBackend::File,
            path: Some(dir.path().join("history.json").to_string_lossy().into_owned()),
            ..HistoryConfig::default()
        };

        let entry = build_history(&config)
            .unwrap()
            .append(params("HYD", "MAA"))
            .await
            .unwrap();

        let reopened = build_history(&config).unwrap();
        assert_eq!(reopened.list().await.unwrap(), vec![entry]);
    }

    #[test]
    fn test_missing_backend_settings() {
        let config = HistoryConfig {
            backend: HistoryBackend::Redis,
            ..HistoryConfig::default()
        };
        assert!(matches!(build_history(&config), Err(StoreError::Misconfigured(_))));
    }
}
