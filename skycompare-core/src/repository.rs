use async_trait::async_trait;
use uuid::Uuid;
use crate::search::{SearchHistoryEntry, SearchParams};

/// Repository trait for persisted search history.
///
/// Entries are kept newest first. Implementations decide how many are retained.
#[async_trait]
pub trait SearchHistoryRepository: Send + Sync {
    async fn list(
        &self,
    ) -> Result<Vec<SearchHistoryEntry>, Box<dyn std::error::Error + Send + Sync>>;

    /// Records a search and returns the stored entry.
    async fn append(
        &self,
        params: SearchParams,
    ) -> Result<SearchHistoryEntry, Box<dyn std::error::Error + Send + Sync>>;

    /// Removes the entry with `id`, returning whether one was found.
    async fn remove(
        &self,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    async fn clear(
        &self,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
