use pool_core::Entry;

use crate::domain::{EntryId, RepoError};

#[async_trait::async_trait]
pub trait EntryRepository {
    async fn create_entry(&self, entry: Entry) -> Result<EntryId, RepoError>;
    /// Newest first.
    async fn list_entries(&self) -> Result<Vec<(EntryId, Entry)>, RepoError>;
    async fn clear_entries(&self) -> Result<u64, RepoError>;
}
