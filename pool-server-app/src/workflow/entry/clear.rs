use std::sync::Arc;

use crate::domain::entry::EntryRepository;

#[async_trait::async_trait]
pub trait ClearEntriesUseCase {
    async fn clear_entries(&self) -> Result<u64, ClearEntriesError>;
}

#[derive(Debug)]
pub enum ClearEntriesError {
    RepositoryError,
}

pub struct ClearEntriesUseCaseImpl<E: EntryRepository> {
    entry_repository: Arc<E>,
}

impl<E: EntryRepository> ClearEntriesUseCaseImpl<E> {
    pub fn new(entry_repository: Arc<E>) -> Self {
        Self { entry_repository }
    }
}

#[async_trait::async_trait]
impl<E: EntryRepository + Send + Sync + 'static> ClearEntriesUseCase
    for ClearEntriesUseCaseImpl<E>
{
    async fn clear_entries(&self) -> Result<u64, ClearEntriesError> {
        match self.entry_repository.clear_entries().await {
            Ok(removed) => {
                log::info!("Cleared {} entries", removed);
                Ok(removed)
            }
            Err(e) => {
                log::error!("Error clearing entries: {}", e);
                Err(ClearEntriesError::RepositoryError)
            }
        }
    }
}
