use std::sync::Arc;

use pool_core::{ContestRules, ResolvedEntry, Roster, resolve_entry};

use crate::domain::{EntryId, entry::EntryRepository, roster::RosterRepository};

#[async_trait::async_trait]
pub trait ListEntriesUseCase {
    async fn list_entries(&self) -> Result<Vec<(EntryId, ResolvedEntry)>, ListEntriesError>;
}

#[derive(Debug)]
pub enum ListEntriesError {
    RepositoryError,
}

pub struct ListEntriesUseCaseImpl<R: RosterRepository, E: EntryRepository> {
    roster_repository: Arc<R>,
    entry_repository: Arc<E>,
    rules: ContestRules,
}

impl<R: RosterRepository, E: EntryRepository> ListEntriesUseCaseImpl<R, E> {
    pub fn new(roster_repository: Arc<R>, entry_repository: Arc<E>, rules: ContestRules) -> Self {
        Self {
            roster_repository,
            entry_repository,
            rules,
        }
    }
}

#[async_trait::async_trait]
impl<R, E> ListEntriesUseCase for ListEntriesUseCaseImpl<R, E>
where
    R: RosterRepository + Send + Sync + 'static,
    E: EntryRepository + Send + Sync + 'static,
{
    async fn list_entries(&self) -> Result<Vec<(EntryId, ResolvedEntry)>, ListEntriesError> {
        let entries = self.entry_repository.list_entries().await.map_err(|e| {
            log::error!("Error listing entries: {}", e);
            ListEntriesError::RepositoryError
        })?;
        let roster: Roster = self
            .roster_repository
            .list_golfers()
            .await
            .map_err(|e| {
                log::error!("Error loading roster for entry listing: {}", e);
                ListEntriesError::RepositoryError
            })?
            .into_iter()
            .collect();

        Ok(entries
            .iter()
            .map(|(id, entry)| (*id, resolve_entry(entry, &roster, &self.rules)))
            .collect())
    }
}
