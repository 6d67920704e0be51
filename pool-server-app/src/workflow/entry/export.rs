use std::sync::Arc;

use pool_core::{ContestRules, Entry, Roster, export_entries};

use crate::domain::{entry::EntryRepository, roster::RosterRepository};

pub const EXPORT_FILE_NAME: &str = "golf-pool-entries.csv";

#[async_trait::async_trait]
pub trait ExportEntriesUseCase {
    async fn export_csv(&self) -> Result<String, ExportEntriesError>;
}

#[derive(Debug)]
pub enum ExportEntriesError {
    RepositoryError,
    FormatError,
}

pub struct ExportEntriesUseCaseImpl<R: RosterRepository, E: EntryRepository> {
    roster_repository: Arc<R>,
    entry_repository: Arc<E>,
    rules: ContestRules,
}

impl<R: RosterRepository, E: EntryRepository> ExportEntriesUseCaseImpl<R, E> {
    pub fn new(roster_repository: Arc<R>, entry_repository: Arc<E>, rules: ContestRules) -> Self {
        Self {
            roster_repository,
            entry_repository,
            rules,
        }
    }
}

#[async_trait::async_trait]
impl<R, E> ExportEntriesUseCase for ExportEntriesUseCaseImpl<R, E>
where
    R: RosterRepository + Send + Sync + 'static,
    E: EntryRepository + Send + Sync + 'static,
{
    async fn export_csv(&self) -> Result<String, ExportEntriesError> {
        let entries: Vec<Entry> = match self.entry_repository.list_entries().await {
            Ok(entries) => entries.into_iter().map(|(_, entry)| entry).collect(),
            Err(e) => {
                log::error!("Error fetching entries for export: {}", e);
                return Err(ExportEntriesError::RepositoryError);
            }
        };
        let roster: Roster = match self.roster_repository.list_golfers().await {
            Ok(golfers) => golfers.into_iter().collect(),
            Err(e) => {
                log::error!("Error fetching golfers for export: {}", e);
                return Err(ExportEntriesError::RepositoryError);
            }
        };

        let csv = export_entries(&entries, &roster, &self.rules).map_err(|e| {
            log::error!("Error formatting entries export: {}", e);
            ExportEntriesError::FormatError
        })?;
        log::info!("Exported {} entries", entries.len());
        Ok(csv)
    }
}
