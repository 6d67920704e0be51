use std::sync::Arc;

use pool_core::{Golfer, InvalidRow, NewGolfer, RowError, parse_roster_csv};

use crate::domain::roster::RosterRepository;

#[derive(Debug, Clone)]
pub enum RawSalary {
    Number(i64),
    Text(String),
    Invalid(String),
}

/// One row of an admin batch upload, before validation.
#[derive(Debug, Clone)]
pub struct RawGolferRow {
    pub name: String,
    pub salary: RawSalary,
}

impl RawGolferRow {
    fn validate(&self) -> Result<NewGolfer, RowError> {
        match &self.salary {
            RawSalary::Number(salary) => NewGolfer::new(&self.name, *salary),
            RawSalary::Text(salary) => NewGolfer::parse(&self.name, salary),
            RawSalary::Invalid(raw) => Err(RowError::InvalidSalary(raw.clone())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvImportReport {
    pub golfers: Vec<Golfer>,
    pub imported: usize,
    pub skipped: Vec<InvalidRow>,
    pub header_skipped: bool,
}

#[async_trait::async_trait]
pub trait ImportGolfersUseCase {
    /// Validates every row, then inserts all of them or none.
    /// Returns the full roster afterwards.
    async fn add_batch(&self, rows: Vec<RawGolferRow>) -> Result<Vec<Golfer>, ImportGolfersError>;

    /// Imports the valid rows of a `name,salary` CSV document and reports
    /// the rows that were skipped.
    async fn import_csv(&self, text: &str) -> Result<CsvImportReport, ImportGolfersError>;
}

#[derive(Debug)]
pub enum ImportGolfersError {
    EmptyBatch,
    InvalidRow(InvalidRow),
    RepositoryError,
}

pub struct ImportGolfersUseCaseImpl<R: RosterRepository> {
    roster_repository: Arc<R>,
}

impl<R: RosterRepository> ImportGolfersUseCaseImpl<R> {
    pub fn new(roster_repository: Arc<R>) -> Self {
        Self { roster_repository }
    }
}

impl<R: RosterRepository + Send + Sync + 'static> ImportGolfersUseCaseImpl<R> {
    async fn insert_all(&self, golfers: Vec<NewGolfer>) -> Result<Vec<Golfer>, ImportGolfersError> {
        if golfers.is_empty() {
            return Err(ImportGolfersError::EmptyBatch);
        }
        let count = golfers.len();
        if let Err(e) = self.roster_repository.add_golfers(golfers).await {
            log::error!("Error inserting batch of {} golfers: {}", count, e);
            return Err(ImportGolfersError::RepositoryError);
        }
        log::info!("Imported {} golfers", count);
        self.roster_repository.list_golfers().await.map_err(|e| {
            log::error!("Error listing golfers after import: {}", e);
            ImportGolfersError::RepositoryError
        })
    }
}

#[async_trait::async_trait]
impl<R: RosterRepository + Send + Sync + 'static> ImportGolfersUseCase
    for ImportGolfersUseCaseImpl<R>
{
    async fn add_batch(&self, rows: Vec<RawGolferRow>) -> Result<Vec<Golfer>, ImportGolfersError> {
        let golfers = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.validate().map_err(|reason| {
                    ImportGolfersError::InvalidRow(InvalidRow {
                        index: i + 1,
                        reason,
                    })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.insert_all(golfers).await
    }

    async fn import_csv(&self, text: &str) -> Result<CsvImportReport, ImportGolfersError> {
        let import = parse_roster_csv(text);
        for row in &import.skipped {
            log::debug!("Skipping roster row {}", row);
        }
        let imported = import.golfers.len();
        let golfers = self.insert_all(import.golfers).await?;
        Ok(CsvImportReport {
            golfers,
            imported,
            skipped: import.skipped,
            header_skipped: import.header_skipped,
        })
    }
}
