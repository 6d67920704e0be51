use std::sync::Arc;

use chrono::{DateTime, Utc};
use pool_core::{ContestRules, Entry, Golfer, GolferId, PickError, Roster, validate_picks};
use validator::Validate;

use crate::domain::{EntryId, entry::EntryRepository, roster::RosterRepository};

#[derive(Debug, Clone)]
pub struct EntrySubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub entry_name: String,
    pub picks: Vec<GolferId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub entry_id: EntryId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub entry_name: String,
    pub golfers: Vec<Golfer>,
    pub total_salary: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitEntryError {
    #[error("missing or invalid field: {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidPicks(#[from] PickError),
    #[error("failed to save entry")]
    Repository,
}

#[async_trait::async_trait]
pub trait SubmitEntryUseCase {
    async fn submit(&self, submission: EntrySubmission) -> Result<Receipt, SubmitEntryError>;
}

pub struct SubmitEntryUseCaseImpl<R: RosterRepository, E: EntryRepository> {
    roster_repository: Arc<R>,
    entry_repository: Arc<E>,
    rules: ContestRules,
}

impl<R: RosterRepository, E: EntryRepository> SubmitEntryUseCaseImpl<R, E> {
    pub fn new(roster_repository: Arc<R>, entry_repository: Arc<E>, rules: ContestRules) -> Self {
        Self {
            roster_repository,
            entry_repository,
            rules,
        }
    }
}

#[derive(Validate)]
struct EmailValidator {
    #[validate(email)]
    email: String,
}

fn required(value: &str, field: &'static str) -> Result<String, SubmitEntryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SubmitEntryError::MissingField(field));
    }
    Ok(value.to_string())
}

fn validate_email(email: &str) -> Result<String, SubmitEntryError> {
    let validator = EmailValidator {
        email: required(email, "email")?,
    };
    if validator.validate().is_err() {
        return Err(SubmitEntryError::MissingField("email"));
    }
    Ok(validator.email)
}

#[async_trait::async_trait]
impl<R, E> SubmitEntryUseCase for SubmitEntryUseCaseImpl<R, E>
where
    R: RosterRepository + Send + Sync + 'static,
    E: EntryRepository + Send + Sync + 'static,
{
    async fn submit(&self, submission: EntrySubmission) -> Result<Receipt, SubmitEntryError> {
        let first_name = required(&submission.first_name, "first")?;
        let last_name = required(&submission.last_name, "last")?;
        let email = validate_email(&submission.email)?;
        let entry_name = required(&submission.entry_name, "entryName")?;

        let roster: Roster = match self.roster_repository.list_golfers().await {
            Ok(golfers) => golfers.into_iter().collect(),
            Err(e) => {
                log::error!("Error loading roster for submission: {}", e);
                return Err(SubmitEntryError::Repository);
            }
        };

        let picks = match validate_picks(&submission.picks, &roster, &self.rules) {
            Ok(picks) => picks,
            Err(e) => {
                log::debug!("Rejected entry '{}' from {}: {}", entry_name, email, e);
                return Err(e.into());
            }
        };

        let created_at = Utc::now();
        let entry = Entry {
            first_name,
            last_name,
            email,
            entry_name,
            picks: submission.picks,
            created_at,
        };
        let entry_id = match self.entry_repository.create_entry(entry.clone()).await {
            Ok(id) => id,
            Err(e) => {
                log::error!("Error saving entry: {}", e);
                return Err(SubmitEntryError::Repository);
            }
        };

        log::info!(
            "Accepted entry {} '{}' with total salary {}",
            entry_id,
            entry.entry_name,
            picks.total_salary
        );

        Ok(Receipt {
            entry_id,
            first_name: entry.first_name,
            last_name: entry.last_name,
            email: entry.email,
            entry_name: entry.entry_name,
            golfers: picks.golfers,
            total_salary: picks.total_salary,
            created_at,
        })
    }
}
