use std::sync::Arc;

use pool_core::{Golfer, NewGolfer, RowError};

use crate::domain::roster::RosterRepository;

#[async_trait::async_trait]
pub trait AddGolferUseCase {
    async fn add_golfer(&self, name: &str, salary: i64) -> Result<Golfer, AddGolferError>;
}

#[derive(Debug)]
pub enum AddGolferError {
    InvalidGolfer(RowError),
    RepositoryError,
}

pub struct AddGolferUseCaseImpl<R: RosterRepository> {
    roster_repository: Arc<R>,
}

impl<R: RosterRepository> AddGolferUseCaseImpl<R> {
    pub fn new(roster_repository: Arc<R>) -> Self {
        Self { roster_repository }
    }
}

#[async_trait::async_trait]
impl<R: RosterRepository + Send + Sync + 'static> AddGolferUseCase for AddGolferUseCaseImpl<R> {
    async fn add_golfer(&self, name: &str, salary: i64) -> Result<Golfer, AddGolferError> {
        let golfer = NewGolfer::new(name, salary).map_err(AddGolferError::InvalidGolfer)?;
        match self.roster_repository.add_golfer(golfer).await {
            Ok(golfer) => {
                log::info!("Added golfer {} '{}' (${})", golfer.id, golfer.name, golfer.salary);
                Ok(golfer)
            }
            Err(e) => {
                log::error!("Error adding golfer: {}", e);
                Err(AddGolferError::RepositoryError)
            }
        }
    }
}
