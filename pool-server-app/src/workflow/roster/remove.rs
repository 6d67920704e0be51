use std::sync::Arc;

use pool_core::GolferId;

use crate::domain::{RepoRetrieveError, roster::RosterRepository};

#[async_trait::async_trait]
pub trait RemoveGolfersUseCase {
    async fn remove_golfer(&self, id: GolferId) -> Result<(), RemoveGolfersError>;
    async fn clear_golfers(&self) -> Result<u64, RemoveGolfersError>;
}

#[derive(Debug)]
pub enum RemoveGolfersError {
    NotFound,
    RepositoryError,
}

pub struct RemoveGolfersUseCaseImpl<R: RosterRepository> {
    roster_repository: Arc<R>,
}

impl<R: RosterRepository> RemoveGolfersUseCaseImpl<R> {
    pub fn new(roster_repository: Arc<R>) -> Self {
        Self { roster_repository }
    }
}

#[async_trait::async_trait]
impl<R: RosterRepository + Send + Sync + 'static> RemoveGolfersUseCase
    for RemoveGolfersUseCaseImpl<R>
{
    async fn remove_golfer(&self, id: GolferId) -> Result<(), RemoveGolfersError> {
        match self.roster_repository.remove_golfer(id).await {
            Ok(()) => {
                log::info!("Removed golfer {}", id);
                Ok(())
            }
            Err(RepoRetrieveError::NotFound) => Err(RemoveGolfersError::NotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Error removing golfer {}: {}", id, e);
                Err(RemoveGolfersError::RepositoryError)
            }
        }
    }

    async fn clear_golfers(&self) -> Result<u64, RemoveGolfersError> {
        match self.roster_repository.clear_golfers().await {
            Ok(removed) => {
                log::info!("Cleared {} golfers", removed);
                Ok(removed)
            }
            Err(e) => {
                log::error!("Error clearing golfers: {}", e);
                Err(RemoveGolfersError::RepositoryError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockRosterRepository;

    #[tokio::test]
    async fn test_remove_and_clear() {
        let repo = Arc::new(MockRosterRepository::with_golfers(&[
            ("Max Homa", 7),
            ("Sam Burns", 8),
            ("Brian Harman", 6),
        ]));
        let use_case = RemoveGolfersUseCaseImpl::new(repo.clone());

        use_case.remove_golfer(GolferId(2)).await.unwrap();
        assert!(matches!(
            use_case.remove_golfer(GolferId(2)).await,
            Err(RemoveGolfersError::NotFound)
        ));
        assert_eq!(use_case.clear_golfers().await.unwrap(), 2);
        assert_eq!(repo.len(), 0);
    }
}
