use std::sync::Arc;

use pool_core::Golfer;

use crate::domain::roster::RosterRepository;

#[async_trait::async_trait]
pub trait ListGolfersUseCase {
    async fn list_golfers(&self) -> Result<Vec<Golfer>, ListGolfersError>;
}

#[derive(Debug)]
pub enum ListGolfersError {
    RepositoryError,
}

pub struct ListGolfersUseCaseImpl<R: RosterRepository> {
    roster_repository: Arc<R>,
}

impl<R: RosterRepository> ListGolfersUseCaseImpl<R> {
    pub fn new(roster_repository: Arc<R>) -> Self {
        Self { roster_repository }
    }
}

#[async_trait::async_trait]
impl<R: RosterRepository + Send + Sync + 'static> ListGolfersUseCase
    for ListGolfersUseCaseImpl<R>
{
    async fn list_golfers(&self) -> Result<Vec<Golfer>, ListGolfersError> {
        self.roster_repository.list_golfers().await.map_err(|e| {
            log::error!("Error listing golfers: {}", e);
            ListGolfersError::RepositoryError
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockRosterRepository;

    #[tokio::test]
    async fn test_list_is_sorted_and_stable() {
        let repo = Arc::new(MockRosterRepository::with_golfers(&[
            ("Tony Finau", 9),
            ("Jon Rahm", 18),
            ("Jason Day", 8),
        ]));
        let use_case = ListGolfersUseCaseImpl::new(repo);

        let first = use_case.list_golfers().await.unwrap();
        let second = use_case.list_golfers().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(),
            vec!["Jason Day", "Jon Rahm", "Tony Finau"]
        );
    }
}
