use pool_core::{Golfer, GolferId, NewGolfer};

use crate::domain::{RepoError, RepoRetrieveError};

/// Golfers available for picking.
///
/// `list_golfers` orders by name, then id.
#[async_trait::async_trait]
pub trait RosterRepository {
    async fn list_golfers(&self) -> Result<Vec<Golfer>, RepoError>;
    async fn add_golfer(&self, golfer: NewGolfer) -> Result<Golfer, RepoError>;
    /// Inserts all golfers or none of them.
    async fn add_golfers(&self, golfers: Vec<NewGolfer>) -> Result<Vec<Golfer>, RepoError>;
    async fn remove_golfer(&self, id: GolferId) -> Result<(), RepoRetrieveError>;
    async fn clear_golfers(&self) -> Result<u64, RepoError>;
}
