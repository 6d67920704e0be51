use std::sync::Arc;

use crate::{
    domain::background::Background, ports::background_storage::BackgroundStoragePort,
};

#[async_trait::async_trait]
pub trait ListBackgroundsUseCase {
    async fn list_backgrounds(&self) -> Result<Vec<Background>, ListBackgroundsError>;
}

#[derive(Debug)]
pub enum ListBackgroundsError {
    StorageError,
}

pub struct ListBackgroundsUseCaseImpl<B: BackgroundStoragePort> {
    storage: Arc<B>,
}

impl<B: BackgroundStoragePort> ListBackgroundsUseCaseImpl<B> {
    pub fn new(storage: Arc<B>) -> Self {
        Self { storage }
    }
}

#[async_trait::async_trait]
impl<B: BackgroundStoragePort + Send + Sync + 'static> ListBackgroundsUseCase
    for ListBackgroundsUseCaseImpl<B>
{
    async fn list_backgrounds(&self) -> Result<Vec<Background>, ListBackgroundsError> {
        let keys = self.storage.list_objects().await.map_err(|e| {
            log::error!("Error listing backgrounds: {}", e);
            ListBackgroundsError::StorageError
        })?;
        Ok(keys
            .into_iter()
            .map(|key| Background {
                public_url: self.storage.public_url(&key),
                key,
            })
            .collect())
    }
}
