use std::sync::Arc;

use crate::{
    domain::{
        background::{Background, is_valid_key},
        settings::{BACKGROUND_IMAGE, SettingsRepository},
    },
    ports::background_storage::BackgroundStoragePort,
};

#[async_trait::async_trait]
pub trait ActivateBackgroundUseCase {
    async fn activate(&self, key: &str) -> Result<Background, ActivateBackgroundError>;
}

#[derive(Debug)]
pub enum ActivateBackgroundError {
    InvalidKey,
    NotFound,
    StorageError,
    RepositoryError,
}

pub struct ActivateBackgroundUseCaseImpl<B: BackgroundStoragePort, S: SettingsRepository> {
    storage: Arc<B>,
    settings_repository: Arc<S>,
}

impl<B: BackgroundStoragePort, S: SettingsRepository> ActivateBackgroundUseCaseImpl<B, S> {
    pub fn new(storage: Arc<B>, settings_repository: Arc<S>) -> Self {
        Self {
            storage,
            settings_repository,
        }
    }
}

#[async_trait::async_trait]
impl<B, S> ActivateBackgroundUseCase for ActivateBackgroundUseCaseImpl<B, S>
where
    B: BackgroundStoragePort + Send + Sync + 'static,
    S: SettingsRepository + Send + Sync + 'static,
{
    async fn activate(&self, key: &str) -> Result<Background, ActivateBackgroundError> {
        if !is_valid_key(key) {
            return Err(ActivateBackgroundError::InvalidKey);
        }
        match self.storage.contains_object(key).await {
            Ok(true) => {}
            Ok(false) => return Err(ActivateBackgroundError::NotFound),
            Err(e) => {
                log::error!("Error looking up background '{}': {}", key, e);
                return Err(ActivateBackgroundError::StorageError);
            }
        }

        let public_url = self.storage.public_url(key);
        if let Err(e) = self
            .settings_repository
            .set_setting(BACKGROUND_IMAGE, &public_url)
            .await
        {
            log::error!("Error activating background '{}': {}", key, e);
            return Err(ActivateBackgroundError::RepositoryError);
        }
        log::info!("Activated background '{}'", key);
        Ok(Background {
            key: key.to_string(),
            public_url,
        })
    }
}
