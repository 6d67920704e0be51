use std::sync::Arc;

use crate::{
    domain::{
        background::is_valid_key,
        settings::{BACKGROUND_IMAGE, SettingsRepository},
    },
    ports::background_storage::{BackgroundStoragePort, StorageError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedBackground {
    /// Whether the deleted image was the active background.
    pub cleared: bool,
}

#[async_trait::async_trait]
pub trait DeleteBackgroundUseCase {
    /// Removes the image and clears the active background if it pointed at it.
    async fn delete(&self, key: &str) -> Result<DeletedBackground, DeleteBackgroundError>;
}

#[derive(Debug)]
pub enum DeleteBackgroundError {
    InvalidKey,
    NotFound,
    StorageError,
    RepositoryError,
}

pub struct DeleteBackgroundUseCaseImpl<B: BackgroundStoragePort, S: SettingsRepository> {
    storage: Arc<B>,
    settings_repository: Arc<S>,
}

impl<B: BackgroundStoragePort, S: SettingsRepository> DeleteBackgroundUseCaseImpl<B, S> {
    pub fn new(storage: Arc<B>, settings_repository: Arc<S>) -> Self {
        Self {
            storage,
            settings_repository,
        }
    }
}

#[async_trait::async_trait]
impl<B, S> DeleteBackgroundUseCase for DeleteBackgroundUseCaseImpl<B, S>
where
    B: BackgroundStoragePort + Send + Sync + 'static,
    S: SettingsRepository + Send + Sync + 'static,
{
    async fn delete(&self, key: &str) -> Result<DeletedBackground, DeleteBackgroundError> {
        if !is_valid_key(key) {
            return Err(DeleteBackgroundError::InvalidKey);
        }
        match self.storage.contains_object(key).await {
            Ok(true) => {}
            Ok(false) => return Err(DeleteBackgroundError::NotFound),
            Err(e) => {
                log::error!("Error looking up background '{}': {}", key, e);
                return Err(DeleteBackgroundError::StorageError);
            }
        }

        let public_url = self.storage.public_url(key);
        let cleared = self
            .settings_repository
            .clear_setting_if_equals(BACKGROUND_IMAGE, &public_url)
            .await
            .map_err(|e| {
                log::error!("Error clearing active background '{}': {}", key, e);
                DeleteBackgroundError::RepositoryError
            })?;

        if let Err(e) = self.storage.remove_object(key).await {
            if cleared {
                if let Err(restore) = self
                    .settings_repository
                    .set_setting(BACKGROUND_IMAGE, &public_url)
                    .await
                {
                    log::error!(
                        "Background '{}' was deactivated but not deleted ({}); restoring failed: {}",
                        key,
                        e,
                        restore
                    );
                }
            }
            return match e {
                StorageError::NotFound => Err(DeleteBackgroundError::NotFound),
                StorageError::Io(msg) => {
                    log::error!("Error deleting background '{}': {}", key, msg);
                    Err(DeleteBackgroundError::StorageError)
                }
            };
        }

        log::info!("Deleted background '{}' (was active: {})", key, cleared);
        Ok(DeletedBackground { cleared })
    }
}
