use std::sync::Arc;

use crate::domain::settings::SettingsRepository;

#[async_trait::async_trait]
pub trait UpdateSettingUseCase {
    async fn set_setting(&self, key: &str, value: &str) -> Result<(), UpdateSettingError>;
}

#[derive(Debug)]
pub enum UpdateSettingError {
    MissingKey,
    RepositoryError,
}

pub struct UpdateSettingUseCaseImpl<S: SettingsRepository> {
    settings_repository: Arc<S>,
}

impl<S: SettingsRepository> UpdateSettingUseCaseImpl<S> {
    pub fn new(settings_repository: Arc<S>) -> Self {
        Self {
            settings_repository,
        }
    }
}

#[async_trait::async_trait]
impl<S: SettingsRepository + Send + Sync + 'static> UpdateSettingUseCase
    for UpdateSettingUseCaseImpl<S>
{
    async fn set_setting(&self, key: &str, value: &str) -> Result<(), UpdateSettingError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(UpdateSettingError::MissingKey);
        }
        match self.settings_repository.set_setting(key, value).await {
            Ok(()) => {
                log::info!("Updated setting '{}'", key);
                Ok(())
            }
            Err(e) => {
                log::error!("Error updating setting '{}': {}", key, e);
                Err(UpdateSettingError::RepositoryError)
            }
        }
    }
}
