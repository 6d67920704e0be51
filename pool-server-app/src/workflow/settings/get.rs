use std::{collections::BTreeMap, sync::Arc};

use crate::domain::settings::SettingsRepository;

#[async_trait::async_trait]
pub trait GetSettingsUseCase {
    async fn get_settings(&self) -> Result<BTreeMap<String, String>, GetSettingsError>;
}

#[derive(Debug)]
pub enum GetSettingsError {
    RepositoryError,
}

pub struct GetSettingsUseCaseImpl<S: SettingsRepository> {
    settings_repository: Arc<S>,
}

impl<S: SettingsRepository> GetSettingsUseCaseImpl<S> {
    pub fn new(settings_repository: Arc<S>) -> Self {
        Self {
            settings_repository,
        }
    }
}

#[async_trait::async_trait]
impl<S: SettingsRepository + Send + Sync + 'static> GetSettingsUseCase
    for GetSettingsUseCaseImpl<S>
{
    async fn get_settings(&self) -> Result<BTreeMap<String, String>, GetSettingsError> {
        self.settings_repository.get_settings().await.map_err(|e| {
            log::error!("Error loading settings: {}", e);
            GetSettingsError::RepositoryError
        })
    }
}
