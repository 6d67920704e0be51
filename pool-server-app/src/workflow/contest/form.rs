use std::sync::Arc;

use pool_core::{ContestRules, Golfer};

use crate::domain::{
    roster::RosterRepository,
    settings::{BACKGROUND_IMAGE, DEFAULT_FORM_TITLE, FORM_TITLE, RULES, SettingsRepository},
};

/// Everything the public entry form renders.
#[derive(Debug, Clone)]
pub struct ContestForm {
    pub title: String,
    pub rules_html: String,
    pub background_image: String,
    pub rules: ContestRules,
    pub golfers: Vec<Golfer>,
}

#[async_trait::async_trait]
pub trait GetContestFormUseCase {
    async fn get_form(&self) -> Result<ContestForm, GetContestFormError>;
}

#[derive(Debug)]
pub enum GetContestFormError {
    RepositoryError,
}

pub struct GetContestFormUseCaseImpl<R: RosterRepository, S: SettingsRepository> {
    roster_repository: Arc<R>,
    settings_repository: Arc<S>,
    rules: ContestRules,
}

impl<R: RosterRepository, S: SettingsRepository> GetContestFormUseCaseImpl<R, S> {
    pub fn new(roster_repository: Arc<R>, settings_repository: Arc<S>, rules: ContestRules) -> Self {
        Self {
            roster_repository,
            settings_repository,
            rules,
        }
    }
}

#[async_trait::async_trait]
impl<R, S> GetContestFormUseCase for GetContestFormUseCaseImpl<R, S>
where
    R: RosterRepository + Send + Sync + 'static,
    S: SettingsRepository + Send + Sync + 'static,
{
    async fn get_form(&self) -> Result<ContestForm, GetContestFormError> {
        let mut settings = self.settings_repository.get_settings().await.map_err(|e| {
            log::error!("Error loading settings for contest form: {}", e);
            GetContestFormError::RepositoryError
        })?;
        let golfers = self.roster_repository.list_golfers().await.map_err(|e| {
            log::error!("Error loading golfers for contest form: {}", e);
            GetContestFormError::RepositoryError
        })?;

        let title = settings
            .remove(FORM_TITLE)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FORM_TITLE.to_string());

        Ok(ContestForm {
            title,
            rules_html: settings.remove(RULES).unwrap_or_default(),
            background_image: settings.remove(BACKGROUND_IMAGE).unwrap_or_default(),
            rules: self.rules,
            golfers,
        })
    }
}
