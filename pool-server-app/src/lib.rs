use std::sync::Arc;

use pool_core::ContestRules;

use crate::{
    domain::{
        editor::RulesEditorConfig, entry::EntryRepository, roster::RosterRepository,
        settings::SettingsRepository,
    },
    ports::background_storage::BackgroundStoragePort,
    workflow::{
        background::{
            activate::{ActivateBackgroundUseCase, ActivateBackgroundUseCaseImpl},
            delete::{DeleteBackgroundUseCase, DeleteBackgroundUseCaseImpl},
            list::{ListBackgroundsUseCase, ListBackgroundsUseCaseImpl},
            upload::{UploadBackgroundUseCase, UploadBackgroundUseCaseImpl},
        },
        contest::form::{GetContestFormUseCase, GetContestFormUseCaseImpl},
        entry::{
            clear::{ClearEntriesUseCase, ClearEntriesUseCaseImpl},
            export::{ExportEntriesUseCase, ExportEntriesUseCaseImpl},
            list::{ListEntriesUseCase, ListEntriesUseCaseImpl},
            submit::{SubmitEntryUseCase, SubmitEntryUseCaseImpl},
        },
        roster::{
            add::{AddGolferUseCase, AddGolferUseCaseImpl},
            import::{ImportGolfersUseCase, ImportGolfersUseCaseImpl},
            list::{ListGolfersUseCase, ListGolfersUseCaseImpl},
            remove::{RemoveGolfersUseCase, RemoveGolfersUseCaseImpl},
        },
        settings::{
            get::{GetSettingsUseCase, GetSettingsUseCaseImpl},
            update::{UpdateSettingUseCase, UpdateSettingUseCaseImpl},
        },
    },
};

pub mod domain;
pub mod ports;
pub mod workflow;

#[cfg(test)]
mod testing;

pub struct Application {
    pub rules: ContestRules,
    pub editor_config: Arc<RulesEditorConfig>,

    pub contest_form_use_case: Box<dyn GetContestFormUseCase + Send + Sync + 'static>,

    pub entry_submit_use_case: Box<dyn SubmitEntryUseCase + Send + Sync + 'static>,
    pub entry_list_use_case: Box<dyn ListEntriesUseCase + Send + Sync + 'static>,
    pub entry_export_use_case: Box<dyn ExportEntriesUseCase + Send + Sync + 'static>,
    pub entry_clear_use_case: Box<dyn ClearEntriesUseCase + Send + Sync + 'static>,

    pub golfer_list_use_case: Box<dyn ListGolfersUseCase + Send + Sync + 'static>,
    pub golfer_add_use_case: Box<dyn AddGolferUseCase + Send + Sync + 'static>,
    pub golfer_import_use_case: Box<dyn ImportGolfersUseCase + Send + Sync + 'static>,
    pub golfer_remove_use_case: Box<dyn RemoveGolfersUseCase + Send + Sync + 'static>,

    pub settings_get_use_case: Box<dyn GetSettingsUseCase + Send + Sync + 'static>,
    pub settings_update_use_case: Box<dyn UpdateSettingUseCase + Send + Sync + 'static>,

    pub background_list_use_case: Box<dyn ListBackgroundsUseCase + Send + Sync + 'static>,
    pub background_upload_use_case: Box<dyn UploadBackgroundUseCase + Send + Sync + 'static>,
    pub background_activate_use_case: Box<dyn ActivateBackgroundUseCase + Send + Sync + 'static>,
    pub background_delete_use_case: Box<dyn DeleteBackgroundUseCase + Send + Sync + 'static>,
}

pub fn build_application<
    R: RosterRepository + Send + Sync + 'static,
    E: EntryRepository + Send + Sync + 'static,
    S: SettingsRepository + Send + Sync + 'static,
    B: BackgroundStoragePort + Send + Sync + 'static,
>(
    roster_repository: Arc<R>,
    entry_repository: Arc<E>,
    settings_repository: Arc<S>,
    background_storage: Arc<B>,
    rules: ContestRules,
    editor_config: RulesEditorConfig,
) -> Application {
    Application {
        rules,
        editor_config: Arc::new(editor_config),

        contest_form_use_case: Box::new(GetContestFormUseCaseImpl::new(
            roster_repository.clone(),
            settings_repository.clone(),
            rules,
        )),

        entry_submit_use_case: Box::new(SubmitEntryUseCaseImpl::new(
            roster_repository.clone(),
            entry_repository.clone(),
            rules,
        )),
        entry_list_use_case: Box::new(ListEntriesUseCaseImpl::new(
            roster_repository.clone(),
            entry_repository.clone(),
            rules,
        )),
        entry_export_use_case: Box::new(ExportEntriesUseCaseImpl::new(
            roster_repository.clone(),
            entry_repository.clone(),
            rules,
        )),
        entry_clear_use_case: Box::new(ClearEntriesUseCaseImpl::new(entry_repository.clone())),

        golfer_list_use_case: Box::new(ListGolfersUseCaseImpl::new(roster_repository.clone())),
        golfer_add_use_case: Box::new(AddGolferUseCaseImpl::new(roster_repository.clone())),
        golfer_import_use_case: Box::new(ImportGolfersUseCaseImpl::new(
            roster_repository.clone(),
        )),
        golfer_remove_use_case: Box::new(RemoveGolfersUseCaseImpl::new(
            roster_repository.clone(),
        )),

        settings_get_use_case: Box::new(GetSettingsUseCaseImpl::new(settings_repository.clone())),
        settings_update_use_case: Box::new(UpdateSettingUseCaseImpl::new(
            settings_repository.clone(),
        )),

        background_list_use_case: Box::new(ListBackgroundsUseCaseImpl::new(
            background_storage.clone(),
        )),
        background_upload_use_case: Box::new(UploadBackgroundUseCaseImpl::new(
            background_storage.clone(),
            settings_repository.clone(),
        )),
        background_activate_use_case: Box::new(ActivateBackgroundUseCaseImpl::new(
            background_storage.clone(),
            settings_repository.clone(),
        )),
        background_delete_use_case: Box::new(DeleteBackgroundUseCaseImpl::new(
            background_storage,
            settings_repository,
        )),
    }
}
