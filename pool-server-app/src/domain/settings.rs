use std::collections::BTreeMap;

use crate::domain::RepoError;

pub const FORM_TITLE: &str = "form_title";
pub const RULES: &str = "rules";
pub const BACKGROUND_IMAGE: &str = "background_image";

pub const DEFAULT_FORM_TITLE: &str = "Golf Pool Entry";

#[async_trait::async_trait]
pub trait SettingsRepository {
    async fn get_settings(&self) -> Result<BTreeMap<String, String>, RepoError>;
    async fn set_setting(&self, key: &str, value: &str) -> Result<(), RepoError>;
    /// Sets `key` to the empty string if it currently holds `expected`.
    /// Returns whether the value was cleared.
    async fn clear_setting_if_equals(&self, key: &str, expected: &str)
    -> Result<bool, RepoError>;
}
