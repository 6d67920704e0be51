use std::collections::BTreeMap;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{AppState, auth::AdminAuth, error::ServiceError};

#[derive(serde::Serialize)]
pub struct JsonSettingsResponse {
    settings: BTreeMap<String, String>,
}

pub async fn get_settings(
    _: AdminAuth,
    State(app_state): State<AppState>,
) -> Result<Json<JsonSettingsResponse>, ServiceError> {
    let settings = app_state.app.settings_get_use_case.get_settings().await?;
    Ok(Json(JsonSettingsResponse { settings }))
}

#[derive(serde::Deserialize, Default)]
#[serde(default)]
pub struct JsonUpdateSettingRequest {
    key: String,
    value: String,
}

#[derive(serde::Serialize)]
pub struct JsonUpdatedResponse {
    updated: bool,
}

pub async fn update_setting(
    _: AdminAuth,
    State(app_state): State<AppState>,
    payload: Result<Json<JsonUpdateSettingRequest>, JsonRejection>,
) -> Result<Json<JsonUpdatedResponse>, ServiceError> {
    let Json(request) = payload?;
    app_state
        .app
        .settings_update_use_case
        .set_setting(&request.key, &request.value)
        .await?;
    Ok(Json(JsonUpdatedResponse { updated: true }))
}

#[derive(serde::Serialize)]
pub struct JsonEditorConfig {
    sizes: Vec<String>,
    formats: Vec<String>,
    toolbar: Vec<Vec<String>>,
}

/// Formatting options the admin rules editor may offer.
pub async fn get_editor_config(
    _: AdminAuth,
    State(app_state): State<AppState>,
) -> Json<JsonEditorConfig> {
    let config = &app_state.app.editor_config;
    Json(JsonEditorConfig {
        sizes: config.sizes.clone(),
        formats: config.formats.clone(),
        toolbar: config.toolbar.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_state;

    #[tokio::test]
    async fn test_settings_round_trip() {
        let (state, _dir) = test_state(None).await;

        let Json(updated) = update_setting(
            AdminAuth,
            State(state.clone()),
            Ok(Json(JsonUpdateSettingRequest {
                key: "rules".to_string(),
                value: "<p style=\"font-size: 18px\">Pick <em>six</em></p>".to_string(),
            })),
        )
        .await
        .unwrap();
        assert!(updated.updated);

        let Json(all) = get_settings(AdminAuth, State(state.clone())).await.unwrap();
        assert_eq!(
            all.settings["rules"],
            "<p style=\"font-size: 18px\">Pick <em>six</em></p>"
        );

        let missing_key = update_setting(
            AdminAuth,
            State(state),
            Ok(Json(JsonUpdateSettingRequest::default())),
        )
        .await;
        assert!(matches!(missing_key, Err(ServiceError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_editor_config() {
        let (state, _dir) = test_state(None).await;
        let Json(config) = get_editor_config(AdminAuth, State(state)).await;
        assert_eq!(config.sizes.first().map(String::as_str), Some("8px"));
        assert_eq!(config.sizes.last().map(String::as_str), Some("48px"));
        assert!(config.formats.iter().any(|f| f == "bullet"));
    }
}
