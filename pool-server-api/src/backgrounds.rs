use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
        rejection::JsonRejection,
    },
};
use pool_server_app::{
    domain::background::Background, workflow::background::upload::BackgroundUpload,
};

use crate::{AppState, auth::AdminAuth, error::ServiceError};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonBackground {
    key: String,
    public_url: String,
}

impl From<Background> for JsonBackground {
    fn from(background: Background) -> Self {
        Self {
            key: background.key,
            public_url: background.public_url,
        }
    }
}

#[derive(serde::Serialize)]
pub struct JsonBackgroundsResponse {
    backgrounds: Vec<JsonBackground>,
}

pub async fn list_backgrounds(
    _: AdminAuth,
    State(app_state): State<AppState>,
) -> Result<Json<JsonBackgroundsResponse>, ServiceError> {
    let backgrounds = app_state
        .app
        .background_list_use_case
        .list_backgrounds()
        .await?;
    Ok(Json(JsonBackgroundsResponse {
        backgrounds: backgrounds.into_iter().map(JsonBackground::from).collect(),
    }))
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonUploadResponse {
    key: String,
    public_url: String,
    activated: bool,
}

fn parse_flag(text: &str) -> bool {
    !matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Multipart form with an `image` file and an optional `activate` flag,
/// which defaults to true.
pub async fn upload_background(
    _: AdminAuth,
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<JsonUploadResponse>, ServiceError> {
    let mut multipart = multipart?;
    let mut image = None;
    let mut activate = true;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("image") => {
                let original_name = field.file_name().unwrap_or("image").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await?;
                image = Some((original_name, content_type, bytes.to_vec()));
            }
            Some("activate") => activate = parse_flag(&field.text().await?),
            _ => {}
        }
    }

    let Some((original_name, content_type, bytes)) = image else {
        return Err(ServiceError::BadRequest("No file".to_string()));
    };

    let uploaded = app_state
        .app
        .background_upload_use_case
        .upload(BackgroundUpload {
            bytes,
            original_name,
            content_type,
            activate,
        })
        .await?;

    Ok(Json(JsonUploadResponse {
        key: uploaded.background.key,
        public_url: uploaded.background.public_url,
        activated: uploaded.activated,
    }))
}

#[derive(serde::Deserialize, Default)]
#[serde(default)]
pub struct JsonKeyRequest {
    key: String,
}

fn require_key(payload: Result<Json<JsonKeyRequest>, JsonRejection>) -> Result<String, ServiceError> {
    let Json(request) = payload?;
    if request.key.trim().is_empty() {
        return Err(ServiceError::BadRequest(
            "Missing \"key\" in request body".to_string(),
        ));
    }
    Ok(request.key)
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonActivateResponse {
    updated: bool,
    public_url: String,
}

pub async fn activate_background(
    _: AdminAuth,
    State(app_state): State<AppState>,
    payload: Result<Json<JsonKeyRequest>, JsonRejection>,
) -> Result<Json<JsonActivateResponse>, ServiceError> {
    let key = require_key(payload)?;
    let background = app_state
        .app
        .background_activate_use_case
        .activate(&key)
        .await?;
    Ok(Json(JsonActivateResponse {
        updated: true,
        public_url: background.public_url,
    }))
}

#[derive(serde::Serialize)]
pub struct JsonDeleteResponse {
    deleted: bool,
    cleared: bool,
}

pub async fn delete_background(
    _: AdminAuth,
    State(app_state): State<AppState>,
    payload: Result<Json<JsonKeyRequest>, JsonRejection>,
) -> Result<Json<JsonDeleteResponse>, ServiceError> {
    let key = require_key(payload)?;
    let deleted = app_state
        .app
        .background_delete_use_case
        .delete(&key)
        .await?;
    Ok(Json(JsonDeleteResponse {
        deleted: true,
        cleared: deleted.cleared,
    }))
}

#[cfg(test)]
mod tests {
    use pool_server_app::domain::settings::BACKGROUND_IMAGE;

    use super::*;
    use crate::testing::test_state;

    fn key_request(key: &str) -> Result<Json<JsonKeyRequest>, JsonRejection> {
        Ok(Json(JsonKeyRequest {
            key: key.to_string(),
        }))
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(""));
        assert!(!parse_flag(" False "));
        assert!(!parse_flag("0"));
    }

    #[tokio::test]
    async fn test_activate_and_delete() {
        let (state, dir) = test_state(None).await;
        std::fs::write(dir.path().join("1700000000000_pines.jpg"), b"jpeg").unwrap();
        std::fs::write(dir.path().join("1700000009000_dunes.jpg"), b"jpeg").unwrap();

        let Json(listed) = list_backgrounds(AdminAuth, State(state.clone())).await.unwrap();
        assert_eq!(
            listed.backgrounds.iter().map(|b| b.key.as_str()).collect::<Vec<_>>(),
            vec!["1700000009000_dunes.jpg", "1700000000000_pines.jpg"]
        );

        let Json(activated) = activate_background(
            AdminAuth,
            State(state.clone()),
            key_request("1700000000000_pines.jpg"),
        )
        .await
        .unwrap();
        assert_eq!(
            activated.public_url,
            "http://pool.test/storage/backgrounds/1700000000000_pines.jpg"
        );

        let Json(inactive) = delete_background(
            AdminAuth,
            State(state.clone()),
            key_request("1700000009000_dunes.jpg"),
        )
        .await
        .unwrap();
        assert!(inactive.deleted);
        assert!(!inactive.cleared);

        let Json(active) = delete_background(
            AdminAuth,
            State(state.clone()),
            key_request("1700000000000_pines.jpg"),
        )
        .await
        .unwrap();
        assert!(active.cleared);
        let settings = state.app.settings_get_use_case.get_settings().await.unwrap();
        assert_eq!(settings[BACKGROUND_IMAGE], "");

        let gone = delete_background(
            AdminAuth,
            State(state.clone()),
            key_request("1700000000000_pines.jpg"),
        )
        .await;
        assert!(matches!(gone, Err(ServiceError::NotFound(_))));

        let missing = activate_background(AdminAuth, State(state), key_request(" ")).await;
        assert!(matches!(missing, Err(ServiceError::BadRequest(_))));
    }
}
