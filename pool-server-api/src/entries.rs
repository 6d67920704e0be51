use axum::{
    Json,
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use chrono::SecondsFormat;
use pool_server_app::workflow::entry::export::EXPORT_FILE_NAME;

use crate::{AppState, auth::AdminAuth, error::ServiceError, golfers::JsonGolfer};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonEntry {
    id: i64,
    first: String,
    last: String,
    email: String,
    entry_name: String,
    /// `null` where a pick no longer resolves to a golfer.
    golfers: Vec<Option<JsonGolfer>>,
    total_salary: u64,
    created_at: String,
}

#[derive(serde::Serialize)]
pub struct JsonEntriesResponse {
    entries: Vec<JsonEntry>,
}

pub async fn list_entries(
    _: AdminAuth,
    State(app_state): State<AppState>,
) -> Result<Json<JsonEntriesResponse>, ServiceError> {
    let entries = app_state.app.entry_list_use_case.list_entries().await?;
    let entries = entries
        .into_iter()
        .map(|(id, resolved)| JsonEntry {
            id: id.0,
            first: resolved.entry.first_name,
            last: resolved.entry.last_name,
            email: resolved.entry.email,
            entry_name: resolved.entry.entry_name,
            golfers: resolved
                .golfers
                .into_iter()
                .map(|g| g.map(JsonGolfer::from))
                .collect(),
            total_salary: resolved.total_salary,
            created_at: resolved
                .entry
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        })
        .collect();
    Ok(Json(JsonEntriesResponse { entries }))
}

pub async fn export_entries(
    _: AdminAuth,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let csv = app_state.app.entry_export_use_case.export_csv().await?;
    let headers = [
        (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, csv))
}

#[derive(serde::Serialize)]
pub struct JsonResetResponse {
    success: bool,
    removed: u64,
}

pub async fn reset_entries(
    _: AdminAuth,
    State(app_state): State<AppState>,
) -> Result<Json<JsonResetResponse>, ServiceError> {
    let removed = app_state.app.entry_clear_use_case.clear_entries().await?;
    log::info!("Entries reset, {} removed", removed);
    Ok(Json(JsonResetResponse {
        success: true,
        removed,
    }))
}
