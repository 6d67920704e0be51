use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection, StringRejection},
    },
};
use pool_core::{Golfer, GolferId};
use pool_server_app::workflow::roster::import::{RawGolferRow, RawSalary};

use crate::{AppState, auth::AdminAuth, error::ServiceError};

#[derive(serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct JsonGolfer {
    pub id: i64,
    pub name: String,
    pub salary: u32,
}

impl From<Golfer> for JsonGolfer {
    fn from(golfer: Golfer) -> Self {
        Self {
            id: golfer.id.0,
            name: golfer.name,
            salary: golfer.salary,
        }
    }
}

fn to_json(golfers: Vec<Golfer>) -> Vec<JsonGolfer> {
    golfers.into_iter().map(JsonGolfer::from).collect()
}

#[derive(serde::Serialize)]
pub struct JsonGolfersResponse {
    golfers: Vec<JsonGolfer>,
}

pub async fn list_golfers(
    _: AdminAuth,
    State(app_state): State<AppState>,
) -> Result<Json<JsonGolfersResponse>, ServiceError> {
    let golfers = app_state.app.golfer_list_use_case.list_golfers().await?;
    Ok(Json(JsonGolfersResponse {
        golfers: to_json(golfers),
    }))
}

#[derive(serde::Deserialize)]
pub struct JsonAddGolferRequest {
    name: String,
    salary: i64,
}

#[derive(serde::Serialize)]
pub struct JsonAddGolferResponse {
    golfer: JsonGolfer,
    golfers: Vec<JsonGolfer>,
}

pub async fn add_golfer(
    _: AdminAuth,
    State(app_state): State<AppState>,
    payload: Result<Json<JsonAddGolferRequest>, JsonRejection>,
) -> Result<Json<JsonAddGolferResponse>, ServiceError> {
    let Json(request) = payload?;
    let golfer = app_state
        .app
        .golfer_add_use_case
        .add_golfer(&request.name, request.salary)
        .await?;
    let golfers = app_state.app.golfer_list_use_case.list_golfers().await?;
    Ok(Json(JsonAddGolferResponse {
        golfer: golfer.into(),
        golfers: to_json(golfers),
    }))
}

#[derive(serde::Deserialize)]
pub struct JsonRemoveGolferQuery {
    id: Option<i64>,
}

#[derive(serde::Serialize)]
pub struct JsonSuccessResponse {
    success: bool,
}

pub async fn remove_golfer(
    _: AdminAuth,
    State(app_state): State<AppState>,
    query: Result<Query<JsonRemoveGolferQuery>, QueryRejection>,
) -> Result<Json<JsonSuccessResponse>, ServiceError> {
    let Query(query) = query?;
    let Some(id) = query.id else {
        return Err(ServiceError::BadRequest("Missing id".to_string()));
    };
    app_state
        .app
        .golfer_remove_use_case
        .remove_golfer(GolferId(id))
        .await?;
    Ok(Json(JsonSuccessResponse { success: true }))
}

#[derive(serde::Deserialize)]
pub struct JsonRawGolfer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    salary: serde_json::Value,
}

impl From<JsonRawGolfer> for RawGolferRow {
    fn from(raw: JsonRawGolfer) -> Self {
        let salary = match raw.salary {
            serde_json::Value::Null => RawSalary::Text(String::new()),
            serde_json::Value::String(text) => RawSalary::Text(text),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(n) => RawSalary::Number(n),
                None => RawSalary::Invalid(n.to_string()),
            },
            other => RawSalary::Invalid(other.to_string()),
        };
        RawGolferRow {
            name: raw.name,
            salary,
        }
    }
}

#[derive(serde::Deserialize)]
pub struct JsonBatchRequest {
    golfers: Vec<JsonRawGolfer>,
}

pub async fn add_batch(
    _: AdminAuth,
    State(app_state): State<AppState>,
    payload: Result<Json<JsonBatchRequest>, JsonRejection>,
) -> Result<Json<JsonGolfersResponse>, ServiceError> {
    let Json(request) = payload?;
    let rows = request.golfers.into_iter().map(RawGolferRow::from).collect();
    let golfers = app_state.app.golfer_import_use_case.add_batch(rows).await?;
    Ok(Json(JsonGolfersResponse {
        golfers: to_json(golfers),
    }))
}

#[derive(serde::Serialize)]
pub struct JsonSkippedRow {
    index: usize,
    reason: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonImportResponse {
    golfers: Vec<JsonGolfer>,
    imported: usize,
    skipped: Vec<JsonSkippedRow>,
    header_skipped: bool,
}

pub async fn import_csv(
    _: AdminAuth,
    State(app_state): State<AppState>,
    body: Result<String, StringRejection>,
) -> Result<Json<JsonImportResponse>, ServiceError> {
    let text = body?;
    let report = app_state.app.golfer_import_use_case.import_csv(&text).await?;
    Ok(Json(JsonImportResponse {
        golfers: to_json(report.golfers),
        imported: report.imported,
        skipped: report
            .skipped
            .into_iter()
            .map(|row| JsonSkippedRow {
                index: row.index,
                reason: row.reason.to_string(),
            })
            .collect(),
        header_skipped: report.header_skipped,
    }))
}

#[derive(serde::Serialize)]
pub struct JsonResetResponse {
    success: bool,
    removed: u64,
}

pub async fn reset_golfers(
    _: AdminAuth,
    State(app_state): State<AppState>,
) -> Result<Json<JsonResetResponse>, ServiceError> {
    let removed = app_state.app.golfer_remove_use_case.clear_golfers().await?;
    log::info!("Golfer list reset, {} removed", removed);
    Ok(Json(JsonResetResponse {
        success: true,
        removed,
    }))
}
