use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::SecondsFormat;
use pool_core::GolferId;
use pool_server_app::workflow::entry::submit::{EntrySubmission, Receipt};

use crate::{AppState, error::ServiceError, golfers::JsonGolfer};

#[derive(serde::Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonSubmitRequest {
    first: String,
    last: String,
    email: String,
    entry_name: String,
    picks: Vec<i64>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReceipt {
    entry_id: i64,
    first: String,
    last: String,
    email: String,
    entry_name: String,
    golfers: Vec<JsonGolfer>,
    total_salary: u64,
    created_at: String,
}

impl From<Receipt> for JsonReceipt {
    fn from(receipt: Receipt) -> Self {
        Self {
            entry_id: receipt.entry_id.0,
            first: receipt.first_name,
            last: receipt.last_name,
            email: receipt.email,
            entry_name: receipt.entry_name,
            golfers: receipt.golfers.into_iter().map(JsonGolfer::from).collect(),
            total_salary: receipt.total_salary,
            created_at: receipt
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(serde::Serialize)]
pub struct JsonSubmitResponse {
    success: bool,
    receipt: JsonReceipt,
}

pub async fn submit_entry(
    State(app_state): State<AppState>,
    payload: Result<Json<JsonSubmitRequest>, JsonRejection>,
) -> Result<Json<JsonSubmitResponse>, ServiceError> {
    let Json(request) = payload?;
    let submission = EntrySubmission {
        first_name: request.first,
        last_name: request.last,
        email: request.email,
        entry_name: request.entry_name,
        picks: request.picks.into_iter().map(GolferId).collect(),
    };
    let receipt = app_state.app.entry_submit_use_case.submit(submission).await?;
    Ok(Json(JsonSubmitResponse {
        success: true,
        receipt: receipt.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seed_golfers, test_state};

    fn jane(picks: Vec<i64>) -> JsonSubmitRequest {
        JsonSubmitRequest {
            first: "Jane".to_string(),
            last: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            entry_name: "Team Jane".to_string(),
            picks,
        }
    }

    #[tokio::test]
    async fn test_submit_returns_receipt() {
        let (state, _dir) = test_state(None).await;
        let ids = seed_golfers(&state, &[25, 20, 15, 15, 10, 10]).await;

        let Json(response) = submit_entry(State(state.clone()), Ok(Json(jane(ids.clone()))))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.receipt.total_salary, 95);
        assert_eq!(
            response.receipt.golfers.iter().map(|g| g.id).collect::<Vec<_>>(),
            ids
        );

        let entries = state.app.entry_list_use_case.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.0, response.receipt.entry_id);
    }

    #[tokio::test]
    async fn test_submit_rejections() {
        let (state, _dir) = test_state(None).await;
        let ids = seed_golfers(&state, &[25, 20, 15, 15, 10, 16]).await;

        let over_cap = submit_entry(State(state.clone()), Ok(Json(jane(ids.clone())))).await;
        assert!(matches!(over_cap, Err(ServiceError::BadRequest(_))));

        let mut missing_last = jane(ids[..5].to_vec());
        missing_last.last = String::new();
        let result = submit_entry(State(state.clone()), Ok(Json(missing_last))).await;
        assert!(matches!(result, Err(ServiceError::BadRequest(msg)) if msg.contains("last")));

        let empty = submit_entry(State(state.clone()), Ok(Json(JsonSubmitRequest::default()))).await;
        assert!(matches!(empty, Err(ServiceError::BadRequest(msg)) if msg.contains("first")));

        assert!(
            state
                .app
                .entry_list_use_case
                .list_entries()
                .await
                .unwrap()
                .is_empty()
        );
    }
}
