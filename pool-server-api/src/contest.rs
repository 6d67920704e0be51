use axum::{Json, extract::State};

use crate::{AppState, error::ServiceError, golfers::JsonGolfer};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonContest {
    title: String,
    rules: String,
    background_image: String,
    salary_cap: u32,
    required_picks: usize,
    golfers: Vec<JsonGolfer>,
}

/// Everything the public entry form needs in one request.
pub async fn get_contest(
    State(app_state): State<AppState>,
) -> Result<Json<JsonContest>, ServiceError> {
    let form = app_state.app.contest_form_use_case.get_form().await?;
    Ok(Json(JsonContest {
        title: form.title,
        rules: form.rules_html,
        background_image: form.background_image,
        salary_cap: form.rules.salary_cap,
        required_picks: form.rules.required_picks,
        golfers: form.golfers.into_iter().map(JsonGolfer::from).collect(),
    }))
}
