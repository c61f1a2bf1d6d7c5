use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vibecheck_core::settings::CensorshipStatus;

use crate::{error::ApiResult, main_lib::AppState};

/// Fields stay untyped so a wrong type is reported with the same messages
/// as a missing field.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleBody {
    #[serde(default)]
    password: Value,
    #[serde(default)]
    new_state: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleResponse {
    success: bool,
    new_state: bool,
}

async fn toggle_censorship(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ToggleBody>, JsonRejection>,
) -> ApiResult<Json<ToggleResponse>> {
    let Json(body) = payload?;
    let password = body.password.as_str().unwrap_or_default();
    let new_state = state
        .admin_service
        .toggle_censorship(password, body.new_state.as_bool())
        .await?;
    tracing::info!("Censorship toggled to {}", new_state);
    Ok(Json(ToggleResponse {
        success: true,
        new_state,
    }))
}

async fn censorship_status(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CensorshipStatus>> {
    let censor_bad_vibes = state.settings_service.is_censorship_enabled()?;
    Ok(Json(CensorshipStatus { censor_bad_vibes }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/toggle-censorship", post(toggle_censorship))
        .route("/settings/censorship", get(censorship_status))
}
