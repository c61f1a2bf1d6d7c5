use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vibecheck_core::{
    constants::CENSORED_VOTE_MESSAGE,
    live::VibeSnapshot,
    vibes::{VibeOption, VoteOutcome},
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VoteBody {
    #[serde(default)]
    vibe_name: Value,
}

#[derive(Serialize)]
#[serde(untagged)]
enum VoteResponse {
    Counted { success: bool, data: VibeOption },
    Censored { message: &'static str, censored: bool },
}

impl From<VoteOutcome> for VoteResponse {
    fn from(outcome: VoteOutcome) -> Self {
        match outcome {
            VoteOutcome::Counted(data) => VoteResponse::Counted {
                success: true,
                data,
            },
            VoteOutcome::Censored => VoteResponse::Censored {
                message: CENSORED_VOTE_MESSAGE,
                censored: true,
            },
        }
    }
}

async fn cast_vote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VoteBody>, JsonRejection>,
) -> ApiResult<Json<VoteResponse>> {
    let Json(body) = payload?;
    // Non-string names are treated as missing.
    let vibe_name = body.vibe_name.as_str().unwrap_or_default();
    let outcome = state.vote_service.cast_vote(vibe_name).await?;
    Ok(Json(outcome.into()))
}

async fn list_vibes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<VibeOption>>> {
    Ok(Json(state.vote_service.list_vibes()?))
}

async fn vibes_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<VibeSnapshot>> {
    Ok(Json(state.vote_service.snapshot()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/vote", post(cast_vote))
        .route("/vibes", get(list_vibes))
        .route("/vibes/summary", get(vibes_summary))
}
