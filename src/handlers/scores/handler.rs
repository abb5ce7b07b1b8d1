//! Score handler implementations

use axum::{Json, extract::State};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::ScoreRecord,
    services::ScoreService,
    state::AppState,
};

use super::{request::SubmitScoreRequest, response::SubmitScoreResponse};

/// Insert or overwrite the caller's score for a topic
pub async fn submit_score(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SubmitScoreRequest>,
) -> AppResult<Json<SubmitScoreResponse>> {
    let saved =
        ScoreService::submit_score(state.db(), &auth_user.id, &payload.topic_id, &payload.score)
            .await?;

    Ok(Json(SubmitScoreResponse {
        record: ScoreRecord::from(&saved),
        updated_at: saved.updated_at,
    }))
}
