//! User handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::auth::response::UserResponse,
    middleware::auth::AuthenticatedUser,
    services::{ScoreService, UserService},
    state::AppState,
};

use super::{request::UpdateProfileRequest, response::MyScoresResponse};

/// Update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = UserService::update_profile(state.db(), &auth_user.id, payload).await?;
    Ok(Json(user.into()))
}

/// The caller's score per topic
pub async fn get_my_scores(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<MyScoresResponse>> {
    let (scores, total_score) = ScoreService::list_my_scores(state.db(), &auth_user.id).await?;
    Ok(Json(MyScoresResponse {
        scores,
        total_score,
    }))
}
