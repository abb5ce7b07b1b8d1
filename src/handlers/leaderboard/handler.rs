//! Leaderboard handler implementations

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::RankedPlayer,
    services::LeaderboardService,
    state::AppState,
};

use super::{request::LeaderboardQuery, response::LeaderboardResponse};

/// Public leaderboard; phone numbers are masked
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<Json<LeaderboardResponse>> {
    let players = LeaderboardService::get_leaderboard(state.db())
        .await?
        .into_iter()
        .map(RankedPlayer::with_masked_phone)
        .collect();

    Ok(Json(LeaderboardResponse::new(players, query.limit)))
}

/// The caller's own leaderboard entry
pub async fn get_my_rank(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<RankedPlayer>> {
    let entry = LeaderboardService::get_player_entry(state.db(), &auth_user.id).await?;
    Ok(Json(entry))
}
