//! Leaderboard service

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::{
    db::repositories::ScoreRepository,
    error::{AppError, AppResult},
    leaderboard::{aggregate_players, rank_players},
    models::RankedPlayer,
};

/// Leaderboard service for business logic
pub struct LeaderboardService;

impl LeaderboardService {
    /// Full ranked leaderboard, rebuilt from the current score records
    pub async fn get_leaderboard(pool: &PgPool) -> AppResult<Vec<RankedPlayer>> {
        let rows = ScoreRepository::fetch_player_scores(pool).await?;
        let record_count = rows.len();

        let players = aggregate_players(rows)?;
        let ranked = rank_players(players);

        debug!(records = record_count, players = ranked.len(), "Leaderboard built");
        Ok(ranked)
    }

    /// One player's entry in the full ranking
    pub async fn get_player_entry(pool: &PgPool, user_id: &Uuid) -> AppResult<RankedPlayer> {
        Self::get_leaderboard(pool)
            .await?
            .into_iter()
            .find(|p| p.id == *user_id)
            .ok_or_else(|| AppError::NotFound("No score recorded yet".to_string()))
    }
}
