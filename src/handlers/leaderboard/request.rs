//! Leaderboard request DTOs

use serde::Deserialize;

/// Leaderboard query parameters
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Only return the first `limit` entries (ranks are computed over everyone)
    pub limit: Option<u32>,
}
