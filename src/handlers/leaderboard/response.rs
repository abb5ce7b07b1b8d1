//! Leaderboard response DTOs

use serde::Serialize;

use crate::models::RankedPlayer;

/// Ranked player list
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub players: Vec<RankedPlayer>,
    /// Number of ranked players before any limit was applied
    pub total: usize,
}

impl LeaderboardResponse {
    pub fn new(mut players: Vec<RankedPlayer>, limit: Option<u32>) -> Self {
        let total = players.len();
        if let Some(limit) = limit {
            players.truncate(limit as usize);
        }
        Self { players, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(rank: usize) -> RankedPlayer {
        RankedPlayer {
            id: Uuid::new_v4(),
            name: format!("player-{rank}"),
            phone: "0800000000".to_string(),
            score: 100 - rank as i64,
            rank,
        }
    }

    #[test]
    fn test_limit_truncates_but_keeps_total() {
        let players = (1..=5).map(entry).collect();
        let response = LeaderboardResponse::new(players, Some(2));

        assert_eq!(response.total, 5);
        assert_eq!(response.players.len(), 2);
        assert_eq!(response.players[1].rank, 2);
    }

    #[test]
    fn test_serializes_under_players_key() {
        let response = LeaderboardResponse::new(vec![entry(1)], None);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["total"], 1);
        assert_eq!(json["players"][0]["rank"], 1);
        assert_eq!(json["players"][0]["phone"], "0800000000");
        assert!(json["players"][0]["score"].is_i64());
    }
}
