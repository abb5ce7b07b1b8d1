//! Leaderboard computation
//!
//! Turns raw per-topic score rows into ranked player totals. Everything here
//! is pure and synchronous: callers hand in an owned snapshot of the score
//! data and get a freshly built list back, so concurrent requests never share
//! state. The leaderboard is rebuilt from scratch on every read.
//!
//! Ranking uses standard competition ranking ("1224"): tied players share a
//! rank and the next distinct score continues at its 1-based position.

pub mod aggregate;
pub mod ranking;

use uuid::Uuid;

pub use aggregate::{PlayerScoreRow, aggregate_players, parse_score};
pub use ranking::rank_players;

/// Errors raised while turning score data into a leaderboard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeaderboardError {
    /// A submitted score was malformed or out of range
    #[error("invalid score: {0}")]
    InvalidScore(String),

    /// A player's total does not fit in an i64
    #[error("total score overflowed for player {0}")]
    ScoreOverflow(Uuid),
}
