//! User response DTOs

use crate::db::repositories::score_repo::UserTopicScore;
use serde::Serialize;

/// The caller's score records
#[derive(Debug, Serialize)]
pub struct MyScoresResponse {
    pub scores: Vec<UserTopicScore>,
    pub total_score: i64,
}
