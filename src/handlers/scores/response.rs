//! Score response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::ScoreRecord;

/// Stored score after a submission
#[derive(Debug, Serialize)]
pub struct SubmitScoreResponse {
    #[serde(flatten)]
    pub record: ScoreRecord,
    pub updated_at: DateTime<Utc>,
}
