//! Score request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Record a score for a topic graded on the client.
///
/// `score` is kept as raw JSON so malformed values can be reported as
/// `INVALID_SCORE` instead of a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub topic_id: Uuid,
    pub score: serde_json::Value,
}
