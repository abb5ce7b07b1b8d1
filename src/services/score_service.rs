//! Score service

use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    constants::POINTS_PER_CORRECT_ANSWER,
    db::repositories::{QuestionRepository, ScoreRepository, score_repo::UserTopicScore},
    error::AppResult,
    leaderboard::{LeaderboardError, parse_score},
    models::Score,
    services::TopicService,
};

/// Score service for business logic
pub struct ScoreService;

impl ScoreService {
    /// Record a client-graded score for a published topic, overwriting any
    /// earlier score the user had for it
    pub async fn submit_score(
        pool: &PgPool,
        user_id: &Uuid,
        topic_id: &Uuid,
        raw_score: &Value,
    ) -> AppResult<Score> {
        let score = parse_score(raw_score).inspect_err(|e| {
            warn!(user_id = %user_id, topic_id = %topic_id, error = %e, "Rejected score");
        })?;

        TopicService::get_published_topic(pool, topic_id).await?;

        let question_count = QuestionRepository::count_by_topic(pool, topic_id).await?;
        check_topic_max(score, question_count).inspect_err(|e| {
            warn!(user_id = %user_id, topic_id = %topic_id, error = %e, "Rejected score");
        })?;

        let saved = ScoreRepository::upsert(pool, user_id, topic_id, score).await?;

        info!(user_id = %user_id, topic_id = %topic_id, score, "Score recorded");
        Ok(saved)
    }

    /// The user's scores per topic and their total
    pub async fn list_my_scores(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<(Vec<UserTopicScore>, i64)> {
        let scores = ScoreRepository::list_for_user(pool, user_id).await?;
        let total = total_score(*user_id, &scores)?;
        Ok((scores, total))
    }
}

/// A topic is worth at most what a perfect quiz run would earn
fn check_topic_max(score: i64, question_count: i64) -> Result<(), LeaderboardError> {
    let max_score = question_count.saturating_mul(POINTS_PER_CORRECT_ANSWER);
    if score > max_score {
        return Err(LeaderboardError::InvalidScore(format!(
            "{} exceeds the topic maximum of {}",
            score, max_score
        )));
    }
    Ok(())
}

fn total_score(user_id: Uuid, scores: &[UserTopicScore]) -> Result<i64, LeaderboardError> {
    scores.iter().try_fold(0i64, |acc, s| {
        acc.checked_add(s.score)
            .ok_or(LeaderboardError::ScoreOverflow(user_id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use chrono::Utc;
    use serde_json::json;

    fn entry(score: i64) -> UserTopicScore {
        UserTopicScore {
            topic_id: Uuid::new_v4(),
            topic_title: "Passwords".to_string(),
            score,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_total_score() {
        let scores = vec![entry(30), entry(-10), entry(50)];
        assert_eq!(total_score(Uuid::nil(), &scores), Ok(70));
        assert_eq!(total_score(Uuid::nil(), &[]), Ok(0));
    }

    #[test]
    fn test_total_score_overflow() {
        let scores = vec![entry(i64::MAX), entry(1)];
        assert_eq!(
            total_score(Uuid::nil(), &scores),
            Err(LeaderboardError::ScoreOverflow(Uuid::nil()))
        );
    }

    #[test]
    fn test_huge_score_is_rejected_as_invalid_score() {
        let err: AppError = parse_score(&json!(i64::MAX)).unwrap_err().into();
        assert_eq!(err.error_code(), "INVALID_SCORE");
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_topic_max() {
        // Five questions are worth 50 points
        assert!(check_topic_max(50, 5).is_ok());
        assert!(check_topic_max(0, 5).is_ok());
        assert!(check_topic_max(-20, 5).is_ok());

        let err: AppError = check_topic_max(51, 5).unwrap_err().into();
        assert_eq!(err.error_code(), "INVALID_SCORE");
    }

    #[test]
    fn test_topic_without_questions_accepts_nothing_positive() {
        assert!(check_topic_max(0, 0).is_ok());
        assert!(check_topic_max(10, 0).is_err());
    }
}
