//! Score repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, leaderboard::PlayerScoreRow, models::Score};

/// A user's score joined with the topic title
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserTopicScore {
    pub topic_id: Uuid,
    pub topic_title: String,
    pub score: i64,
    pub updated_at: DateTime<Utc>,
}

/// Repository for score database operations
pub struct ScoreRepository;

impl ScoreRepository {
    /// Insert the user's score for a topic, or overwrite it if one exists
    pub async fn upsert(
        pool: &PgPool,
        user_id: &Uuid,
        topic_id: &Uuid,
        score: i64,
    ) -> AppResult<Score> {
        let saved = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (user_id, topic_id, score)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, topic_id)
            DO UPDATE SET score = EXCLUDED.score, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(topic_id)
        .bind(score)
        .fetch_one(pool)
        .await?;

        Ok(saved)
    }

    /// All score records of one user, with topic titles
    pub async fn list_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<UserTopicScore>> {
        let scores = sqlx::query_as::<_, UserTopicScore>(
            r#"
            SELECT s.topic_id, t.title AS topic_title, s.score, s.updated_at
            FROM scores s
            JOIN topics t ON t.id = s.topic_id
            WHERE s.user_id = $1
            ORDER BY t.position, t.title
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(scores)
    }

    /// Snapshot of every score record joined with its owner's display fields.
    ///
    /// Only users with at least one score appear. Summing and ranking happen
    /// in the leaderboard module.
    pub async fn fetch_player_scores(pool: &PgPool) -> AppResult<Vec<PlayerScoreRow>> {
        let rows = sqlx::query_as::<_, PlayerScoreRow>(
            r#"
            SELECT u.id AS user_id, u.name, u.phone, s.score
            FROM scores s
            JOIN users u ON u.id = s.user_id
            ORDER BY u.created_at, u.id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Count total score records
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM scores"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
