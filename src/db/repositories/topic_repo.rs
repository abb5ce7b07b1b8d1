//! Topic repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Topic, TopicWithStats},
};

/// Repository for topic database operations
pub struct TopicRepository;

impl TopicRepository {
    /// Create a new topic
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        content: &str,
        cover_image_url: Option<&str>,
        position: i32,
        is_published: bool,
    ) -> AppResult<Topic> {
        let topic = sqlx::query_as::<_, Topic>(
            r#"
            INSERT INTO topics (title, description, content, cover_image_url, position, is_published)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(content)
        .bind(cover_image_url)
        .bind(position)
        .bind(is_published)
        .fetch_one(pool)
        .await?;

        Ok(topic)
    }

    /// Find topic by ID (published or not)
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>(r#"SELECT * FROM topics WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(topic)
    }

    /// Find a topic visible on the public site
    pub async fn find_published(pool: &PgPool, id: &Uuid) -> AppResult<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>(
            r#"SELECT * FROM topics WHERE id = $1 AND is_published = TRUE"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(topic)
    }

    /// Update topic; `None` keeps the current value
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        content: Option<&str>,
        cover_image_url: Option<&str>,
        position: Option<i32>,
        is_published: Option<bool>,
    ) -> AppResult<Topic> {
        let topic = sqlx::query_as::<_, Topic>(
            r#"
            UPDATE topics
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                content = COALESCE($4, content),
                cover_image_url = COALESCE($5, cover_image_url),
                position = COALESCE($6, position),
                is_published = COALESCE($7, is_published),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(content)
        .bind(cover_image_url)
        .bind(position)
        .bind(is_published)
        .fetch_one(pool)
        .await?;

        Ok(topic)
    }

    /// Delete topic (questions and scores cascade)
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM topics WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List topics with question counts, ordered for display
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        published_only: bool,
    ) -> AppResult<Vec<TopicWithStats>> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let topics = sqlx::query_as::<_, TopicWithStats>(
            r#"
            SELECT
                t.id, t.title, t.description, t.cover_image_url, t.position, t.is_published,
                COUNT(q.id) AS question_count
            FROM topics t
            LEFT JOIN quiz_questions q ON q.topic_id = t.id
            WHERE
                ($1::text IS NULL OR t.title ILIKE $1)
                AND (NOT $2 OR t.is_published = TRUE)
            GROUP BY t.id
            ORDER BY t.position, t.title
            "#,
        )
        .bind(&search_pattern)
        .bind(published_only)
        .fetch_all(pool)
        .await?;

        Ok(topics)
    }

    /// Count total topics
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM topics"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
