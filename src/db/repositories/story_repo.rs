//! Story repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Story};

/// Repository for story database operations
pub struct StoryRepository;

impl StoryRepository {
    /// Create a new story
    pub async fn create(
        pool: &PgPool,
        title: &str,
        summary: Option<&str>,
        content: &str,
        image_url: Option<&str>,
        is_published: bool,
        author_id: &Uuid,
    ) -> AppResult<Story> {
        let story = sqlx::query_as::<_, Story>(
            r#"
            INSERT INTO stories (title, summary, content, image_url, is_published, author_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(summary)
        .bind(content)
        .bind(image_url)
        .bind(is_published)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(story)
    }

    /// Find story by ID, optionally restricted to published stories
    pub async fn find_by_id(
        pool: &PgPool,
        id: &Uuid,
        published_only: bool,
    ) -> AppResult<Option<Story>> {
        let story = sqlx::query_as::<_, Story>(
            r#"SELECT * FROM stories WHERE id = $1 AND (NOT $2 OR is_published = TRUE)"#,
        )
        .bind(id)
        .bind(published_only)
        .fetch_optional(pool)
        .await?;

        Ok(story)
    }

    /// Update story; `None` keeps the current value
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        summary: Option<&str>,
        content: Option<&str>,
        image_url: Option<&str>,
        is_published: Option<bool>,
    ) -> AppResult<Story> {
        let story = sqlx::query_as::<_, Story>(
            r#"
            UPDATE stories
            SET
                title = COALESCE($2, title),
                summary = COALESCE($3, summary),
                content = COALESCE($4, content),
                image_url = COALESCE($5, image_url),
                is_published = COALESCE($6, is_published),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(summary)
        .bind(content)
        .bind(image_url)
        .bind(is_published)
        .fetch_one(pool)
        .await?;

        Ok(story)
    }

    /// Delete story
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM stories WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List stories newest first with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        published_only: bool,
    ) -> AppResult<(Vec<Story>, i64)> {
        let stories = sqlx::query_as::<_, Story>(
            r#"
            SELECT * FROM stories
            WHERE NOT $1 OR is_published = TRUE
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(published_only)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM stories WHERE NOT $1 OR is_published = TRUE"#,
        )
        .bind(published_only)
        .fetch_one(pool)
        .await?;

        Ok((stories, total))
    }

    /// Count total stories
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM stories"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
