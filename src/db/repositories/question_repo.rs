//! Quiz question repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::QuizQuestion};

/// Repository for quiz question database operations
pub struct QuestionRepository;

impl QuestionRepository {
    /// Create a new question under a topic
    pub async fn create(
        pool: &PgPool,
        topic_id: &Uuid,
        question: &str,
        choices: &[String],
        answer_index: i32,
        explanation: Option<&str>,
        position: i32,
    ) -> AppResult<QuizQuestion> {
        let created = sqlx::query_as::<_, QuizQuestion>(
            r#"
            INSERT INTO quiz_questions (topic_id, question, choices, answer_index, explanation, position)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(topic_id)
        .bind(question)
        .bind(choices)
        .bind(answer_index)
        .bind(explanation)
        .bind(position)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    /// Find question by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<QuizQuestion>> {
        let question =
            sqlx::query_as::<_, QuizQuestion>(r#"SELECT * FROM quiz_questions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(question)
    }

    /// All questions of a topic in quiz order
    pub async fn list_by_topic(pool: &PgPool, topic_id: &Uuid) -> AppResult<Vec<QuizQuestion>> {
        let questions = sqlx::query_as::<_, QuizQuestion>(
            r#"
            SELECT * FROM quiz_questions
            WHERE topic_id = $1
            ORDER BY position, created_at
            "#,
        )
        .bind(topic_id)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// Next free position in a topic's quiz
    pub async fn next_position(pool: &PgPool, topic_id: &Uuid) -> AppResult<i32> {
        let position: i32 = sqlx::query_scalar(
            r#"SELECT COALESCE(MAX(position) + 1, 0) FROM quiz_questions WHERE topic_id = $1"#,
        )
        .bind(topic_id)
        .fetch_one(pool)
        .await?;

        Ok(position)
    }

    /// Replace a question's fields. Choices and answer are validated together
    /// by the caller, so the whole row is written at once.
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        question: &str,
        choices: &[String],
        answer_index: i32,
        explanation: Option<&str>,
        position: i32,
    ) -> AppResult<QuizQuestion> {
        let updated = sqlx::query_as::<_, QuizQuestion>(
            r#"
            UPDATE quiz_questions
            SET
                question = $2,
                choices = $3,
                answer_index = $4,
                explanation = $5,
                position = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(question)
        .bind(choices)
        .bind(answer_index)
        .bind(explanation)
        .bind(position)
        .fetch_one(pool)
        .await?;

        Ok(updated)
    }

    /// Delete question
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM quiz_questions WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of questions in a topic's quiz
    pub async fn count_by_topic(pool: &PgPool, topic_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM quiz_questions WHERE topic_id = $1"#)
                .bind(topic_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Count total questions
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM quiz_questions"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
