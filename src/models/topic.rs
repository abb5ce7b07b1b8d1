//! Topic (lesson) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Topic database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Lesson body (markdown)
    pub content: String,
    pub cover_image_url: Option<String>,
    /// Display order on the learning page, lowest first
    pub position: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Topic row with the number of quiz questions attached
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopicWithStats {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub position: i32,
    pub is_published: bool,
    pub question_count: i64,
}
