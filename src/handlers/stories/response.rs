//! Story response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Story;

/// Story list response
#[derive(Debug, Serialize)]
pub struct StoriesListResponse {
    pub stories: Vec<StorySummary>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Story summary for list views
#[derive(Debug, Serialize)]
pub struct StorySummary {
    pub id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Story> for StorySummary {
    fn from(story: Story) -> Self {
        Self {
            id: story.id,
            title: story.title,
            summary: story.summary,
            image_url: story.image_url,
            is_published: story.is_published,
            created_at: story.created_at,
        }
    }
}

/// Full story
#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        Self {
            id: story.id,
            title: story.title,
            summary: story.summary,
            content: story.content,
            image_url: story.image_url,
            is_published: story.is_published,
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}
