//! Story service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::repositories::StoryRepository,
    error::{AppError, AppResult},
    handlers::{
        admin::request::{CreateStoryRequest, UpdateStoryRequest},
        stories::response::StorySummary,
    },
    models::Story,
    utils::sanitize_string,
};

/// Story service for business logic
pub struct StoryService;

impl StoryService {
    /// List stories newest first
    pub async fn list_stories(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        published_only: bool,
    ) -> AppResult<(Vec<StorySummary>, i64)> {
        let offset = (page.saturating_sub(1) as i64) * per_page as i64;
        let limit = per_page as i64;

        let (stories, total) = StoryRepository::list(pool, offset, limit, published_only).await?;

        Ok((stories.into_iter().map(StorySummary::from).collect(), total))
    }

    /// Get a story by ID
    pub async fn get_story(pool: &PgPool, id: &Uuid, published_only: bool) -> AppResult<Story> {
        StoryRepository::find_by_id(pool, id, published_only)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))
    }

    /// Create a new story
    pub async fn create_story(
        pool: &PgPool,
        author_id: &Uuid,
        payload: CreateStoryRequest,
    ) -> AppResult<Story> {
        let story = StoryRepository::create(
            pool,
            &sanitize_string(&payload.title),
            payload.summary.as_deref(),
            &payload.content,
            payload.image_url.as_deref(),
            payload.is_published.unwrap_or(false),
            author_id,
        )
        .await?;

        info!(story_id = %story.id, author_id = %author_id, "Story created");
        Ok(story)
    }

    /// Update a story
    pub async fn update_story(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateStoryRequest,
    ) -> AppResult<Story> {
        Self::get_story(pool, id, false).await?;

        let title = payload.title.as_deref().map(sanitize_string);

        let story = StoryRepository::update(
            pool,
            id,
            title.as_deref(),
            payload.summary.as_deref(),
            payload.content.as_deref(),
            payload.image_url.as_deref(),
            payload.is_published,
        )
        .await?;

        info!(story_id = %story.id, "Story updated");
        Ok(story)
    }

    /// Delete a story
    pub async fn delete_story(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !StoryRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Story not found".to_string()));
        }

        info!(story_id = %id, "Story deleted");
        Ok(())
    }
}
