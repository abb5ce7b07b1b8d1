//! Topic service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::repositories::TopicRepository,
    error::{AppError, AppResult},
    handlers::admin::request::{CreateTopicRequest, UpdateTopicRequest},
    models::{Topic, TopicWithStats},
    utils::sanitize_string,
};

/// Topic service for business logic
pub struct TopicService;

impl TopicService {
    /// List topics with question counts
    pub async fn list_topics(
        pool: &PgPool,
        search: Option<&str>,
        published_only: bool,
    ) -> AppResult<Vec<TopicWithStats>> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        TopicRepository::list(pool, search, published_only).await
    }

    /// Get a topic visible on the public site
    pub async fn get_published_topic(pool: &PgPool, id: &Uuid) -> AppResult<Topic> {
        TopicRepository::find_published(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))
    }

    /// Get any topic, published or not
    pub async fn get_topic(pool: &PgPool, id: &Uuid) -> AppResult<Topic> {
        TopicRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))
    }

    /// Create a new topic
    pub async fn create_topic(pool: &PgPool, payload: CreateTopicRequest) -> AppResult<Topic> {
        let topic = TopicRepository::create(
            pool,
            &sanitize_string(&payload.title),
            payload.description.as_deref(),
            &payload.content,
            payload.cover_image_url.as_deref(),
            payload.position.unwrap_or(0),
            payload.is_published.unwrap_or(false),
        )
        .await?;

        info!(topic_id = %topic.id, title = %topic.title, "Topic created");
        Ok(topic)
    }

    /// Update a topic
    pub async fn update_topic(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateTopicRequest,
    ) -> AppResult<Topic> {
        Self::get_topic(pool, id).await?;

        let title = payload.title.as_deref().map(sanitize_string);

        let topic = TopicRepository::update(
            pool,
            id,
            title.as_deref(),
            payload.description.as_deref(),
            payload.content.as_deref(),
            payload.cover_image_url.as_deref(),
            payload.position,
            payload.is_published,
        )
        .await?;

        info!(topic_id = %topic.id, "Topic updated");
        Ok(topic)
    }

    /// Delete a topic together with its questions and scores
    pub async fn delete_topic(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !TopicRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Topic not found".to_string()));
        }

        info!(topic_id = %id, "Topic deleted");
        Ok(())
    }
}
