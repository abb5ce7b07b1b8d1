//! Story handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    services::StoryService,
    state::AppState,
};

use super::{
    request::ListStoriesQuery,
    response::{StoriesListResponse, StoryResponse},
};

/// List published stories, newest first
pub async fn list_stories(
    State(state): State<AppState>,
    Query(query): Query<ListStoriesQuery>,
) -> AppResult<Json<StoriesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    let (stories, total) = StoryService::list_stories(state.db(), page, per_page, true).await?;

    Ok(Json(StoriesListResponse {
        stories,
        total,
        page,
        per_page,
    }))
}

/// Get a published story
pub async fn get_story(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StoryResponse>> {
    let story = StoryService::get_story(state.db(), &id, true).await?;
    Ok(Json(story.into()))
}
