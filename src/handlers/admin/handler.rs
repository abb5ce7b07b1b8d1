//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    handlers::{
        auth::response::UserResponse,
        leaderboard::{request::LeaderboardQuery, response::LeaderboardResponse},
        stories::{request::ListStoriesQuery, response::StoryResponse},
        topics::{request::ListTopicsQuery, response::TopicResponse},
    },
    middleware::auth::{AuthenticatedUser, require_admin},
    models::QuizQuestion,
    services::{AdminService, LeaderboardService, QuizService, StoryService, TopicService},
    state::AppState,
};

use super::{
    request::{
        CreateQuestionRequest, CreateStoryRequest, CreateTopicRequest, ListUsersQuery,
        UpdateQuestionRequest, UpdateStoryRequest, UpdateTopicRequest, UpdateUserRoleRequest,
    },
    response::{
        AdminQuestionsListResponse, AdminStoriesListResponse, AdminTopicsListResponse,
        AdminUsersListResponse, SystemStatsResponse,
    },
};

fn page_params(page: Option<u32>, per_page: Option<u32>) -> (u32, u32) {
    (
        page.unwrap_or(1).max(1),
        per_page.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
    )
}

// =============================================================================
// TOPICS
// =============================================================================

/// List every topic, published or not
pub async fn list_topics(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListTopicsQuery>,
) -> AppResult<Json<AdminTopicsListResponse>> {
    require_admin(&auth_user)?;

    let topics = TopicService::list_topics(state.db(), query.search.as_deref(), false).await?;
    Ok(Json(AdminTopicsListResponse { topics }))
}

/// Create a topic
pub async fn create_topic(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateTopicRequest>,
) -> AppResult<(StatusCode, Json<TopicResponse>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let topic = TopicService::create_topic(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(topic.into())))
}

/// Update a topic
pub async fn update_topic(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTopicRequest>,
) -> AppResult<Json<TopicResponse>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let topic = TopicService::update_topic(state.db(), &id, payload).await?;
    Ok(Json(topic.into()))
}

/// Delete a topic with its questions and scores
pub async fn delete_topic(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    TopicService::delete_topic(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// QUESTIONS
// =============================================================================

/// List a topic's questions with answers
pub async fn list_questions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(topic_id): Path<Uuid>,
) -> AppResult<Json<AdminQuestionsListResponse>> {
    require_admin(&auth_user)?;

    let questions = QuizService::list_questions(state.db(), &topic_id).await?;
    Ok(Json(AdminQuestionsListResponse {
        topic_id,
        questions,
    }))
}

/// Add a question to a topic
pub async fn create_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(topic_id): Path<Uuid>,
    Json(payload): Json<CreateQuestionRequest>,
) -> AppResult<(StatusCode, Json<QuizQuestion>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let question = QuizService::create_question(state.db(), &topic_id, payload).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// Update a question
pub async fn update_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> AppResult<Json<QuizQuestion>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let question = QuizService::update_question(state.db(), &id, payload).await?;
    Ok(Json(question))
}

/// Delete a question
pub async fn delete_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    QuizService::delete_question(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// STORIES
// =============================================================================

/// List every story, drafts included
pub async fn list_stories(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListStoriesQuery>,
) -> AppResult<Json<AdminStoriesListResponse>> {
    require_admin(&auth_user)?;

    let (page, per_page) = page_params(query.page, query.per_page);
    let (stories, total) = StoryService::list_stories(state.db(), page, per_page, false).await?;

    Ok(Json(AdminStoriesListResponse {
        stories,
        total,
        page,
        per_page,
    }))
}

/// Create a story authored by the caller
pub async fn create_story(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateStoryRequest>,
) -> AppResult<(StatusCode, Json<StoryResponse>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let story = StoryService::create_story(state.db(), &auth_user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(story.into())))
}

/// Update a story
pub async fn update_story(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStoryRequest>,
) -> AppResult<Json<StoryResponse>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let story = StoryService::update_story(state.db(), &id, payload).await?;
    Ok(Json(story.into()))
}

/// Delete a story
pub async fn delete_story(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    StoryService::delete_story(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// USERS AND REPORTING
// =============================================================================

/// List all users with admin details
pub async fn list_all_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<AdminUsersListResponse>> {
    require_admin(&auth_user)?;

    let (page, per_page) = page_params(query.page, query.per_page);

    let (users, total) = AdminService::list_all_users(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(AdminUsersListResponse {
        users,
        total,
        page,
        per_page,
    }))
}

/// Update a user's role
pub async fn update_user_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRoleRequest>,
) -> AppResult<Json<UserResponse>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let user = AdminService::update_user_role(state.db(), &auth_user.id, &id, &payload.role).await?;
    Ok(Json(user.into()))
}

/// Get system statistics
pub async fn get_system_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<SystemStatsResponse>> {
    require_admin(&auth_user)?;

    let stats = AdminService::get_system_stats(state.db()).await?;
    Ok(Json(stats))
}

/// Leaderboard with full phone numbers
pub async fn get_leaderboard(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<Json<LeaderboardResponse>> {
    require_admin(&auth_user)?;

    let players = LeaderboardService::get_leaderboard(state.db()).await?;
    Ok(Json(LeaderboardResponse::new(players, query.limit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params() {
        assert_eq!(page_params(None, None), (1, DEFAULT_PAGE_SIZE));
        assert_eq!(page_params(Some(0), Some(0)), (1, 1));
        assert_eq!(page_params(Some(3), Some(1000)), (3, MAX_PAGE_SIZE));
    }
}
