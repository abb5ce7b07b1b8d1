//! Topic handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{QuizService, TopicService},
    state::AppState,
};

use super::{
    request::{ListTopicsQuery, SubmitQuizRequest},
    response::{QuizResponse, QuizResultResponse, TopicResponse, TopicsListResponse},
};

/// List published topics
pub async fn list_topics(
    State(state): State<AppState>,
    Query(query): Query<ListTopicsQuery>,
) -> AppResult<Json<TopicsListResponse>> {
    let topics = TopicService::list_topics(state.db(), query.search.as_deref(), true).await?;
    Ok(Json(TopicsListResponse { topics }))
}

/// Get a published topic with its lesson
pub async fn get_topic(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TopicResponse>> {
    let topic = TopicService::get_published_topic(state.db(), &id).await?;
    Ok(Json(topic.into()))
}

/// Get the quiz of a published topic (answers hidden)
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QuizResponse>> {
    let quiz = QuizService::get_quiz(state.db(), &id).await?;
    Ok(Json(quiz))
}

/// Grade a quiz attempt and record the score
pub async fn submit_quiz(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitQuizRequest>,
) -> AppResult<Json<QuizResultResponse>> {
    let result = QuizService::submit_quiz(state.db(), &auth_user.id, &id, &payload.answers).await?;
    Ok(Json(result))
}
