//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    handlers::stories::response::StorySummary,
    models::{QuizQuestion, TopicWithStats, User},
};

/// System statistics response
#[derive(Debug, Serialize)]
pub struct SystemStatsResponse {
    pub total_users: i64,
    pub total_topics: i64,
    pub total_questions: i64,
    pub total_stories: i64,
    pub total_scores: i64,
}

/// Admin user view response
#[derive(Debug, Serialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for AdminUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            phone: user.phone,
            role: user.role,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Admin users list response
#[derive(Debug, Serialize)]
pub struct AdminUsersListResponse {
    pub users: Vec<AdminUserResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// All topics, including unpublished ones
#[derive(Debug, Serialize)]
pub struct AdminTopicsListResponse {
    pub topics: Vec<TopicWithStats>,
}

/// Questions of a topic with answers
#[derive(Debug, Serialize)]
pub struct AdminQuestionsListResponse {
    pub topic_id: Uuid,
    pub questions: Vec<QuizQuestion>,
}

/// All stories, including drafts
#[derive(Debug, Serialize)]
pub struct AdminStoriesListResponse {
    pub stories: Vec<StorySummary>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
