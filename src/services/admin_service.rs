//! Admin service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::repositories::{
        QuestionRepository, ScoreRepository, StoryRepository, TopicRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::admin::response::{AdminUserResponse, SystemStatsResponse},
    models::User,
};

/// Admin service for system management
pub struct AdminService;

impl AdminService {
    /// List all users with admin details
    pub async fn list_all_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<AdminUserResponse>, i64)> {
        let offset = (page.saturating_sub(1) as i64) * per_page as i64;
        let limit = per_page as i64;

        let (users, total) = UserRepository::list(pool, offset, limit, search, role).await?;

        Ok((users.into_iter().map(AdminUserResponse::from).collect(), total))
    }

    /// Change a user's role. An admin cannot change their own role.
    pub async fn update_user_role(
        pool: &PgPool,
        requester_id: &Uuid,
        user_id: &Uuid,
        role: &str,
    ) -> AppResult<User> {
        if requester_id == user_id {
            return Err(AppError::Forbidden(
                "You cannot change your own role".to_string(),
            ));
        }

        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let user = UserRepository::update_role(pool, user_id, role).await?;

        info!(admin_id = %requester_id, user_id = %user_id, role = %role, "User role changed");
        Ok(user)
    }

    /// Get system statistics
    pub async fn get_system_stats(pool: &PgPool) -> AppResult<SystemStatsResponse> {
        let (total_users, total_topics, total_questions, total_stories, total_scores) = futures::try_join!(
            UserRepository::count(pool),
            TopicRepository::count(pool),
            QuestionRepository::count(pool),
            StoryRepository::count(pool),
            ScoreRepository::count(pool),
        )?;

        Ok(SystemStatsResponse {
            total_users,
            total_topics,
            total_questions,
            total_stories,
            total_scores,
        })
    }
}
