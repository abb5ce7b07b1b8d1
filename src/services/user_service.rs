//! User service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::request::UpdateProfileRequest,
    models::User,
    services::AuthService,
    utils::{normalize_phone, sanitize_string},
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Update the user's own profile
    pub async fn update_profile(
        pool: &PgPool,
        user_id: &Uuid,
        payload: UpdateProfileRequest,
    ) -> AppResult<User> {
        let user = Self::get_user_by_id(pool, user_id).await?;

        // Changing the password needs the current one
        let password_hash = match payload.new_password.as_deref() {
            Some(new_password) => {
                let current = payload.current_password.as_deref().ok_or_else(|| {
                    AppError::Validation("current_password is required".to_string())
                })?;

                if !AuthService::verify_password(current, &user.password_hash)? {
                    return Err(AppError::InvalidCredentials);
                }

                Some(AuthService::hash_password(new_password)?)
            }
            None => None,
        };

        if let Some(email) = payload.email.as_deref() {
            if email != user.email && UserRepository::find_by_email(pool, email).await?.is_some() {
                return Err(AppError::AlreadyExists("Email already registered".to_string()));
            }
        }

        let name = payload.name.as_deref().map(sanitize_string);
        let phone = payload.phone.as_deref().map(normalize_phone);

        let updated = UserRepository::update(
            pool,
            user_id,
            payload.email.as_deref(),
            name.as_deref(),
            phone.as_deref(),
            password_hash.as_deref(),
        )
        .await?;

        info!(
            user_id = %user_id,
            password_changed = password_hash.is_some(),
            "Profile updated"
        );
        Ok(updated)
    }
}
