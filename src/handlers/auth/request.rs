//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
        MIN_USERNAME_LENGTH,
    },
    utils::validation::{validate_name, validate_phone, validate_username},
};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = MIN_USERNAME_LENGTH, max = MAX_USERNAME_LENGTH),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    /// Name shown on the leaderboard
    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Can be either username or email
    #[validate(length(min = 1))]
    pub identifier: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    /// Refresh token of the session to end
    pub refresh_token: Option<String>,
    /// End every session of the user
    pub all_sessions: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "malee".to_string(),
            email: "malee@example.com".to_string(),
            password: "Password123".to_string(),
            name: "มาลี".to_string(),
            phone: "089-123-4567".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn test_registration_rejects_bad_phone() {
        let mut request = register_request();
        request.phone = "12345".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_registration_rejects_short_password_and_bad_username() {
        let mut request = register_request();
        request.password = "short".to_string();
        request.username = "9lives".to_string();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("username"));
    }
}
