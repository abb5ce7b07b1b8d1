//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        MAX_CONTENT_LENGTH, MAX_QUESTION_LENGTH, MAX_STORY_TITLE_LENGTH, MAX_SUMMARY_LENGTH,
        MAX_TOPIC_TITLE_LENGTH,
    },
    utils::validation::{validate_choices, validate_role},
};

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub role: Option<String>,
}

/// Update user role request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRoleRequest {
    #[validate(custom(function = "validate_role"))]
    pub role: String,
}

/// Create topic request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTopicRequest {
    #[validate(length(min = 1, max = MAX_TOPIC_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_SUMMARY_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = MAX_CONTENT_LENGTH))]
    pub content: String,

    #[validate(url)]
    pub cover_image_url: Option<String>,

    pub position: Option<i32>,
    pub is_published: Option<bool>,
}

/// Update topic request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTopicRequest {
    #[validate(length(min = 1, max = MAX_TOPIC_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_SUMMARY_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = MAX_CONTENT_LENGTH))]
    pub content: Option<String>,

    #[validate(url)]
    pub cover_image_url: Option<String>,

    pub position: Option<i32>,
    pub is_published: Option<bool>,
}

/// Create quiz question request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = MAX_QUESTION_LENGTH))]
    pub question: String,

    #[validate(custom(function = "validate_choices"))]
    pub choices: Vec<String>,

    #[validate(range(min = 0))]
    pub answer_index: i32,

    #[validate(length(max = MAX_QUESTION_LENGTH))]
    pub explanation: Option<String>,

    /// Appended after the last question when absent
    pub position: Option<i32>,
}

/// Update quiz question request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, max = MAX_QUESTION_LENGTH))]
    pub question: Option<String>,

    #[validate(custom(function = "validate_choices"))]
    pub choices: Option<Vec<String>>,

    #[validate(range(min = 0))]
    pub answer_index: Option<i32>,

    #[validate(length(max = MAX_QUESTION_LENGTH))]
    pub explanation: Option<String>,

    pub position: Option<i32>,
}

/// Create story request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStoryRequest {
    #[validate(length(min = 1, max = MAX_STORY_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_SUMMARY_LENGTH))]
    pub summary: Option<String>,

    #[validate(length(min = 1, max = MAX_CONTENT_LENGTH))]
    pub content: String,

    #[validate(url)]
    pub image_url: Option<String>,

    pub is_published: Option<bool>,
}

/// Update story request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStoryRequest {
    #[validate(length(min = 1, max = MAX_STORY_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_SUMMARY_LENGTH))]
    pub summary: Option<String>,

    #[validate(length(min = 1, max = MAX_CONTENT_LENGTH))]
    pub content: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub is_published: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_needs_enough_choices() {
        let request = CreateQuestionRequest {
            question: "Which link is safe?".to_string(),
            choices: vec!["only one".to_string()],
            answer_index: 0,
            explanation: None,
            position: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("choices"));
    }

    #[test]
    fn test_negative_answer_index_rejected() {
        let request = UpdateQuestionRequest {
            question: None,
            choices: None,
            answer_index: Some(-1),
            explanation: None,
            position: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let request = UpdateUserRoleRequest {
            role: "superuser".to_string(),
        };
        assert!(request.validate().is_err());

        let request = UpdateUserRoleRequest {
            role: "admin".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_topic_cover_must_be_url() {
        let request = CreateTopicRequest {
            title: "Phishing".to_string(),
            description: None,
            content: "# Phishing".to_string(),
            cover_image_url: Some("not a url".to_string()),
            position: None,
            is_published: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cover_image_url"));
    }
}
