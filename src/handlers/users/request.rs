//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH},
    utils::validation::{validate_name, validate_phone},
};

/// Update own profile request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    /// Required when changing the password
    pub current_password: Option<String>,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub new_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_is_valid() {
        let request: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_checks_present_fields() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"phone": "99", "new_password": "short"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("new_password"));
    }
}
