//! Input validation utilities
//!
//! Functions returning `ValidationError` plug into `#[validate(custom(...))]`
//! on request DTOs.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::constants::{
    MAX_CHOICE_LENGTH, MAX_QUESTION_CHOICES, MIN_QUESTION_CHOICES, roles,
};

/// Thai phone number: ten digits starting with 0
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[0-9]{9}$").expect("phone regex is valid"));

/// Letter first, then letters, digits, underscores or hyphens
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("username regex is valid"));

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Strip the separators people commonly type into phone numbers
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect()
}

/// Validate a phone number (separators allowed, see `normalize_phone`)
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(&normalize_phone(phone)) {
        Ok(())
    } else {
        Err(error("phone", "Phone must be a 10-digit number starting with 0"))
    }
}

/// Validate username format (length is checked separately)
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(error(
            "username",
            "Username must start with a letter and contain only letters, numbers, underscores, and hyphens",
        ))
    }
}

/// Validate a display name: not blank after trimming
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if sanitize_string(name).is_empty() {
        Err(error("name", "Name cannot be empty"))
    } else {
        Ok(())
    }
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    if roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err(error("role", "Role must be 'admin' or 'learner'"))
    }
}

/// Validate the answer choices of a quiz question
pub fn validate_choices(choices: &[String]) -> Result<(), ValidationError> {
    if choices.len() < MIN_QUESTION_CHOICES || choices.len() > MAX_QUESTION_CHOICES {
        return Err(error("choices", "A question needs between 2 and 6 choices"));
    }
    if choices.iter().any(|c| c.trim().is_empty()) {
        return Err(error("choices", "Choices cannot be empty"));
    }
    if choices.iter().any(|c| c.chars().count() > MAX_CHOICE_LENGTH) {
        return Err(error("choices", "A choice is too long"));
    }
    Ok(())
}

/// Check that an answer index points into the choices
pub fn answer_in_range(answer_index: i32, choice_count: usize) -> bool {
    answer_index >= 0 && (answer_index as usize) < choice_count
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0812345678").is_ok());
        assert!(validate_phone("081-234-5678").is_ok());
        assert!(validate_phone("081 234 5678").is_ok());
        assert!(validate_phone("812345678").is_err()); // Missing leading zero
        assert!(validate_phone("08123456789").is_err()); // Too long
        assert!(validate_phone("08a2345678").is_err());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("081-234-5678"), "0812345678");
        assert_eq!(normalize_phone("(02) 123 4567"), "021234567");
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
        assert!(validate_username("สมชาย").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("สมชาย ใจดี").is_ok());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("admin").is_ok());
        assert!(validate_role("learner").is_ok());
        assert!(validate_role("organizer").is_err());
    }

    #[test]
    fn test_validate_choices() {
        let ok = vec!["ลิงก์ปลอม".to_string(), "ลิงก์จริง".to_string()];
        assert!(validate_choices(&ok).is_ok());
        assert!(validate_choices(&["only one".to_string()]).is_err());
        assert!(validate_choices(&["a".to_string(), " ".to_string()]).is_err());
        let too_many: Vec<String> = (0..7).map(|i| i.to_string()).collect();
        assert!(validate_choices(&too_many).is_err());
    }

    #[test]
    fn test_answer_in_range() {
        assert!(answer_in_range(0, 4));
        assert!(answer_in_range(3, 4));
        assert!(!answer_in_range(4, 4));
        assert!(!answer_in_range(-1, 4));
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello\u{0007} "), "hello");
    }
}
