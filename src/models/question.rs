//! Quiz question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Quiz question database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub question: String,
    pub choices: Vec<String>,
    /// Index into `choices` of the correct answer
    pub answer_index: i32,
    pub explanation: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuizQuestion {
    /// Check whether the given choice index is the correct answer
    pub fn is_correct(&self, choice: i32) -> bool {
        choice == self.answer_index
    }
}
