//! Topic and quiz response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{QuizQuestion, Topic, TopicWithStats};

/// Topic list response
#[derive(Debug, Serialize)]
pub struct TopicsListResponse {
    pub topics: Vec<TopicWithStats>,
}

/// Topic detail with lesson content
#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub position: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            description: topic.description,
            content: topic.content,
            cover_image_url: topic.cover_image_url,
            position: topic.position,
            is_published: topic.is_published,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

/// A quiz question as shown to learners (no answer)
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: Uuid,
    pub question: String,
    pub choices: Vec<String>,
    pub position: i32,
}

impl From<QuizQuestion> for PublicQuestion {
    fn from(question: QuizQuestion) -> Self {
        Self {
            id: question.id,
            question: question.question,
            choices: question.choices,
            position: question.position,
        }
    }
}

/// Quiz of a topic
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub topic_id: Uuid,
    pub topic_title: String,
    pub questions: Vec<PublicQuestion>,
}

/// Grading of a single question
#[derive(Debug, Serialize)]
pub struct QuestionResult {
    pub question_id: Uuid,
    /// `None` when the question was left unanswered
    pub selected: Option<i32>,
    pub correct_index: i32,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// Quiz submission result
#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub topic_id: Uuid,
    pub score: i64,
    pub max_score: i64,
    pub correct_count: usize,
    pub total_questions: usize,
    pub results: Vec<QuestionResult>,
}
