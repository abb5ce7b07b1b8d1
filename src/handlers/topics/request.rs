//! Topic and quiz request DTOs

use std::collections::HashMap;

use serde::Deserialize;
use uuid::Uuid;

/// List topics query parameters
#[derive(Debug, Deserialize)]
pub struct ListTopicsQuery {
    pub search: Option<String>,
}

/// Quiz submission: question id -> chosen choice index
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: HashMap<Uuid, i32>,
}
