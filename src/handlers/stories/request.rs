//! Story request DTOs

use serde::Deserialize;

/// List stories query parameters
#[derive(Debug, Deserialize)]
pub struct ListStoriesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
