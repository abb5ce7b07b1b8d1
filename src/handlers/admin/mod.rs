//! Admin dashboard handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Content management
        .route("/topics", get(handler::list_topics).post(handler::create_topic))
        .route(
            "/topics/{id}",
            put(handler::update_topic).delete(handler::delete_topic),
        )
        .route(
            "/topics/{id}/questions",
            get(handler::list_questions).post(handler::create_question),
        )
        .route(
            "/questions/{id}",
            put(handler::update_question).delete(handler::delete_question),
        )
        .route("/stories", get(handler::list_stories).post(handler::create_story))
        .route(
            "/stories/{id}",
            put(handler::update_story).delete(handler::delete_story),
        )
        // User management
        .route("/users", get(handler::list_all_users))
        .route("/users/{id}/role", put(handler::update_user_role))
        // Reporting
        .route("/stats", get(handler::get_system_stats))
        .route("/leaderboard", get(handler::get_leaderboard))
}
