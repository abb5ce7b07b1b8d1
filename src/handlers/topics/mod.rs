//! Public topic (lesson) and quiz handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Public topic routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_topics))
        .route("/{id}", get(handler::get_topic))
        .route("/{id}/quiz", get(handler::get_quiz))
}

/// Topic routes that need a signed-in learner
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/{id}/quiz/submit", post(handler::submit_quiz))
}
