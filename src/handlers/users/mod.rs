//! Handlers for the signed-in user's own account

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

/// User routes (all authenticated)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", put(handler::update_profile))
        .route("/me/scores", get(handler::get_my_scores))
}
