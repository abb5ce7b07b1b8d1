//! Leaderboard handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Public leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::get_leaderboard))
}

/// Leaderboard routes for signed-in users
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/me", get(handler::get_my_rank))
}
