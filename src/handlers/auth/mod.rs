//! Authentication handlers

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

/// Public authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/refresh", post(handler::refresh_token))
}

/// Authentication routes that need a valid access token
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::get_current_user))
}
