//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod health;
pub mod leaderboard;
pub mod scores;
pub mod stories;
pub mod topics;
pub mod users;

use axum::{Router, middleware};

use crate::{
    middleware::{auth_middleware, rate_limit_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .nest("/auth", auth::protected_routes())
        .nest("/topics", topics::protected_routes())
        .nest("/scores", scores::routes())
        .nest("/users", users::routes())
        .nest("/leaderboard", leaderboard::protected_routes())
        .nest("/admin", admin::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/topics", topics::routes())
        .nest("/stories", stories::routes())
        .nest("/leaderboard", leaderboard::routes())
        .merge(authenticated)
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}
