//! CyberSafe - Cybersecurity Awareness Learning Platform
//!
//! Backend for a learning site where users study cybersecurity topics, take
//! quizzes and compete on a public leaderboard.
//!
//! # Features
//!
//! - Lessons (topics) with multiple-choice quizzes graded on the server
//! - Per-topic scores with upsert semantics
//! - Leaderboard with standard competition ranking
//! - Awareness stories
//! - Admin dashboard for content and user management
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Leaderboard**: Pure aggregation and ranking

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod leaderboard;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
