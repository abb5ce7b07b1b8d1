//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod leaderboard;
pub mod question;
pub mod score;
pub mod story;
pub mod topic;
pub mod user;

pub use leaderboard::*;
pub use question::*;
pub use score::*;
pub use story::*;
pub use topic::*;
pub use user::*;
