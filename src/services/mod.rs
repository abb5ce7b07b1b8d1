//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod leaderboard_service;
pub mod quiz_service;
pub mod score_service;
pub mod story_service;
pub mod topic_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use leaderboard_service::LeaderboardService;
pub use quiz_service::QuizService;
pub use score_service::ScoreService;
pub use story_service::StoryService;
pub use topic_service::TopicService;
pub use user_service::UserService;
