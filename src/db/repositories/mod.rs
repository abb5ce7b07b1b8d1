//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod question_repo;
pub mod score_repo;
pub mod story_repo;
pub mod topic_repo;
pub mod user_repo;

pub use question_repo::QuestionRepository;
pub use score_repo::ScoreRepository;
pub use story_repo::StoryRepository;
pub use topic_repo::TopicRepository;
pub use user_repo::UserRepository;
