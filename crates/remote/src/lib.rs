#![forbid(unsafe_code)]

pub mod http;
pub mod repository;

pub use http::{HttpInitError, HttpRepository};
pub use repository::{
    CategoryRepository, Endpoint, InMemoryRepository, LeaderboardRepository, QuestionRepository,
    Remote, RemoteError, ScoreRepository,
};
