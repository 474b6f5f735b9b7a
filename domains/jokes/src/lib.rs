//! Jokes domain: publishing, browsing and editing jokes

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::*;
pub use repository::{JokeRepository, JokesRepositories};

pub use api::routes;
pub use api::JokesState;
