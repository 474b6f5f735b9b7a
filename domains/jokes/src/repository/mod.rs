//! Repository implementations for the jokes domain

pub mod jokes;

use sqlx::PgPool;

pub use jokes::JokeRepository;

/// Combined repository access for the jokes domain
#[derive(Clone)]
pub struct JokesRepositories {
    pub jokes: JokeRepository,
}

impl JokesRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jokes: JokeRepository::new(pool),
        }
    }
}
