//! Repository implementations for the users domain

pub mod transactions;
pub mod users;

use sqlx::{PgPool, Postgres, Transaction};

pub use transactions::{delete_jokes_by_author_tx, delete_user_tx};
pub use users::UserRepository;

/// Combined repository access for the users domain
#[derive(Clone)]
pub struct UsersRepositories {
    pool: PgPool,
    pub users: UserRepository,
}

impl UsersRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
