//! Transactional free functions for the users domain

use jokebox_common::RepositoryError;
use sqlx::{Postgres, Transaction};

/// Delete every joke written by `username` within an existing transaction.
///
/// Returns the number of deleted jokes.
pub async fn delete_jokes_by_author_tx(
    transaction: &mut Transaction<'_, Postgres>,
    username: &str,
) -> std::result::Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM jokes WHERE author = $1")
        .bind(username)
        .execute(&mut **transaction)
        .await?;

    Ok(result.rows_affected())
}

/// Delete a user within an existing transaction.
///
/// Returns `RepositoryError::NotFound` if no such user exists.
pub async fn delete_user_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: i32,
) -> std::result::Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&mut **transaction)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}
