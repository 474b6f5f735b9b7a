//! Joke repository

use crate::domain::entities::{Joke, JokeField, NewJoke};
use jokebox_common::RepositoryError;
use sqlx::PgPool;

const JOKE_COLUMNS: &str = "id, author, title, text, explanation, created_at, updated_at";

type Result<T> = std::result::Result<T, RepositoryError>;

#[derive(Clone)]
pub struct JokeRepository {
    pool: PgPool,
}

impl JokeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_joke: &NewJoke) -> Result<Joke> {
        let joke = sqlx::query_as::<_, Joke>(&format!(
            r#"
            INSERT INTO jokes (author, title, text, explanation)
            VALUES ($1, $2, $3, $4)
            RETURNING {JOKE_COLUMNS}
            "#
        ))
        .bind(&new_joke.author)
        .bind(&new_joke.title)
        .bind(&new_joke.text)
        .bind(&new_joke.explanation)
        .fetch_one(&self.pool)
        .await?;

        Ok(joke)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Joke>> {
        let joke = sqlx::query_as::<_, Joke>(&format!(
            "SELECT {JOKE_COLUMNS} FROM jokes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(joke)
    }

    /// List jokes, newest first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Joke>> {
        let jokes = sqlx::query_as::<_, Joke>(&format!(
            r#"
            SELECT {JOKE_COLUMNS}
            FROM jokes
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(jokes)
    }

    /// List jokes written by `author`, newest first
    pub async fn list_by_author(&self, author: &str, limit: i64, offset: i64) -> Result<Vec<Joke>> {
        let jokes = sqlx::query_as::<_, Joke>(&format!(
            r#"
            SELECT {JOKE_COLUMNS}
            FROM jokes
            WHERE author = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(author)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(jokes)
    }

    pub async fn update_field(&self, id: i32, field: JokeField, value: &str) -> Result<Option<Joke>> {
        let joke = sqlx::query_as::<_, Joke>(&format!(
            r#"
            UPDATE jokes SET
                {column} = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {JOKE_COLUMNS}
            "#,
            column = field.column()
        ))
        .bind(id)
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        Ok(joke)
    }

    /// Delete a joke, returning `RepositoryError::NotFound` if it does not exist
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM jokes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete all jokes written by `author`, returning how many were removed
    pub async fn delete_by_author(&self, author: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM jokes WHERE author = $1")
            .bind(author)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
