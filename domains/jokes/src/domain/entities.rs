//! Domain entities for the jokes domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Joke as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Joke {
    pub id: i32,
    /// Username of the writer
    pub author: String,
    pub title: String,
    pub text: String,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Joke {
    /// Whether `username` wrote this joke
    pub fn is_written_by(&self, username: &str) -> bool {
        self.author == username
    }
}

/// Fields required to publish a joke
#[derive(Debug, Clone)]
pub struct NewJoke {
    pub author: String,
    pub title: String,
    pub text: String,
    pub explanation: String,
}

/// Joke fields editable one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeField {
    Title,
    Text,
    Explanation,
}

impl JokeField {
    pub fn column(&self) -> &'static str {
        match self {
            JokeField::Title => "title",
            JokeField::Text => "text",
            JokeField::Explanation => "explanation",
        }
    }
}

impl std::fmt::Display for JokeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}
