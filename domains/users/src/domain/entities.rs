//! Domain entities for the users domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum username length, matching the `users.username` column
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// User account as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub avatar: String,
    pub fullname: String,
    pub bio: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to register a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
}

/// Free-text profile fields a user can edit one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Fullname,
    Status,
    Bio,
}

impl ProfileField {
    /// Column backing this field
    pub fn column(&self) -> &'static str {
        match self {
            ProfileField::Fullname => "fullname",
            ProfileField::Status => "status",
            ProfileField::Bio => "bio",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}
