//! Access token claims

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TokenError;

/// Identity claims carried inside an access token.
///
/// Timestamps are kept at whole-second precision so that the claims decoded
/// from a token compare equal to the ones it was created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Unique token id
    pub id: Uuid,
    /// Subject (user ID)
    pub user_id: i32,
    pub username: String,
    pub email: String,
    /// Issued at
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,
    /// Expires at
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expired_at: DateTime<Utc>,
}

impl Payload {
    /// Build fresh claims valid from `now` for `duration`.
    pub fn new(
        user_id: i32,
        username: impl Into<String>,
        email: impl Into<String>,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<Self, TokenError> {
        if duration <= Duration::zero() {
            return Err(TokenError::NonPositiveDuration);
        }

        let issued_at = now.trunc_subsecs(0);
        let expired_at = issued_at
            .checked_add_signed(duration)
            .ok_or(TokenError::DurationOutOfRange)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            username: username.into(),
            email: email.into(),
            issued_at,
            expired_at,
        })
    }

    /// Whether the claims are past their expiry at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expired_at
    }
}
