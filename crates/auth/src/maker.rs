//! Token maker capability and the clock it reads time from

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::claims::Payload;
use crate::error::TokenError;

/// Creates and verifies access tokens.
///
/// Implementations are stateless apart from their key material and must be
/// safe to share across request tasks. A different signing scheme is a new
/// implementation of this trait.
pub trait TokenMaker: Send + Sync {
    /// Sign a new token for the given identity, valid for `duration`.
    fn create_token(
        &self,
        user_id: i32,
        username: &str,
        email: &str,
        duration: Duration,
    ) -> Result<String, TokenError>;

    /// Check a token's signature and expiry and return its claims.
    fn verify_token(&self, token: &str) -> Result<Payload, TokenError>;
}

/// Token maker shared between domain states
pub type SharedTokenMaker = Arc<dyn TokenMaker>;

/// Source of the current time for token issuance and expiry checks
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for tests and tooling
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
