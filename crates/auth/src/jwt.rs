//! HS256 JWT token maker

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::Payload;
use crate::error::TokenError;
use crate::maker::{Clock, SystemClock, TokenMaker};

/// Minimum accepted length of the symmetric secret, in bytes
pub const MIN_SECRET_KEY_SIZE: usize = 32;

/// Token maker signing HS256 JWTs with a symmetric secret
#[derive(Clone)]
pub struct JwtMaker {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl JwtMaker {
    /// Create a maker reading time from the system clock
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    /// Create a maker reading time from `clock`
    pub fn with_clock(secret: &str, clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_KEY_SIZE {
            return Err(TokenError::WeakKey {
                min: MIN_SECRET_KEY_SIZE,
            });
        }

        // Expiry is checked against the injected clock after decoding
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        })
    }
}

impl std::fmt::Debug for JwtMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtMaker")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}

impl TokenMaker for JwtMaker {
    fn create_token(
        &self,
        user_id: i32,
        username: &str,
        email: &str,
        duration: Duration,
    ) -> Result<String, TokenError> {
        let payload = Payload::new(user_id, username, email, duration, self.clock.now())?;

        encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &self.encoding_key,
        )
        .map_err(TokenError::SigningFailure)
    }

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        let token_data =
            decode::<Payload>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "JWT validation failed");
                TokenError::InvalidToken
            })?;

        let payload = token_data.claims;
        if payload.is_expired_at(self.clock.now()) {
            return Err(TokenError::ExpiredToken);
        }

        Ok(payload)
    }
}
