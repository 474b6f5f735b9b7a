//! Axum extractors for authentication

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::claims::Payload;
use crate::error::AuthError;

/// Verified identity of the caller.
///
/// Only available on routes behind [`require_auth`](crate::require_auth);
/// anywhere else extraction fails as if no authorization was sent.
#[derive(Debug, Clone)]
pub struct AuthPayload(pub Payload);

impl<S> FromRequestParts<S> for AuthPayload
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Payload>()
            .cloned()
            .map(AuthPayload)
            .ok_or(AuthError::MissingAuthorization)
    }
}
