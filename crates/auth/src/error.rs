//! Token and authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by a [`TokenMaker`](crate::TokenMaker)
#[derive(Debug, Error)]
pub enum TokenError {
    /// Secret key shorter than the accepted minimum. Fatal at startup.
    #[error("invalid key size: must be at least {min} characters")]
    WeakKey { min: usize },

    #[error("token duration must be positive")]
    NonPositiveDuration,

    /// Expiry would fall outside the representable timestamp range
    #[error("token duration is out of range")]
    DurationOutOfRange,

    #[error("failed to sign token: {0}")]
    SigningFailure(#[source] jsonwebtoken::errors::Error),

    /// Signature mismatch, structural corruption or unsupported algorithm
    #[error("token is invalid")]
    InvalidToken,

    #[error("token has expired")]
    ExpiredToken,
}

/// Rejection produced by the auth gate.
///
/// Every variant is rendered as `401 Unauthorized`; only the message tells
/// the caller what went wrong.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization is not provided")]
    MissingAuthorization,

    #[error("invalid authorization")]
    InvalidAuthorization,

    #[error("unsupported authorization type")]
    UnsupportedAuthorizationType,

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AuthError::InvalidAuthorization => "INVALID_AUTHORIZATION",
            AuthError::UnsupportedAuthorizationType => "UNSUPPORTED_AUTHORIZATION_TYPE",
            AuthError::Token(TokenError::ExpiredToken) => "EXPIRED_TOKEN",
            AuthError::Token(_) => "INVALID_TOKEN",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": self.error_code(),
            "message": self.to_string(),
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
