//! Auth gate: bearer-token check in front of protected routes
//!
//! Protected routers are wrapped with [`require_auth`]:
//! ```ignore
//! Router::new()
//!     .route("/users/me", get(get_me))
//!     .route_layer(middleware::from_fn_with_state(tokens, require_auth))
//! ```
//! Handlers then take [`AuthPayload`](crate::AuthPayload) to read the identity.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::claims::Payload;
use crate::error::AuthError;
use crate::maker::{SharedTokenMaker, TokenMaker};

/// Scheme accepted in the `Authorization` header, compared case-insensitively
pub const AUTH_TYPE_BEARER: &str = "bearer";

/// Run the header checks and token verification for a single request.
pub fn authorize(headers: &HeaderMap, tokens: &dyn TokenMaker) -> Result<Payload, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingAuthorization)?;

    let header = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorization)?;

    let mut fields = header.split_whitespace();
    let (Some(scheme), Some(access_token)) = (fields.next(), fields.next()) else {
        return Err(AuthError::InvalidAuthorization);
    };

    if !scheme.eq_ignore_ascii_case(AUTH_TYPE_BEARER) {
        return Err(AuthError::UnsupportedAuthorizationType);
    }

    Ok(tokens.verify_token(access_token)?)
}

/// Middleware rejecting requests without a valid bearer token.
///
/// On success the verified [`Payload`] is stored in the request extensions.
pub async fn require_auth(
    State(tokens): State<SharedTokenMaker>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let payload = authorize(request.headers(), tokens.as_ref()).map_err(|e| {
        tracing::debug!(
            error = %e,
            method = %request.method(),
            path = %request.uri().path(),
            "Request rejected by auth gate"
        );
        e
    })?;

    request.extensions_mut().insert(payload);

    Ok(next.run(request).await)
}
