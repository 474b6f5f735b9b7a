//! Jokebox application composition root
//!
//! Composes the domain routers into a single application.

use axum::Router;
use jokebox_auth::{JwtMaker, SharedTokenMaker};
use jokebox_common::AppConfig;
use jokebox_jokes::{JokesRepositories, JokesState};
use jokebox_users::{UsersRepositories, UsersState};
use sqlx::PgPool;
use std::sync::Arc;

/// Create the main application router with all routes.
///
/// Fails when the token signing key is too short.
pub async fn create_app(config: AppConfig, pool: PgPool) -> Result<Router, anyhow::Error> {
    let tokens: SharedTokenMaker = Arc::new(
        JwtMaker::new(&config.token_symmetric_key)
            .map_err(|e| anyhow::anyhow!("cannot create token maker: {}", e))?,
    );

    let users_state = UsersState {
        repos: UsersRepositories::new(pool.clone()),
        tokens: tokens.clone(),
        access_token_duration: config.access_token_duration,
    };

    let jokes_state = JokesState {
        repos: JokesRepositories::new(pool),
        tokens,
    };

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { concat!("Jokebox API v", env!("CARGO_PKG_VERSION")) }),
        )
        .merge(jokebox_users::routes(users_state))
        .merge(jokebox_jokes::routes(jokes_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
