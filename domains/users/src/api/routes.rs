//! Route definitions for the users domain API

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use jokebox_auth::require_auth;

use super::handlers::users;
use super::middleware::UsersState;

/// Routes open to anonymous callers
fn public_routes() -> Router<UsersState> {
    Router::new()
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/users/login", post(users::login_user))
        .route("/users/verify/email", get(users::verify_email))
}

/// Routes requiring a bearer token
fn account_routes(state: &UsersState) -> Router<UsersState> {
    Router::new()
        .route("/users/me", get(users::get_me))
        .route("/users/password", put(users::update_password))
        .route("/users/fullname", put(users::update_fullname))
        .route("/users/status", put(users::update_status))
        .route("/users/bio", put(users::update_bio))
        .route("/users", axum::routing::delete(users::delete_user))
        .route_layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            require_auth,
        ))
}

/// Create all users domain API routes
pub fn routes(state: UsersState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(account_routes(&state))
        .with_state(state)
}
