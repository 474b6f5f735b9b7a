//! Route definitions for the jokes domain API

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use jokebox_auth::require_auth;

use super::handlers::jokes;
use super::middleware::JokesState;

fn public_routes() -> Router<JokesState> {
    Router::new()
        .route("/jokes", get(jokes::list_jokes))
        .route("/jokes/{id}", get(jokes::get_joke))
        .route("/jokes_by/{username}", get(jokes::list_jokes_by_author))
}

/// Routes requiring a bearer token
fn writer_routes(state: &JokesState) -> Router<JokesState> {
    Router::new()
        .route("/jokes", post(jokes::create_joke).delete(jokes::delete_my_jokes))
        .route("/jokes/{id}", delete(jokes::delete_joke))
        .route("/jokes/title/{id}", put(jokes::update_title))
        .route("/jokes/text/{id}", put(jokes::update_text))
        .route("/jokes/explanation/{id}", put(jokes::update_explanation))
        .route_layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            require_auth,
        ))
}

/// Create all jokes domain API routes
pub fn routes(state: JokesState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(writer_routes(&state))
        .with_state(state)
}
