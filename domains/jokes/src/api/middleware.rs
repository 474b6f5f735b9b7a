//! Jokes domain state and auth integration

use crate::JokesRepositories;
use axum::extract::FromRef;
use jokebox_auth::SharedTokenMaker;

/// Application state for the jokes domain
#[derive(Clone)]
pub struct JokesState {
    pub repos: JokesRepositories,
    pub tokens: SharedTokenMaker,
}

impl FromRef<JokesState> for SharedTokenMaker {
    fn from_ref(state: &JokesState) -> Self {
        state.tokens.clone()
    }
}
