//! Users domain state and auth integration

use crate::UsersRepositories;
use axum::extract::FromRef;
use chrono::Duration;
use jokebox_auth::SharedTokenMaker;

/// Application state for the users domain
#[derive(Clone)]
pub struct UsersState {
    pub repos: UsersRepositories,
    pub tokens: SharedTokenMaker,
    /// Lifetime of access tokens issued at login
    pub access_token_duration: Duration,
}

impl FromRef<UsersState> for SharedTokenMaker {
    fn from_ref(state: &UsersState) -> Self {
        state.tokens.clone()
    }
}
