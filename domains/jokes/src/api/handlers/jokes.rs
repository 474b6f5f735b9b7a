//! Joke API handlers
//!
//! Reading is public; writing requires a bearer token and editing or
//! deleting a joke is restricted to its author.

use axum::{extract::State, http::StatusCode, Json};
use jokebox_auth::AuthPayload;
use jokebox_common::{
    Error, Pagination, PathParam, QueryParams, RepositoryError, Result, ValidatedJson,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::JokesState;
use crate::{Joke, JokeField, NewJoke};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateJokeRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 10000))]
    pub text: String,

    #[serde(default)]
    #[validate(length(max = 10000))]
    pub explanation: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTitleRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTextRequest {
    #[validate(length(min = 1, max = 10000))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExplanationRequest {
    #[validate(length(max = 10000))]
    pub explanation: String,
}

fn joke_not_found() -> Error {
    Error::NotFound("joke not found".to_string())
}

/// Fetch a joke and make sure `username` wrote it
async fn authored_joke(state: &JokesState, id: i32, username: &str) -> Result<Joke> {
    let joke = state
        .repos
        .jokes
        .get_by_id(id)
        .await?
        .ok_or_else(joke_not_found)?;

    if !joke.is_written_by(username) {
        tracing::warn!(joke_id = id, username, author = %joke.author, "Rejected edit by non-author");
        return Err(Error::Authorization(
            "joke belongs to another user".to_string(),
        ));
    }

    Ok(joke)
}

/// GET /jokes
pub async fn list_jokes(
    State(state): State<JokesState>,
    QueryParams(pagination): QueryParams<Pagination>,
) -> Result<Json<Vec<Joke>>> {
    let jokes = state
        .repos
        .jokes
        .list(pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(jokes))
}

/// GET /jokes/{id}
pub async fn get_joke(
    State(state): State<JokesState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Joke>> {
    let joke = state
        .repos
        .jokes
        .get_by_id(id)
        .await?
        .ok_or_else(joke_not_found)?;

    Ok(Json(joke))
}

/// GET /jokes_by/{username}
pub async fn list_jokes_by_author(
    State(state): State<JokesState>,
    PathParam(username): PathParam<String>,
    QueryParams(pagination): QueryParams<Pagination>,
) -> Result<Json<Vec<Joke>>> {
    let jokes = state
        .repos
        .jokes
        .list_by_author(&username, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(jokes))
}

/// POST /jokes - Publish a joke as the caller
pub async fn create_joke(
    State(state): State<JokesState>,
    AuthPayload(payload): AuthPayload,
    ValidatedJson(request): ValidatedJson<CreateJokeRequest>,
) -> Result<(StatusCode, Json<Joke>)> {
    let new_joke = NewJoke {
        author: payload.username,
        title: request.title,
        text: request.text,
        explanation: request.explanation,
    };

    let joke = state
        .repos
        .jokes
        .create(&new_joke)
        .await
        .map_err(|e| match e {
            // Author row vanished after the token was issued
            RepositoryError::Connection(sqlx::Error::Database(ref db))
                if db.is_foreign_key_violation() =>
            {
                Error::NotFound("author not found".to_string())
            }
            other => other.into(),
        })?;

    tracing::info!(joke_id = joke.id, author = %joke.author, "Joke published");

    Ok((StatusCode::CREATED, Json(joke)))
}

async fn update_joke_field(
    state: &JokesState,
    id: i32,
    username: &str,
    field: JokeField,
    value: &str,
) -> Result<Json<Joke>> {
    authored_joke(state, id, username).await?;

    let joke = state
        .repos
        .jokes
        .update_field(id, field, value)
        .await?
        .ok_or_else(joke_not_found)?;

    tracing::debug!(joke_id = id, field = %field, "Joke updated");

    Ok(Json(joke))
}

/// PUT /jokes/title/{id}
pub async fn update_title(
    State(state): State<JokesState>,
    AuthPayload(payload): AuthPayload,
    PathParam(id): PathParam<i32>,
    ValidatedJson(request): ValidatedJson<UpdateTitleRequest>,
) -> Result<Json<Joke>> {
    update_joke_field(&state, id, &payload.username, JokeField::Title, &request.title).await
}

/// PUT /jokes/text/{id}
pub async fn update_text(
    State(state): State<JokesState>,
    AuthPayload(payload): AuthPayload,
    PathParam(id): PathParam<i32>,
    ValidatedJson(request): ValidatedJson<UpdateTextRequest>,
) -> Result<Json<Joke>> {
    update_joke_field(&state, id, &payload.username, JokeField::Text, &request.text).await
}

/// PUT /jokes/explanation/{id}
pub async fn update_explanation(
    State(state): State<JokesState>,
    AuthPayload(payload): AuthPayload,
    PathParam(id): PathParam<i32>,
    ValidatedJson(request): ValidatedJson<UpdateExplanationRequest>,
) -> Result<Json<Joke>> {
    update_joke_field(
        &state,
        id,
        &payload.username,
        JokeField::Explanation,
        &request.explanation,
    )
    .await
}

/// DELETE /jokes/{id}
pub async fn delete_joke(
    State(state): State<JokesState>,
    AuthPayload(payload): AuthPayload,
    PathParam(id): PathParam<i32>,
) -> Result<StatusCode> {
    authored_joke(&state, id, &payload.username).await?;

    state.repos.jokes.delete(id).await.map_err(|e| match e {
        RepositoryError::NotFound => joke_not_found(),
        other => other.into(),
    })?;

    tracing::info!(joke_id = id, "Joke deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /jokes - Delete every joke the caller wrote
pub async fn delete_my_jokes(
    State(state): State<JokesState>,
    AuthPayload(payload): AuthPayload,
) -> Result<StatusCode> {
    let deleted = state
        .repos
        .jokes
        .delete_by_author(&payload.username)
        .await?;

    tracing::info!(author = %payload.username, deleted, "Jokes deleted");

    Ok(StatusCode::NO_CONTENT)
}
