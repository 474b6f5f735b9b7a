//! User account API handlers
//!
//! Implements:
//! - POST /users - Register a new user
//! - POST /users/login - Exchange credentials for an access token
//! - GET /users/verify/email - Check whether an email is registered
//! - GET /users - List users
//! - GET /users/me - Current user profile
//! - PUT /users/password, /users/fullname, /users/status, /users/bio
//! - DELETE /users - Delete the current user and their jokes

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use jokebox_auth::{AuthPayload, AUTH_TYPE_BEARER};
use jokebox_common::{
    check_password, hash_password, Error, Pagination, PasswordError, QueryParams, RepositoryError,
    Result, ValidatedJson,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::api::middleware::UsersState;
use crate::repository::{delete_jokes_by_author_tx, delete_user_tx};
use crate::{NewUser, ProfileField, User, MAX_USERNAME_LENGTH};

/// User as returned by the API, without the password hash
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub fullname: String,
    pub bio: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            avatar: user.avatar,
            fullname: user.fullname,
            bio: user.bio,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 72))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginUserResponse {
    pub token_type: &'static str,
    pub access_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyEmailQuery {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1))]
    pub old_password: String,

    #[validate(length(min = 6, max = 72))]
    pub new_password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFullnameRequest {
    #[validate(length(max = 255))]
    pub fullname: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(max = 255))]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBioRequest {
    #[validate(length(max = 1000))]
    pub bio: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DeleteUserRequest {
    #[validate(length(min = 1))]
    pub password: String,
}

/// Map a password check failure, using `on_mismatch` for a wrong password
fn password_error(err: PasswordError, on_mismatch: Error) -> Error {
    match err {
        PasswordError::Mismatch => on_mismatch,
        PasswordError::Hashing(e) => Error::Internal(format!("password hashing failed: {}", e)),
    }
}

/// POST /users - Register a new user
pub async fn create_user(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let hashed_password = hash_password(&request.password)
        .map_err(|e| password_error(e, Error::Internal("unexpected password mismatch".to_string())))?;

    let new_user = NewUser {
        username: request.username,
        email: request.email,
        hashed_password,
    };

    let user = state
        .repos
        .users
        .create(&new_user)
        .await
        .map_err(|e| match e {
            RepositoryError::AlreadyExists => {
                Error::Conflict("username or email is already taken".to_string())
            }
            other => other.into(),
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /users/login - Exchange credentials for an access token
pub async fn login_user(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<LoginUserRequest>,
) -> Result<(StatusCode, Json<LoginUserResponse>)> {
    let user = state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::NotFound("user not found".to_string()))?;

    check_password(&request.password, &user.hashed_password).map_err(|e| {
        password_error(e, Error::Authentication("password does not match".to_string()))
    })?;

    let access_token = state
        .tokens
        .create_token(
            user.id,
            &user.username,
            &user.email,
            state.access_token_duration,
        )
        .map_err(|e| {
            tracing::error!(error = %e, user_id = user.id, "Failed to create access token");
            Error::Internal(format!("failed to create access token: {}", e))
        })?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok((
        StatusCode::CREATED,
        Json(LoginUserResponse {
            token_type: AUTH_TYPE_BEARER,
            access_token,
            user: UserResponse::from(user),
        }),
    ))
}

/// GET /users/verify/email - Check whether an email is registered
pub async fn verify_email(
    State(state): State<UsersState>,
    QueryParams(query): QueryParams<VerifyEmailQuery>,
) -> Result<Json<Value>> {
    query
        .validate()
        .map_err(|e| Error::Validation(format!("validation failed: {}", e)))?;

    match state.repos.users.find_by_email(&query.email).await? {
        Some(_) => Err(Error::Conflict("email is registered already".to_string())),
        None => Ok(Json(json!({ "message": "email is not registered yet" }))),
    }
}

/// GET /users - List users
pub async fn list_users(
    State(state): State<UsersState>,
    QueryParams(pagination): QueryParams<Pagination>,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state
        .repos
        .users
        .list(pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Load the caller's user row, treating a vanished account as not found
async fn current_user(state: &UsersState, user_id: i32) -> Result<User> {
    state
        .repos
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::NotFound("user not found".to_string()))
}

/// GET /users/me - Current user profile
pub async fn get_me(
    State(state): State<UsersState>,
    AuthPayload(payload): AuthPayload,
) -> Result<Json<UserResponse>> {
    let user = current_user(&state, payload.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /users/password - Change password after checking the old one
pub async fn update_password(
    State(state): State<UsersState>,
    AuthPayload(payload): AuthPayload,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> Result<Json<UserResponse>> {
    let user = current_user(&state, payload.user_id).await?;

    check_password(&request.old_password, &user.hashed_password).map_err(|e| {
        password_error(e, Error::Validation("old password does not match".to_string()))
    })?;

    let hashed_password = hash_password(&request.new_password)
        .map_err(|e| password_error(e, Error::Internal("unexpected password mismatch".to_string())))?;

    let user = state
        .repos
        .users
        .update_password(user.id, &hashed_password)
        .await?
        .ok_or_else(|| Error::NotFound("user not found".to_string()))?;

    tracing::info!(user_id = user.id, "User password changed");

    Ok(Json(UserResponse::from(user)))
}

async fn update_profile_field(
    state: &UsersState,
    user_id: i32,
    field: ProfileField,
    value: &str,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .update_profile_field(user_id, field, value)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id, field = %field, "Failed to update profile");
            Error::from(e)
        })?
        .ok_or_else(|| Error::NotFound("user not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /users/fullname
pub async fn update_fullname(
    State(state): State<UsersState>,
    AuthPayload(payload): AuthPayload,
    ValidatedJson(request): ValidatedJson<UpdateFullnameRequest>,
) -> Result<Json<UserResponse>> {
    update_profile_field(&state, payload.user_id, ProfileField::Fullname, &request.fullname).await
}

/// PUT /users/status
pub async fn update_status(
    State(state): State<UsersState>,
    AuthPayload(payload): AuthPayload,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> Result<Json<UserResponse>> {
    update_profile_field(&state, payload.user_id, ProfileField::Status, &request.status).await
}

/// PUT /users/bio
pub async fn update_bio(
    State(state): State<UsersState>,
    AuthPayload(payload): AuthPayload,
    ValidatedJson(request): ValidatedJson<UpdateBioRequest>,
) -> Result<Json<UserResponse>> {
    update_profile_field(&state, payload.user_id, ProfileField::Bio, &request.bio).await
}

/// DELETE /users - Delete the current user and everything they wrote
pub async fn delete_user(
    State(state): State<UsersState>,
    AuthPayload(payload): AuthPayload,
    ValidatedJson(request): ValidatedJson<DeleteUserRequest>,
) -> Result<StatusCode> {
    let user = current_user(&state, payload.user_id).await?;

    check_password(&request.password, &user.hashed_password).map_err(|e| {
        password_error(e, Error::Authentication("password does not match".to_string()))
    })?;

    let mut transaction = state.repos.begin().await?;
    let deleted_jokes = delete_jokes_by_author_tx(&mut transaction, &user.username).await?;
    delete_user_tx(&mut transaction, user.id).await?;
    transaction.commit().await?;

    tracing::info!(user_id = user.id, deleted_jokes, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
