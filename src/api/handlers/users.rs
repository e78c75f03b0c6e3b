//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::api::validation::parse_id;
use crate::domain::entities::NewUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users ordered by id.
///
/// # Endpoint
///
/// `GET /users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "Ana", "email": "ana@x.com" }
/// ```
///
/// # Errors
///
/// Returns 400 if `name` or `email` is missing or empty.
/// Returns 409 if the email is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(payload) = payload?;
    let new_user = NewUser::try_from(payload)?;

    let user = state.user_service.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Retrieves a user by id.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not a non-negative integer.
/// Returns 404 if no user has this id.
pub async fn get_user_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(id) = path?;
    let id = parse_id(&id, "user")?;

    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Retrieves a user by exact email.
///
/// # Endpoint
///
/// `GET /users/email/{email}`
///
/// # Errors
///
/// Returns 404 if no user has this email.
pub async fn get_user_by_email_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(email) = path?;
    let user = state.user_service.get_user_by_email(&email).await?;

    Ok(Json(user.into()))
}

/// Finds users whose name contains the given text, ignoring case.
///
/// # Endpoint
///
/// `GET /users/name/{name}`
///
/// # Errors
///
/// Returns 404 if nothing matches.
pub async fn search_users_by_name_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let Path(name) = path?;
    let users = state.user_service.search_users_by_name(&name).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
