use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{info, instrument};

use roster_core::AppError;
use roster_models::{User, UserDto};

use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{JsonBody, ValidatedJson};

/// List every user in insertion order.
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(UserService::get_users(&state.store))
}

/// Get a single user by id.
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.store, id)?;
    Ok(Json(user))
}

/// Create a user. Any `Id` in the body is ignored.
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::create_user(&state.store, dto)?;
    info!(user_id = user.id, "User created");

    let location = format!("/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Replace every field of a user except its id.
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(dto): JsonBody<UserDto>,
) -> Result<StatusCode, AppError> {
    UserService::update_user(&state.store, id, dto)?;
    info!(user_id = id, "User updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    UserService::delete_user(&state.store, id)?;
    info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
