use axum::{
    Json,
    extract::{Path, State},
};
use edusync_core::AppError;
use edusync_models::{RegisterRequest, User};
use tracing::{info, instrument};

use super::service::{USER_LABEL, UserService, parse_user_id};
use crate::middleware::auth::AuthUser;
use crate::modules::resource::model::{MessageResponse, deleted_message};
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.store).await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_user_id(&id)?;
    let user = UserService::get_user(&state.store, id).await?;
    Ok(Json(User::from(user)))
}

#[instrument(skip(state, auth_user, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    dto: Result<ValidatedJson<RegisterRequest>, AppError>,
) -> Result<Json<MessageResponse>, AppError> {
    // Id format is reported ahead of any body error.
    let id = parse_user_id(&id)?;
    let ValidatedJson(dto) = dto?;
    let status = UserService::update_user(&state.store, id, dto).await?;

    info!(id = %id, user = auth_user.username(), ?status, "Replaced user");

    Ok(Json(MessageResponse::new(status.message(USER_LABEL))))
}

#[instrument(skip(state, auth_user))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_user_id(&id)?;
    UserService::delete_user(&state.store, id).await?;

    info!(id = %id, user = auth_user.username(), "Deleted user");

    Ok(Json(MessageResponse::new(deleted_message(USER_LABEL))))
}
