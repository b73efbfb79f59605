//! 用户处理器

use axum::{
    extract::{Path, State},
    response::Json,
};

use super::{
    model::{EmailResponse, User, UserInput},
    service::UserService,
};
use crate::core::{error::CoreError, extract::ValidatedJson, response::MessageResponse};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserInput>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.create_user(payload)?;
    Ok(Json(user))
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.get_user(&id)?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserInput>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.update_user(&id, payload)?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, CoreError> {
    state.user_service.delete_user(&id)?;
    Ok(Json(MessageResponse::new("User deleted")))
}

pub async fn list_emails(State(state): State<AppState>) -> Json<Vec<EmailResponse>> {
    Json(state.user_service.list_emails())
}
