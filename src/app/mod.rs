//! 应用层：路由与处理器

pub mod users;

use axum::{response::Json, routing::get, Router};

use crate::core::response::MessageResponse;
use users::handler::{self, AppState};

pub const WELCOME_MESSAGE: &str = "Welcome to the user store API";

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

/// 组装全部路由，不含中间件
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/users", get(handler::list_users).post(handler::create_user))
        .route(
            "/users/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
        .route("/emails", get(handler::list_emails))
        .with_state(state)
}
