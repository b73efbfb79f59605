//! # 用户存储服务
//!
//! 基于 Axum 的内存用户 CRUD 服务，按分层架构组织：
//! - `app`: 路由、处理器、业务服务
//! - `core`: 错误处理、请求提取器、中间件
//! - `infrastructure`: 配置与日志

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use app::users::{handler::AppState, service::UserService};
use infrastructure::config::HttpConfig;

/// 构建带中间件的完整应用
pub fn build_app(user_service: UserService, http: &HttpConfig) -> Router {
    app::routes(AppState { user_service })
        .layer(middleware::from_fn(
            crate::core::middleware::request_logging_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(http.timeout()))
}
