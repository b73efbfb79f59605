//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{event, Level};

/// 请求日志中间件
///
/// 4xx/5xx 记为 WARN，其余记为 INFO。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    // event! 的级别必须是常量
    macro_rules! log_request {
        ($level:expr) => {
            event!(
                $level,
                method = %method,
                uri = %uri,
                status = status.as_u16(),
                latency_ms,
                user_agent = ?user_agent,
                "request finished"
            )
        };
    }

    if status.is_client_error() || status.is_server_error() {
        log_request!(Level::WARN);
    } else {
        log_request!(Level::INFO);
    }

    response
}
