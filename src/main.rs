use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use user_store_api::{
    app::users::service::UserService,
    build_app,
    infrastructure::{config::load_config, logger::Logger},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_path) = load_config()?;

    // 初始化日志
    Logger::init(&config.logging);

    match config_path {
        Some(path) => info!("从配置文件加载: {}", path),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let user_service = UserService::new();
    let app = build_app(user_service, &config.http);

    let addr = config.http.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 用户存储服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /              - 欢迎信息");
    info!("   POST   /users         - 创建新用户");
    info!("   GET    /users         - 获取所有用户");
    info!("   GET    /users/:id     - 获取特定用户");
    info!("   PUT    /users/:id     - 更新用户");
    info!("   DELETE /users/:id     - 删除用户");
    info!("   GET    /emails        - 获取所有邮箱");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已关闭");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到 Ctrl+C，正在关闭...");
    }
}
