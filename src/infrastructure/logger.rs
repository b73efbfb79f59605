//! 日志基础设施

use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化全局 tracing 订阅者
    ///
    /// 设置了 `RUST_LOG` 时以环境变量为准，否则使用配置中的级别。
    pub fn init(config: &LoggingConfig) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| Self::config_filter(config));

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    /// 配置级别同时作用于本服务和 tower_http
    fn config_filter(config: &LoggingConfig) -> EnvFilter {
        EnvFilter::new(&config.level)
    }
}
