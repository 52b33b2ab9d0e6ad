//! 统一可观测性模块
//!
//! 提供日志和追踪的统一初始化。服务通过单一入口点配置可观测性，
//! 确保一致的日志格式和请求关联。

pub mod middleware;

use crate::config::ObservabilityConfig;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 可观测性资源守卫
///
/// 持有可观测性资源的生命周期，在 Drop 时记录关闭日志。
pub struct ObservabilityGuard {
    _private: (),
}

impl ObservabilityGuard {
    /// 创建一个空的 Guard（用于测试或禁用可观测性时）
    pub fn empty() -> Self {
        Self { _private: () }
    }
}

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        info!("Shutting down observability...");
    }
}

/// 统一初始化可观测性
///
/// 构建环境过滤器和日志层并注册为全局订阅者。
/// 日志级别优先取 RUST_LOG 环境变量，其次取配置中的 log_level。
///
/// # Example
///
/// ```ignore
/// use stemation_shared::{config::AppConfig, observability};
///
/// fn main() -> anyhow::Result<()> {
///     let config = AppConfig::load("submission-admin-service")?;
///     let _guard = observability::init(&config.service_name, &config.observability)?;
///
///     // 应用逻辑...
///
///     Ok(())
/// }
/// ```
pub fn init(service_name: &str, config: &ObservabilityConfig) -> Result<ObservabilityGuard> {
    // 构建环境过滤器
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 构建日志层
    let fmt_layer = if config.log_format == "json" {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    info!(
        service = %service_name,
        log_format = %config.log_format,
        "Observability initialized"
    );

    Ok(ObservabilityGuard { _private: () })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "pretty");
    }

    #[test]
    fn test_empty_guard_is_safe_to_drop() {
        let guard = ObservabilityGuard::empty();
        drop(guard);
    }
}
