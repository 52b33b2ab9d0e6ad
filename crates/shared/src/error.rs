//! 统一错误处理模块
//!
//! 定义基础设施层共享的错误类型，使用 thiserror 提供良好的错误信息。

use thiserror::Error;

/// 基础设施错误类型
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, SharedError>;

impl SharedError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 是否为可重试错误
    ///
    /// 连接类故障重启或重连后可能恢复；配置错误重试无意义。
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = SharedError::Internal("boom".to_string());
        assert_eq!(err.code(), "INTERNAL_ERROR");

        let db_err = SharedError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(db_err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_is_retryable() {
        let db_err = SharedError::Database(sqlx::Error::PoolTimedOut);
        assert!(db_err.is_retryable());

        let internal = SharedError::Internal("boom".to_string());
        assert!(!internal.is_retryable());
    }

    #[test]
    fn test_display_contains_context() {
        let err = SharedError::Internal("连接池耗尽".to_string());
        assert!(err.to_string().contains("连接池耗尽"));
    }
}
