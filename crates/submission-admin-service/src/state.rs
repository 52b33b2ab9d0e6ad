//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use sqlx::PgPool;

/// Axum 应用共享状态
///
/// 只持有数据库连接池；连接池内部已是 Arc，Clone 代价低。
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL 连接池
    pub pool: PgPool,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
