//! 路由配置模块
//!
//! 定义页面路由和 REST API 端点的路由映射

use axum::{
    Router,
    routing::{delete, get},
};

use crate::{handlers, state::AppState};

/// 构建页面路由
///
/// 根路径和管理页，两个静态页面
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/admin", get(handlers::pages::admin))
}

/// 构建提交记录管理路由
///
/// 包含列表查询、导出和删除操作
pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/submissions",
            get(handlers::submission::list_submissions),
        )
        .route(
            "/submissions/export",
            get(handlers::submission::export_submissions),
        )
        .route(
            "/submissions/{id}",
            delete(handlers::submission::delete_submission),
        )
}

/// 构建完整的 API 路由
///
/// 返回所有管理后台 API 路由（不含前缀，由调用方在 main.rs 中挂载）
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(submission_routes())
}
