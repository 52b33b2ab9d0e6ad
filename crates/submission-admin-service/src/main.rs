//! 提交记录管理后台服务
//!
//! 提供提交记录的列表、过滤、排序、删除和 CSV 导出的 REST API，
//! 以及根路径和管理页两个页面路由。

use axum::{
    Json, Router,
    extract::Request,
    http::HeaderValue,
    middleware,
    middleware::Next,
    response::Response,
    routing::get,
};
use stemation_shared::{
    config::AppConfig,
    database::Database,
    observability::{self, middleware as obs_middleware},
};
use submission_admin_service::{routes, state::AppState};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 统一加载配置：从 config/{service_name}.toml 加载
    let config = AppConfig::load("submission-admin-service").unwrap_or_default();

    let _guard = observability::init(&config.service_name, &config.observability)?;

    info!("Starting submission-admin-service on {}", config.server_addr());

    // 初始化数据库连接池
    let db = Database::connect(&config.database).await?;

    let state = AppState::new(db.pool().clone());

    // CORS 配置：通过 STEMATION_CORS_ORIGINS 环境变量控制允许的来源
    // 默认允许本地开发地址，生产环境应设置为实际域名
    let allowed_origins = std::env::var("STEMATION_CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

    let cors = if allowed_origins == "*" {
        // 生产环境使用通配符 CORS 是严重的安全隐患，可能导致跨站请求伪造
        if config.is_production() {
            warn!("STEMATION_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        info!("CORS allowed_origins: * (all origins)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        info!("CORS allowed_origins: {}", allowed_origins);
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .merge(routes::page_routes())
        .nest("/api/admin", routes::api_routes())
        .route("/health", get(health_check))
        .route(
            "/ready",
            get({
                let db_for_ready = db;
                move || readiness_check(db_for_ready.clone())
            }),
        )
        // HTTP 安全头：纵深防御，即使反向代理未配置也确保基本安全策略生效
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        // 可观测性中间件：请求追踪和请求 ID 关联
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM（K8s 停止 Pod）或 Ctrl+C 时，
    // 停止接收新连接并等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 为所有响应注入 HTTP 安全头
///
/// 确保即使上游反向代理（如 Nginx/Envoy）未正确配置，
/// 应用层仍能提供基本的浏览器安全策略。
async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    // 禁止浏览器猜测 Content-Type，防止将非可执行内容误判为脚本执行
    headers.insert("x-content-type-options", "nosniff".parse().unwrap());
    // 禁止页面被嵌入 iframe，防止点击劫持攻击
    headers.insert("x-frame-options", "DENY".parse().unwrap());
    // 强制浏览器后续访问只使用 HTTPS，有效期一年且包含子域名
    headers.insert(
        "strict-transport-security",
        "max-age=31536000; includeSubDomains".parse().unwrap(),
    );
    response
}

/// 监听关闭信号
///
/// K8s 通过 SIGTERM 通知 Pod 停止；本地开发通过 Ctrl+C。
/// 收到任一信号后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "submission-admin-service"
    }))
}

/// 就绪探针：检查数据库连接是否可用
///
/// K8s 就绪探针失败时会将 Pod 从 Service 端点移除，
/// 避免将流量路由到无法正常处理请求的实例。
async fn readiness_check(db: Database) -> Json<serde_json::Value> {
    let db_ok = db.health_check().await.is_ok();

    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "service": "submission-admin-service",
        "checks": {
            "database": if db_ok { "ok" } else { "fail" }
        }
    }))
}
