//! 提交记录管理后台服务
//!
//! 面向运营的 REST 服务，管理 STEMation 测试提交记录表（submissions）。
//!
//! ## 核心功能
//!
//! - **列表视图**：一次性读取全部提交记录（按提交时间倒序），
//!   在内存中按姓名/测试类型做大小写不敏感的子串过滤，并可按任意列升序排序
//! - **删除**：按记录 ID 删除单条提交
//! - **导出**：将当前过滤视图导出为 CSV 附件
//! - **页面路由**：根路径和 /admin 两个静态页面
//!
//! 记录由外部答题系统写入，本服务不创建也不修改记录。
//!
//! ## 模块结构
//!
//! - `dto`: 请求和响应的数据传输对象
//! - `model`: 提交记录实体与可排序字段
//! - `view`: 内存中的过滤/排序逻辑
//! - `export`: CSV 导出
//! - `error`: 错误类型定义
//! - `extract`: 自定义请求提取器
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod dto;
pub mod error;
pub mod export;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod view;

// 重新导出核心类型
pub use dto::{ApiResponse, SubmissionDto, SubmissionQuery};
pub use extract::ApiQuery;
pub use error::{AdminError, Result};
pub use model::{SortField, Submission};
pub use view::ViewFilter;
