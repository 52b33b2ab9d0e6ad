//! 数据传输对象模块
//!
//! 包含所有 REST API 的请求和响应结构

pub mod request;
pub mod response;

pub use request::SubmissionQuery;
pub use response::{ApiResponse, SubmissionDto};
