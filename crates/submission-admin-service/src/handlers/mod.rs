//! HTTP 请求处理器模块
//!
//! 包含所有 REST API 端点和页面路由的处理器实现

pub mod pages;
pub mod submission;
