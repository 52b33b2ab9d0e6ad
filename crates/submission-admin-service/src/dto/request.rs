//! 请求 DTO 定义
//!
//! 所有 REST API 的请求参数结构

use serde::Deserialize;
use validator::Validate;

use crate::model::SortField;
use crate::view::ViewFilter;

/// 提交记录列表查询参数
///
/// GET /api/admin/submissions 与导出接口共用。
/// 过滤为大小写不敏感的子串匹配；sort 缺失时保持读取顺序（最新在前）。
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionQuery {
    /// 姓名过滤
    #[validate(length(max = 100, message = "姓名过滤条件不能超过100个字符"))]
    pub nama: Option<String>,
    /// 测试类型过滤
    #[validate(length(max = 100, message = "测试类型过滤条件不能超过100个字符"))]
    pub test_type: Option<String>,
    /// 排序字段（始终升序）
    pub sort: Option<SortField>,
}

impl SubmissionQuery {
    /// 转换为视图过滤条件
    pub fn filter(&self) -> ViewFilter {
        ViewFilter {
            nama: self.nama.clone(),
            test_type: self.test_type.clone(),
        }
    }
}
