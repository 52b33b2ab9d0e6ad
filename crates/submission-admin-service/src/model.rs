//! 提交记录实体模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一条测试提交记录
///
/// 由外部答题系统写入 submissions 表；本服务只读取和删除，
/// 因此没有任何构造/更新逻辑。
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Submission {
    pub id: Uuid,
    /// 参与者姓名
    pub nama: String,
    /// 点名册序号
    pub absen: i32,
    /// 测试得分
    pub score: i32,
    /// 测试类型 / 班级标签
    pub test_type: String,
    /// 提交时间，由后端写入时生成
    pub created_at: DateTime<Utc>,
}

/// 可排序字段
///
/// 每个字段使用其原生排序：整型按数值，文本按字典序，时间按先后。
/// 排序始终为升序，不跟踪方向切换状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Absen,
    Nama,
    TestType,
    Score,
    CreatedAt,
}
