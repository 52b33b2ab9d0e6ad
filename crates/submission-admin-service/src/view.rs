//! 提交记录的内存视图逻辑
//!
//! 列表一次性读入后，过滤和排序都在服务端内存中完成：
//! 查询参数每次变化都从完整列表重新推导视图，不维护增量状态。

use crate::model::{SortField, Submission};

/// 视图过滤条件
///
/// 两个文本条件都是可选的，同时给出时取交集。
#[derive(Debug, Default, Clone)]
pub struct ViewFilter {
    /// 姓名子串（大小写不敏感）
    pub nama: Option<String>,
    /// 测试类型子串（大小写不敏感）
    pub test_type: Option<String>,
}

impl ViewFilter {
    /// 判断一行是否命中过滤条件
    ///
    /// 空条件视为命中全部。
    pub fn matches(&self, row: &Submission) -> bool {
        contains_ci(&row.nama, self.nama.as_deref())
            && contains_ci(&row.test_type, self.test_type.as_deref())
    }
}

/// 大小写不敏感的子串包含判断；条件缺失或为空串时恒为真
fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) if n.is_empty() => true,
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
    }
}

/// 过滤：保留命中条件的行，保持输入顺序
pub fn apply_filter(rows: Vec<Submission>, filter: &ViewFilter) -> Vec<Submission> {
    rows.into_iter().filter(|r| filter.matches(r)).collect()
}

/// 按指定字段升序全量重排
///
/// 排序是稳定的：比较值相等的行保持读取顺序。没有次级排序键，
/// 也没有升降序切换。
pub fn sort_by_field(rows: &mut [Submission], field: SortField) {
    match field {
        SortField::Absen => rows.sort_by_key(|r| r.absen),
        SortField::Score => rows.sort_by_key(|r| r.score),
        SortField::Nama => rows.sort_by(|a, b| a.nama.cmp(&b.nama)),
        SortField::TestType => rows.sort_by(|a, b| a.test_type.cmp(&b.test_type)),
        SortField::CreatedAt => rows.sort_by_key(|r| r.created_at),
    }
}
