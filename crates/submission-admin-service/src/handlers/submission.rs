//! 提交记录 API 处理器
//!
//! 列表查询与管理页的交互模型一致：一次性读入全表（按提交时间倒序），
//! 过滤和排序在内存中完成，每次请求从完整列表重新推导视图。

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{ApiResponse, SubmissionDto, SubmissionQuery},
    error::AdminError,
    export,
    extract::ApiQuery,
    model::Submission,
    state::AppState,
    view,
};

/// 读取全部提交记录并推导过滤/排序视图
async fn fetch_view(
    state: &AppState,
    query: &SubmissionQuery,
) -> Result<Vec<Submission>, AdminError> {
    let rows = sqlx::query_as::<_, Submission>(
        r#"
        SELECT id, nama, absen, score, test_type, created_at
        FROM submissions
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&state.pool)
    .await?;

    let mut filtered = view::apply_filter(rows, &query.filter());
    if let Some(field) = query.sort {
        view::sort_by_field(&mut filtered, field);
    }

    Ok(filtered)
}

/// 查询提交记录列表
///
/// GET /api/admin/submissions
///
/// 支持的查询参数：
/// - nama: 姓名过滤（大小写不敏感子串匹配）
/// - testType: 测试类型过滤
/// - sort: 排序列（absen/nama/testType/score/createdAt），始终升序
#[instrument(skip(state))]
pub async fn list_submissions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SubmissionQuery>,
) -> Result<Json<ApiResponse<Vec<SubmissionDto>>>, AdminError> {
    query.validate()?;

    let rows = fetch_view(&state, &query).await?;
    let items: Vec<SubmissionDto> = rows.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(items)))
}

/// 删除提交记录
///
/// DELETE /api/admin/submissions/{id}
#[instrument(skip(state))]
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AdminError> {
    let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AdminError::SubmissionNotFound(id));
    }

    info!(submission_id = %id, "Submission deleted");

    Ok(Json(ApiResponse::<()>::success_empty()))
}

/// 导出当前过滤视图为 CSV
///
/// GET /api/admin/submissions/export
///
/// 与列表接口共用过滤/排序参数，响应为 CSV 附件，文件名带当天日期。
#[instrument(skip(state))]
pub async fn export_submissions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SubmissionQuery>,
) -> Result<Response, AdminError> {
    query.validate()?;

    let rows = fetch_view(&state, &query).await?;
    let body = export::render_csv(&rows);
    let filename = export::export_filename(Utc::now());

    info!(rows = rows.len(), filename = %filename, "Submissions exported");

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortField;

    #[test]
    fn test_query_defaults_keep_fetch_order() {
        // sort 缺失时不改变读取顺序，由 fetch_view 的 ORDER BY 决定（最新在前）
        let query = SubmissionQuery::default();
        assert!(query.sort.is_none());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_export_query_reuses_list_params() {
        let query = SubmissionQuery {
            nama: Some("budi".to_string()),
            test_type: None,
            sort: Some(SortField::Score),
        };
        assert!(query.validate().is_ok());
        assert_eq!(query.filter().nama.as_deref(), Some("budi"));
    }
}
