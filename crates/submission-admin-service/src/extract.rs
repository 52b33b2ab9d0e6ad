//! 请求提取器
//!
//! 包装 axum 的 Query 提取器：反序列化失败（如未知的 sort 取值）
//! 映射为统一错误信封，而不是 axum 默认的裸文本 400。

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AdminError;

/// 查询参数提取器
///
/// 行为与 `axum::extract::Query` 一致，拒绝时返回 `AdminError::Validation`。
#[derive(Debug, Clone, Copy)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AdminError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(AdminError::Validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::SubmissionQuery;
    use crate::model::SortField;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<SubmissionQuery, AdminError> {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        ApiQuery::<SubmissionQuery>::from_request_parts(&mut parts, &())
            .await
            .map(|ApiQuery(query)| query)
    }

    #[tokio::test]
    async fn test_extracts_valid_query() {
        let query = extract("/submissions?nama=budi&sort=score").await.unwrap();
        assert_eq!(query.nama.as_deref(), Some("budi"));
        assert_eq!(query.sort, Some(SortField::Score));
    }

    /// 未知的 sort 取值必须映射为 Validation 错误，走统一错误信封
    #[tokio::test]
    async fn test_unknown_sort_value_maps_to_validation() {
        let err = extract("/submissions?sort=bogus").await.unwrap_err();
        match &err {
            AdminError::Validation(msg) => {
                assert!(msg.contains("sort"), "错误消息应指出出错字段: {msg}");
            }
            other => panic!("期望 Validation 变体，实际: {:?}", other),
        }
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
