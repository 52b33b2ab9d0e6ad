//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Submission;

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }

    /// 创建成功响应（无数据）
    pub fn success_empty() -> ApiResponse<()> {
        ApiResponse {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: None,
        }
    }
}

/// 提交记录响应 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: Uuid,
    pub nama: String,
    pub absen: i32,
    pub score: i32,
    pub test_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionDto {
    fn from(row: Submission) -> Self {
        Self {
            id: row.id,
            nama: row.nama,
            absen: row.absen,
            score: row.score,
            test_type: row.test_type,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success("test data");
        assert!(response.success);
        assert_eq!(response.code, "SUCCESS");
        assert_eq!(response.data, Some("test data"));
    }

    #[test]
    fn test_api_response_success_empty_omits_data() {
        let response = ApiResponse::<()>::success_empty();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn test_submission_dto_serialization_camel_case() {
        let dto = SubmissionDto {
            id: Uuid::nil(),
            nama: "Budi Santoso".to_string(),
            absen: 3,
            score: 85,
            test_type: "Matematika".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"nama\":\"Budi Santoso\""));
        assert!(json.contains("\"testType\":\"Matematika\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_submission_dto_from_model() {
        let row = Submission {
            id: Uuid::nil(),
            nama: "Dewi".to_string(),
            absen: 5,
            score: 92,
            test_type: "Kimia".to_string(),
            created_at: Utc::now(),
        };

        let dto = SubmissionDto::from(row.clone());
        assert_eq!(dto.id, row.id);
        assert_eq!(dto.nama, row.nama);
        assert_eq!(dto.score, row.score);
    }
}
