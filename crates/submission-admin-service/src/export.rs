//! CSV 导出
//!
//! 将当前过滤视图渲染为可下载的 CSV 文本。
//! 转义遵循 RFC 4180：含逗号、引号或换行的字段加引号，内嵌引号成对转义。

use chrono::{DateTime, Utc};

use crate::model::Submission;

/// 导出文件的列头，与管理页表格列一致
const HEADER: [&str; 6] = ["id", "nama", "absen", "score", "test_type", "created_at"];

/// 生成导出文件名，如 `submissions-2026-08-26.csv`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("submissions-{}.csv", now.format("%Y-%m-%d"))
}

/// 渲染 CSV 文本：一行列头加每条记录一行
pub fn render_csv(rows: &[Submission]) -> String {
    let mut out = String::new();

    write_csv_row(&mut out, &HEADER.map(String::from));

    for row in rows {
        let record = [
            row.id.to_string(),
            row.nama.clone(),
            row.absen.to_string(),
            row.score.to_string(),
            row.test_type.clone(),
            row.created_at.to_rfc3339(),
        ];
        write_csv_row(&mut out, &record);
    }

    out
}

fn write_csv_row(out: &mut String, values: &[String]) {
    let line = values
        .iter()
        .map(|v| escape_csv_value(v))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

/// 需要时为字段加引号并转义内嵌引号
fn escape_csv_value(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv_value("hello"), "hello");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv_value("hello,world"), "\"hello,world\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv_value("hello\"world"), "\"hello\"\"world\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv_value("hello\nworld"), "\"hello\nworld\"");
    }

    #[test]
    fn test_escape_csv_with_carriage_return() {
        assert_eq!(escape_csv_value("hello\rworld"), "\"hello\rworld\"");
    }

    #[test]
    fn test_export_filename_carries_date() {
        let now = Utc.with_ymd_and_hms(2026, 8, 26, 9, 30, 0).unwrap();
        assert_eq!(export_filename(now), "submissions-2026-08-26.csv");
    }

    #[test]
    fn test_render_csv_header_only_when_empty() {
        let csv = render_csv(&[]);
        assert_eq!(csv, "id,nama,absen,score,test_type,created_at\n");
    }

    #[test]
    fn test_render_csv_rows() {
        let row = Submission {
            id: Uuid::nil(),
            nama: "Budi, Jr.".to_string(),
            absen: 3,
            score: 85,
            test_type: "Matematika".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        };

        let csv = render_csv(&[row]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "id,nama,absen,score,test_type,created_at");
        // 含逗号的姓名必须被引号包裹
        assert_eq!(
            lines[1],
            "00000000-0000-0000-0000-000000000000,\"Budi, Jr.\",3,85,Matematika,2026-08-01T12:00:00+00:00"
        );
    }
}
