//! Resolving the write target from a retrieved database.
//!
//! Since API version 2025-09-03 pages are created under a data source, and a
//! database object lists its data sources in `data_sources`. The first entry
//! is the target.

use serde_json::Value;
use thiserror::Error;

const REMEDIATION: &str = "노션에서 데이터베이스 페이지를 열고 ••• 메뉴 → 연결 → 연동 이름으로 '연결 추가'한 뒤 다시 시도하거나, 노션 데이터베이스 설정 → 데이터 소스 관리 → '데이터 소스 ID 복사' 값을 Data source ID 필드에 넣어 보세요.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The response has no `data_sources` field (or it is null).
    #[error("data_source_id를 찾지 못했습니다.\n\n원인: {}\n\n해결: {}", self.reason(), REMEDIATION)]
    MissingField,
    /// `data_sources` is an empty list.
    #[error("data_source_id를 찾지 못했습니다.\n\n원인: {}\n\n해결: {}", self.reason(), REMEDIATION)]
    EmptyList,
    /// `data_sources` is present but its first entry has no usable id.
    #[error("data_source_id를 찾지 못했습니다.\n\n원인: {}\n\n해결: {}", self.reason(), REMEDIATION)]
    Unreadable,
}

impl ResolveError {
    pub fn reason(self) -> &'static str {
        match self {
            ResolveError::MissingField => {
                "응답에 data_sources 필드가 없습니다 (field missing). Notion API 버전 2025-09-03 및 연동 연결 추가를 확인해 주세요."
            }
            ResolveError::EmptyList => "data_sources 배열이 비어 있습니다 (empty list).",
            ResolveError::Unreadable => "data_sources[0].id를 읽을 수 없습니다 (unreadable).",
        }
    }
}

/// Id of the first data source listed in a database object.
pub fn data_source_from_database(database: &Value) -> Result<String, ResolveError> {
    match database.get("data_sources") {
        None | Some(Value::Null) => Err(ResolveError::MissingField),
        Some(Value::Array(sources)) if sources.is_empty() => Err(ResolveError::EmptyList),
        Some(sources) => sources
            .get(0)
            .and_then(|first| first.get("id"))
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or(ResolveError::Unreadable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_data_source_wins() {
        let database = json!({
            "object": "database",
            "data_sources": [
                { "id": "ds-1", "name": "Main" },
                { "id": "ds-2", "name": "Archive" }
            ]
        });
        assert_eq!(data_source_from_database(&database).unwrap(), "ds-1");
    }

    #[test]
    fn causes_are_distinguished() {
        assert_eq!(
            data_source_from_database(&json!({ "object": "database" })),
            Err(ResolveError::MissingField)
        );
        assert_eq!(
            data_source_from_database(&json!({ "data_sources": null })),
            Err(ResolveError::MissingField)
        );
        assert_eq!(
            data_source_from_database(&json!({ "data_sources": [] })),
            Err(ResolveError::EmptyList)
        );
        assert_eq!(
            data_source_from_database(&json!({ "data_sources": [{ "name": "no id" }] })),
            Err(ResolveError::Unreadable)
        );
        assert_eq!(
            data_source_from_database(&json!({ "data_sources": { "id": "x" } })),
            Err(ResolveError::Unreadable)
        );
    }

    #[test]
    fn message_names_cause_and_remediation() {
        let message = ResolveError::EmptyList.to_string();
        assert!(message.starts_with("data_source_id를 찾지 못했습니다."));
        assert!(message.contains("empty"));
        assert!(message.contains("연결 추가"));
    }

    #[test]
    fn every_cause_uses_the_same_layout() {
        for cause in [
            ResolveError::MissingField,
            ResolveError::EmptyList,
            ResolveError::Unreadable,
        ] {
            let error: &dyn std::error::Error = &cause;
            assert_eq!(
                error.to_string(),
                format!(
                    "data_source_id를 찾지 못했습니다.\n\n원인: {}\n\n해결: {REMEDIATION}",
                    cause.reason()
                )
            );
        }
    }
}
