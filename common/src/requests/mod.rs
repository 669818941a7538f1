use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::null_as_empty;
use crate::model::settings::NotionSettings;
use crate::notion::record::ExportRecord;

/// Body of `POST /api/notion`.
///
/// Every field is optional on the wire so that a missing value produces the
/// bridge's own validation message instead of a JSON parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_property: Option<String>,
}

impl ExportRequest {
    /// Request for `record` with the identifiers the member has configured.
    /// Blank identifiers are left out.
    pub fn new(settings: &NotionSettings, record: &ExportRecord) -> Self {
        let settings = settings.normalized();
        Self {
            database_id: settings
                .has_database_id()
                .then(|| settings.database_id.clone()),
            data_source_id: settings
                .has_data_source_id()
                .then(|| settings.data_source_id.clone()),
            kind: record.kind().to_string(),
            payload: record.payload(),
            title_property: Some(settings.title_property),
            api_key: settings.api_key,
        }
    }
}

/// Successful bridge answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub ok: bool,
    pub page_id: String,
    pub url: Option<String>,
}

/// Error body of the bridge; `status` and `code` are only present for
/// failures reported by Notion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ExportFailure {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            code: None,
        }
    }
}

/// Answer of `GET /api/config`: what the browser needs to reach the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub store_url: String,
    pub store_anon_key: String,
}

impl ClientConfig {
    pub fn is_configured(&self) -> bool {
        !self.store_url.trim().is_empty() && !self.store_anon_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::record::{InterviewRecord, QuoteRecord};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_omits_blank_identifiers() {
        let settings = NotionSettings {
            api_key: " secret ".into(),
            database_id: "  ".into(),
            data_source_id: "ds".into(),
            title_property: String::new(),
        };
        let record = ExportRecord::Quote(QuoteRecord {
            book_title: "책".into(),
            quote: "문장".into(),
            ..Default::default()
        });
        let body = serde_json::to_value(ExportRequest::new(&settings, &record)).unwrap();
        assert_eq!(
            body,
            json!({
                "apiKey": "secret",
                "dataSourceId": "ds",
                "type": "quote",
                "payload": { "bookTitle": "책", "quote": "문장", "thoughts": "", "author": "" },
                "titleProperty": "Name"
            })
        );
    }

    #[test]
    fn interview_request_carries_database_id() {
        let settings = NotionSettings {
            api_key: "k".into(),
            database_id: "db".into(),
            ..Default::default()
        };
        let record = ExportRecord::Interview(InterviewRecord {
            keyword: "맥락".into(),
            ..Default::default()
        });
        let request = ExportRequest::new(&settings, &record);
        assert_eq!(request.database_id.as_deref(), Some("db"));
        assert_eq!(request.data_source_id, None);
        assert_eq!(request.kind, "interview");
        assert_eq!(request.payload["keyword"], "맥락");
    }

    #[test]
    fn sparse_request_body_parses() {
        let request: ExportRequest = serde_json::from_value(json!({ "apiKey": null })).unwrap();
        assert_eq!(request, ExportRequest::default());
    }

    #[test]
    fn failure_body_skips_absent_fields() {
        let body = serde_json::to_value(ExportFailure::message("잘못된 type입니다.")).unwrap();
        assert_eq!(body, json!({ "error": "잘못된 type입니다." }));
    }

    #[test]
    fn response_keeps_null_url() {
        let response: ExportResponse =
            serde_json::from_value(json!({ "ok": true, "pageId": "p", "url": null })).unwrap();
        assert_eq!(response.url, None);
        assert_eq!(response.page_id, "p");
    }
}
