//! Export requests after validation.
//!
//! The wire request carries a string discriminator and a loose payload map.
//! [`ValidatedExport::try_from`] turns that into an [`ExportRecord`] with one
//! variant per record shape and a resolved [`ExportTarget`], rejecting bad
//! input before any remote call is made.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::id::{normalize_data_source_id, normalize_database_id};
use super::DEFAULT_TITLE_PROPERTY;
use crate::model::null_as_empty;
use crate::requests::ExportRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Notion API Key가 필요합니다.")]
    MissingApiKey,

    #[error("Database ID 또는 Data source ID 중 하나를 입력해 주세요. 노션에서 '데이터 소스 ID 복사'로 받은 값은 Data source ID에 넣으세요.")]
    MissingTarget,

    #[error("잘못된 type입니다.")]
    UnknownKind(String),

    #[error("payload 형식이 올바르지 않습니다: {0}")]
    InvalidPayload(String),

    #[error("인용구(quote) 또는 나의 생각(thought) 중 하나 이상 값을 넣어 주세요.")]
    EmptyQuote,
}

/// Payload of a `quote` export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub book_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quote: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thoughts: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

/// Payload of an `interview` export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRecord {
    Quote(QuoteRecord),
    Interview(InterviewRecord),
}

impl ExportRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            ExportRecord::Quote(_) => "quote",
            ExportRecord::Interview(_) => "interview",
        }
    }

    pub fn payload(&self) -> Value {
        let payload = match self {
            ExportRecord::Quote(record) => serde_json::to_value(record),
            ExportRecord::Interview(record) => serde_json::to_value(record),
        };
        // Both records are plain string maps.
        payload.unwrap_or(Value::Null)
    }

    /// Parses the payload for `kind`, trimming every field. A missing payload
    /// reads as an empty one.
    pub fn from_parts(kind: &str, payload: Value) -> Result<Self, RequestError> {
        let payload = match payload {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let invalid = |e: serde_json::Error| RequestError::InvalidPayload(e.to_string());
        match kind {
            "quote" => {
                let record: QuoteRecord = serde_json::from_value(payload).map_err(invalid)?;
                Ok(ExportRecord::Quote(QuoteRecord {
                    book_title: record.book_title.trim().to_string(),
                    quote: record.quote.trim().to_string(),
                    thoughts: record.thoughts.trim().to_string(),
                    author: record.author.trim().to_string(),
                }))
            }
            "interview" => {
                let record: InterviewRecord = serde_json::from_value(payload).map_err(invalid)?;
                Ok(ExportRecord::Interview(InterviewRecord {
                    keyword: record.keyword.trim().to_string(),
                    question: record.question.trim().to_string(),
                    answer: record.answer.trim().to_string(),
                }))
            }
            other => Err(RequestError::UnknownKind(other.to_string())),
        }
    }

    fn validate(&self) -> Result<(), RequestError> {
        match self {
            ExportRecord::Quote(q) if q.quote.is_empty() && q.thoughts.is_empty() => {
                Err(RequestError::EmptyQuote)
            }
            _ => Ok(()),
        }
    }
}

/// Where the page will be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Caller supplied the data-source id; used as is.
    DataSource(String),
    /// Caller supplied a database id; its first data source must be looked up.
    Database(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedExport {
    pub api_key: String,
    pub target: ExportTarget,
    pub title_property: String,
    pub record: ExportRecord,
}

impl TryFrom<ExportRequest> for ValidatedExport {
    type Error = RequestError;

    fn try_from(request: ExportRequest) -> Result<Self, Self::Error> {
        let api_key = request.api_key.trim();
        if api_key.is_empty() {
            return Err(RequestError::MissingApiKey);
        }

        let present = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let target = match (present(&request.data_source_id), present(&request.database_id)) {
            (Some(ds), _) => ExportTarget::DataSource(normalize_data_source_id(&ds)),
            (None, Some(db)) => ExportTarget::Database(normalize_database_id(&db)),
            (None, None) => return Err(RequestError::MissingTarget),
        };

        let record = ExportRecord::from_parts(&request.kind, request.payload)?;
        record.validate()?;

        let title_property = request
            .title_property
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE_PROPERTY)
            .to_string();

        Ok(ValidatedExport {
            api_key: api_key.to_string(),
            target,
            title_property,
            record,
        })
    }
}
