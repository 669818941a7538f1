use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::notion::error::{alert_message, response_status};
use common::notion::record::RequestError;
use common::notion::resolve::ResolveError;
use common::requests::ExportFailure;
use thiserror::Error;

/// Everything that can stop an export, with the HTTP answer for each.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Bad input; nothing was sent to Notion.
    #[error(transparent)]
    Validation(#[from] RequestError),

    /// The database answered but its data source could not be read.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Notion answered with an error status.
    #[error("{message}")]
    Remote {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// No usable answer from Notion at all: unreachable, or a success body
    /// that does not decode. Answered as 500.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ExportError {
    pub fn failure(&self) -> ExportFailure {
        match self {
            ExportError::Remote {
                status,
                code,
                message,
            } => ExportFailure {
                error: alert_message(*status, message, code.as_deref()),
                status: Some(*status),
                code: code.clone(),
            },
            ExportError::Transport(e) => ExportFailure {
                error: e.to_string(),
                status: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
                code: None,
            },
            other => ExportFailure::message(other.to_string()),
        }
    }
}

impl ResponseError for ExportError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExportError::Validation(_) | ExportError::Resolve(_) => StatusCode::BAD_REQUEST,
            ExportError::Remote { status, .. } => {
                StatusCode::from_u16(response_status(Some(*status)))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ExportError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.failure())
    }
}
