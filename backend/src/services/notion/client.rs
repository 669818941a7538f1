//! Thin HTTP client for the two Notion endpoints the bridge calls.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::ExportError;
use crate::config::NotionConfig;

/// Page returned by `POST /v1/pages`; only the fields the club needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Error object Notion sends with every non-2xx answer.
#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    api_base: String,
    version: String,
}

impl NotionClient {
    pub fn new(api_base: &str, version: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            version: version.to_string(),
        }
    }

    pub fn from_config(config: &NotionConfig) -> Self {
        Self::new(&config.api_base, &config.version)
    }

    /// `GET /v1/databases/{id}`. The raw object is returned because only
    /// its `data_sources` list is read, and its shape varies by API version.
    pub async fn retrieve_database(
        &self,
        api_key: &str,
        database_id: &str,
    ) -> Result<Value, ExportError> {
        let url = format!("{}/v1/databases/{}", self.api_base, database_id);
        self.send(self.http.get(url), api_key).await
    }

    /// `POST /v1/pages` with a body from `common::notion::page`.
    pub async fn create_page(&self, api_key: &str, body: &Value) -> Result<CreatedPage, ExportError> {
        let url = format!("{}/v1/pages", self.api_base);
        self.send(self.http.post(url).json(body), api_key).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        api_key: &str,
    ) -> Result<T, ExportError> {
        let response = request
            .bearer_auth(api_key)
            .header("Notion-Version", &self.version)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ApiError>(&text).unwrap_or_else(|_| ApiError {
            code: None,
            message: text.trim().to_string(),
        });
        Err(ExportError::Remote {
            status: status.as_u16(),
            code: body.code,
            message: body.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sends_auth_and_version_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/pages"))
            .and(header("authorization", "Bearer secret_k"))
            .and(header("notion-version", "2025-09-03"))
            .and(body_json(json!({ "parent": { "data_source_id": "ds" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "page",
                "id": "page-1",
                "url": "https://www.notion.so/page-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotionClient::new(&format!("{}/", server.uri()), "2025-09-03");
        let page = client
            .create_page("secret_k", &json!({ "parent": { "data_source_id": "ds" } }))
            .await
            .unwrap();
        assert_eq!(
            page,
            CreatedPage {
                id: "page-1".into(),
                url: Some("https://www.notion.so/page-1".into()),
            }
        );
    }

    #[tokio::test]
    async fn error_object_becomes_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/databases/db-1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "object": "error",
                "status": 404,
                "code": "object_not_found",
                "message": "Could not find database with ID: db-1."
            })))
            .mount(&server)
            .await;

        let client = NotionClient::new(&server.uri(), "2025-09-03");
        match client.retrieve_database("k", "db-1").await {
            Err(ExportError::Remote { status, code, message }) => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("object_not_found"));
                assert_eq!(message, "Could not find database with ID: db-1.");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_keeps_its_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let client = NotionClient::new(&server.uri(), "2025-09-03");
        match client.create_page("k", &json!({})).await {
            Err(ExportError::Remote { status, code, message }) => {
                assert_eq!((status, code, message.as_str()), (502, None, "upstream down"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
