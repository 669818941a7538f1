//! # Notion Export Handler
//!
//! Backend logic for `POST /api/notion`: copies one archived quote or
//! interview answer into the club's Notion database as a new page.
//!
//! ## Workflow
//!
//! 1.  **Validation**: the JSON body is turned into a
//!     `common::notion::record::ValidatedExport`. A missing API key, a missing
//!     identifier, an unknown `type` or an empty quote ends the request here
//!     with `400 Bad Request`; Notion is never contacted.
//!
//! 2.  **Target resolution**:
//!     - a data source id is used as is (after normalisation);
//!     - otherwise the database is retrieved with `GET /v1/databases/{id}` and
//!       the first entry of its `data_sources` list becomes the target. A
//!       database without a readable data source is answered with `400` and a
//!       message explaining the cause and how to fix it.
//!
//! 3.  **Page creation**: the body built by `common::notion::page` is sent to
//!     `POST /v1/pages`.
//!
//! 4.  **HTTP Response**: `200 OK` with `{ok, pageId, url}`, or the mapped
//!     `ExportError` (see `error.rs`).
//!
//! Nothing is retried. The API key is forwarded to Notion and never logged.

use actix_web::{web, HttpResponse};
use common::notion::page::create_page_body;
use common::notion::record::{ExportTarget, ValidatedExport};
use common::notion::resolve::data_source_from_database;
use common::requests::{ExportRequest, ExportResponse};
use log::{error, info, warn};

use super::client::{CreatedPage, NotionClient};
use super::error::ExportError;

/// Actix web handler for `POST /api/notion`.
pub async fn process(
    client: web::Data<NotionClient>,
    request: web::Json<ExportRequest>,
) -> Result<HttpResponse, ExportError> {
    let export = ValidatedExport::try_from(request.into_inner()).inspect_err(|e| {
        warn!("[notion] rejected export request: {e}");
    })?;

    let page = export_page(&client, &export).await?;
    info!("[notion] created {} page {}", export.record.kind(), page.id);

    Ok(HttpResponse::Ok().json(ExportResponse {
        ok: true,
        page_id: page.id,
        url: page.url,
    }))
}

/// Resolves the target and creates the page.
pub async fn export_page(
    client: &NotionClient,
    export: &ValidatedExport,
) -> Result<CreatedPage, ExportError> {
    let data_source_id = resolve_data_source(client, export).await?;
    let body = create_page_body(&data_source_id, &export.title_property, &export.record);

    client
        .create_page(&export.api_key, &body)
        .await
        .inspect_err(|e| log_failure("pages.create", e))
}

async fn resolve_data_source(
    client: &NotionClient,
    export: &ValidatedExport,
) -> Result<String, ExportError> {
    match &export.target {
        ExportTarget::DataSource(id) => {
            info!("[notion] using data source id directly: {id}");
            Ok(id.clone())
        }
        ExportTarget::Database(database_id) => {
            info!("[notion] database id (normalized): {database_id}");
            let database = client
                .retrieve_database(&export.api_key, database_id)
                .await
                .inspect_err(|e| log_failure("databases.retrieve", e))?;

            let data_source_id = data_source_from_database(&database).inspect_err(|e| {
                error!("[notion] data source lookup failed: {}", e.reason());
            })?;
            info!("[notion] resolved data source id: {data_source_id}");
            Ok(data_source_id)
        }
    }
}

fn log_failure(call: &str, error: &ExportError) {
    match error {
        ExportError::Remote { status, code, message } => {
            error!(
                "[notion] {call} failed: status {status}, code {}: {message}",
                code.as_deref().unwrap_or("-")
            );
            if *status == 403 {
                error!("[notion] permission error: the integration is not connected to this database");
            }
        }
        other => error!("[notion] {call} failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::notion::error::NOT_FOUND_MESSAGE;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::{json_config, notion};

    const DB_HEX: &str = "abcdef1234567890abcdef1234567890";
    const DB_ID: &str = "abcdef12-3456-7890-abcd-ef1234567890";

    async fn call(server: &MockServer, body: Value) -> (StatusCode, Value) {
        call_at(&server.uri(), body).await
    }

    async fn call_at(api_base: &str, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(NotionClient::new(api_base, "2025-09-03")))
                .app_data(json_config(1024 * 1024))
                .service(notion::configure_routes()),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/api/notion")
            .set_json(body)
            .to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status();
        (status, test::read_body_json(response).await)
    }

    fn page_created() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "object": "page",
            "id": "page-1",
            "url": "https://www.notion.so/page-1"
        }))
    }

    #[actix_web::test]
    async fn direct_data_source_skips_database_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/pages"))
            .and(body_partial_json(json!({
                "parent": { "data_source_id": "22222222-2222-2222-2222-222222222222" },
                "properties": { "Name": { "title": [{ "text": { "content": "팩트풀니스" } }] } }
            })))
            .respond_with(page_created())
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = call(
            &server,
            json!({
                "apiKey": "secret_k",
                "databaseId": DB_HEX,
                "dataSourceId": "22222222222222222222222222222222",
                "type": "quote",
                "payload": { "bookTitle": "팩트풀니스", "quote": "세상은 나아진다" }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "ok": true, "pageId": "page-1", "url": "https://www.notion.so/page-1" })
        );
    }

    #[actix_web::test]
    async fn database_url_is_resolved_to_its_first_data_source() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/v1/databases/{DB_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "database",
                "id": DB_ID,
                "data_sources": [{ "id": "ds-1", "name": "Archive" }, { "id": "ds-2" }]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/pages"))
            .and(body_partial_json(json!({ "parent": { "data_source_id": "ds-1" } })))
            .respond_with(page_created())
            .expect(1)
            .mount(&server)
            .await;

        let (status, _) = call(
            &server,
            json!({
                "apiKey": "k",
                "databaseId": format!("https://www.notion.so/club/{DB_HEX}?v=1"),
                "type": "interview",
                "payload": { "keyword": "맥락", "question": "q", "answer": "a" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn quote_without_author_has_no_author_property() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(page_created())
            .mount(&server)
            .await;

        let (status, _) = call(
            &server,
            json!({
                "apiKey": "k",
                "dataSourceId": "ds",
                "type": "quote",
                "payload": { "bookTitle": "책", "quote": "문장", "author": "  " }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let requests = server.received_requests().await.unwrap();
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        let properties = sent["properties"].as_object().unwrap();
        assert!(properties.contains_key("quate"));
        assert!(!properties.contains_key("author"));
        assert_eq!(sent["children"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn invalid_requests_never_reach_notion() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let (status, body) = call(
            &server,
            json!({ "apiKey": "", "dataSourceId": "ds", "type": "quote", "payload": { "quote": "q" } }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Notion API Key가 필요합니다." }));

        let (status, body) = call(
            &server,
            json!({ "apiKey": "k", "dataSourceId": "ds", "type": "book", "payload": {} }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "잘못된 type입니다.");

        let (status, body) = call(
            &server,
            json!({
                "apiKey": "k",
                "databaseId": DB_HEX,
                "type": "quote",
                "payload": { "bookTitle": "책", "quote": " ", "thoughts": "" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("quote"));
    }

    #[actix_web::test]
    async fn malformed_json_gets_an_error_body() {
        let server = MockServer::start().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(NotionClient::new(&server.uri(), "2025-09-03")))
                .app_data(json_config(1024 * 1024))
                .service(notion::configure_routes()),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/api/notion")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn restricted_resource_is_explained_with_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "object": "error",
                "status": 403,
                "code": "restricted_resource",
                "message": "Insufficient permissions for this endpoint."
            })))
            .mount(&server)
            .await;

        let (status, body) = call(
            &server,
            json!({ "apiKey": "k", "databaseId": DB_HEX, "type": "interview", "payload": {} }),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["status"], 403);
        assert_eq!(body["code"], "restricted_resource");
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("연결 추가"));
        assert!(error.ends_with("[상세] status: 403, code: restricted_resource"));
    }

    #[actix_web::test]
    async fn page_not_found_carries_both_hints() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "object": "error",
                "status": 404,
                "code": "object_not_found",
                "message": "Could not find data_source"
            })))
            .mount(&server)
            .await;

        let (status, body) = call(
            &server,
            json!({ "apiKey": "k", "dataSourceId": "ds", "type": "interview", "payload": {} }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"],
            format!("{NOT_FOUND_MESSAGE}\n\n[상세] status: 404, code: object_not_found")
        );
    }

    #[actix_web::test]
    async fn empty_data_source_list_is_a_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "object": "database", "data_sources": [] })),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(page_created())
            .expect(0)
            .mount(&server)
            .await;

        let (status, body) = call(
            &server,
            json!({ "apiKey": "k", "databaseId": DB_HEX, "type": "interview", "payload": {} }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("data_source_id를 찾지 못했습니다."));
        assert!(error.contains("empty"));
        assert!(body.get("status").is_none());
    }

    #[actix_web::test]
    async fn other_remote_errors_pass_their_message_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "object": "error",
                "status": 400,
                "code": "validation_error",
                "message": "Name is not a property that exists."
            })))
            .mount(&server)
            .await;

        let (status, body) = call(
            &server,
            json!({ "apiKey": "k", "dataSourceId": "ds", "type": "interview", "payload": {} }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": "Name is not a property that exists.",
                "status": 400,
                "code": "validation_error"
            })
        );
    }

    #[actix_web::test]
    async fn unreachable_notion_answers_500_with_status() {
        // Nothing listens on port 1.
        let (status, body) = call_at(
            "http://127.0.0.1:1",
            json!({ "apiKey": "k", "dataSourceId": "ds", "type": "interview", "payload": {} }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], json!(500));
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(body.get("code").is_none());
    }

    #[actix_web::test]
    async fn undecodable_page_reply_answers_500_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/pages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "object": "page" })))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = call(
            &server,
            json!({ "apiKey": "k", "dataSourceId": "ds", "type": "interview", "payload": {} }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], json!(500));
        assert!(!body["error"].as_str().unwrap().is_empty());
    }
}
