//! # Notion Export Service Module
//!
//! Routes for copying club archive entries into a Notion database. The
//! browser never talks to Notion directly: it posts the entry together with
//! the member's own API key and target identifiers, and this service performs
//! the Notion calls on its behalf.
//!
//! ## Sub-modules:
//! - `client`: the HTTP client for the Notion REST API.
//! - `export`: the request handler and the export pipeline.
//! - `error`: `ExportError` and its mapping onto HTTP responses.

mod client;
mod error;
mod export;

pub use client::NotionClient;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for the export bridge.
const API_PATH: &str = "/api/notion";

/// Configures and returns the Actix `Scope` for the export bridge.
///
/// # Registered Routes:
///
/// *   **`POST /api/notion`**:
///     - **Handler**: `export::process`
///     - **Description**: Expects `{apiKey, databaseId?, dataSourceId?, type,
///       payload, titleProperty?}` and creates one page. Answers
///       `{ok, pageId, url}` or `{error, status?, code?}`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(export::process))
}
