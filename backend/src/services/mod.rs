pub mod client_config;
pub mod notion;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use common::requests::ExportFailure;

/// JSON extractor settings shared by every route: bodies over `limit` bytes
/// or that fail to parse are answered with `400` and an `{error}` body.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ExportFailure::message(err.to_string()));
            InternalError::from_response(err, response).into()
        })
}
