//! Call to the export bridge.

use common::requests::{ExportFailure, ExportRequest, ExportResponse};
use gloo_net::http::Request;

const EXPORT_PATH: &str = "/api/notion";

/// Posts `request` to the bridge. The error is the text to show the member.
pub async fn export_to_notion(request: &ExportRequest) -> Result<ExportResponse, String> {
    let response = Request::post(EXPORT_PATH)
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("서버에 연결하지 못했습니다: {e}"))?;

    let status = response.status();
    if response.ok() {
        return response
            .json::<ExportResponse>()
            .await
            .map_err(|e| e.to_string());
    }

    let message = match response.json::<ExportFailure>().await {
        Ok(failure) => failure.error,
        Err(_) => format!("노션 저장에 실패했습니다. (HTTP {status})"),
    };
    gloo_console::error!(format!("notion export failed ({status}): {message}"));
    Err(message)
}
