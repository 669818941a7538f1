//! User-facing text for failed Notion calls.
//!
//! The API reports failures with an HTTP status and a symbolic `code`. The
//! three conditions members actually run into (integration not connected,
//! wrong id, wrong key) get an explanation with remediation steps; anything
//! else passes the API's own message through.

pub const PERMISSION_MESSAGE: &str = "노션 데이터베이스에 연동이 연결되어 있지 않습니다. 노션에서 해당 데이터베이스 페이지를 열고, 우측 상단 ••• 메뉴 → 연결 → 연동 이름을 선택해 '연결 추가'를 해 주세요.";

pub const NOT_FOUND_MESSAGE: &str = "데이터베이스를 찾을 수 없습니다(404).\n\n① Database ID 확인: 노션 데이터베이스 페이지에서 URL의 마지막 부분(32자리 ID)만 복사했는지 확인하세요.\n② 연결 추가: 해당 데이터베이스 페이지를 연동(Integration)에 연결했는지 확인하세요. 노션에서 ••• 메뉴 → 연결 → 연동 이름으로 '연결 추가'해 주세요.";

pub const UNAUTHORIZED_MESSAGE: &str =
    "Notion API Key가 올바르지 않습니다. 노션 연동(Integration) 설정에서 키를 다시 확인해 주세요.";

pub const GENERIC_MESSAGE: &str = "Notion API 오류가 발생했어요.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Permission,
    NotFound,
    Unauthorized,
    Other,
}

impl FailureKind {
    pub fn classify(status: u16, code: Option<&str>) -> Self {
        match (status, code) {
            (403, _) | (_, Some("restricted_resource")) => FailureKind::Permission,
            (404, _) | (_, Some("object_not_found")) => FailureKind::NotFound,
            (401, _) | (_, Some("unauthorized")) => FailureKind::Unauthorized,
            _ => FailureKind::Other,
        }
    }
}

/// Explanation for a failed call; unrecognised failures keep `message`.
pub fn friendly_message(status: u16, message: &str, code: Option<&str>) -> String {
    match FailureKind::classify(status, code) {
        FailureKind::Permission => PERMISSION_MESSAGE.to_string(),
        FailureKind::NotFound => NOT_FOUND_MESSAGE.to_string(),
        FailureKind::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
        FailureKind::Other if message.is_empty() => GENERIC_MESSAGE.to_string(),
        FailureKind::Other => message.to_string(),
    }
}

/// [`friendly_message`] plus the raw status and code for the two conditions
/// that are hardest to diagnose from the explanation alone.
pub fn alert_message(status: u16, message: &str, code: Option<&str>) -> String {
    let friendly = friendly_message(status, message, code);
    match FailureKind::classify(status, code) {
        FailureKind::Permission | FailureKind::NotFound => {
            let code = code.map(|c| format!(", code: {c}")).unwrap_or_default();
            format!("{friendly}\n\n[상세] status: {status}{code}")
        }
        _ => friendly,
    }
}

/// HTTP status for the bridge response: the remote status when it is an
/// error status, 500 otherwise.
pub fn response_status(status: Option<u16>) -> u16 {
    match status {
        Some(status) if (400..600).contains(&status) => status,
        _ => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_or_code_selects_the_explanation() {
        assert_eq!(friendly_message(403, "raw", None), PERMISSION_MESSAGE);
        assert_eq!(friendly_message(400, "raw", Some("restricted_resource")), PERMISSION_MESSAGE);
        assert_eq!(friendly_message(404, "raw", None), NOT_FOUND_MESSAGE);
        assert_eq!(friendly_message(400, "raw", Some("object_not_found")), NOT_FOUND_MESSAGE);
        assert_eq!(friendly_message(401, "raw", Some("unauthorized")), UNAUTHORIZED_MESSAGE);
    }

    #[test]
    fn other_failures_pass_the_message_through() {
        assert_eq!(
            friendly_message(400, "body.properties.Name should be defined", Some("validation_error")),
            "body.properties.Name should be defined"
        );
        assert_eq!(friendly_message(502, "", None), GENERIC_MESSAGE);
    }

    #[test]
    fn not_found_mentions_id_format_and_connection() {
        let message = alert_message(404, "Could not find database", Some("object_not_found"));
        assert!(message.contains("Database ID"));
        assert!(message.contains("32자리"));
        assert!(message.contains("연결 추가"));
        assert!(message.ends_with("[상세] status: 404, code: object_not_found"));
    }

    #[test]
    fn permission_detail_without_code() {
        let message = alert_message(403, "", None);
        assert!(message.ends_with("[상세] status: 403"));
    }

    #[test]
    fn unauthorized_has_no_detail_suffix() {
        assert_eq!(alert_message(401, "", None), UNAUTHORIZED_MESSAGE);
    }

    #[test]
    fn only_error_statuses_are_echoed() {
        assert_eq!(response_status(Some(403)), 403);
        assert_eq!(response_status(Some(599)), 599);
        assert_eq!(response_status(Some(302)), 500);
        assert_eq!(response_status(None), 500);
    }
}
