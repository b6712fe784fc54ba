//! 인스턴스 REST API 연동 계층.

pub mod mastodon;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub use mastodon::MastodonClient;

/// 2xx가 아닌 API 응답.
#[derive(Debug, Error)]
#[error("{message} ({status})")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    error_description: Option<String>,
}

impl ApiError {
    /// `{"error": "..."}` 본문이 있으면 그 메시지를, 없으면 본문 앞부분을 사용한다.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                error,
                error_description: Some(description),
            }) => format!("{error}: {description}"),
            Ok(ErrorBody { error, .. }) => error,
            Err(_) => {
                let snippet: String = body.trim().chars().take(200).collect();
                if snippet.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    snippet
                }
            }
        };

        Self { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_error_field_from_json_body() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"error":"Record not found"}"#);
        assert_eq!(err.message, "Record not found");
        assert_eq!(err.to_string(), "Record not found (404 Not Found)");
    }

    #[test]
    fn appends_error_description() {
        let err = ApiError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"invalid_token","error_description":"The access token is invalid"}"#,
        );
        assert_eq!(err.message, "invalid_token: The access token is invalid");
    }

    #[test]
    fn falls_back_to_body_or_reason() {
        let html = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(html.message, "<html>bad gateway</html>");

        let empty = ApiError::from_response(StatusCode::SERVICE_UNAVAILABLE, "  ");
        assert_eq!(empty.message, "Service Unavailable");
    }
}
