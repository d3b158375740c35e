use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

// Error taxonomy for the HTTP surface. Every failure a handler can hit maps to
// exactly one variant, and every variant maps to one status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // 400 - missing or malformed request fields
    #[error("{0}")]
    InvalidInput(String),

    // 500 - required credential absent
    #[error("{0}")]
    Config(String),

    // 500 - non-success status or malformed payload from an external provider
    #[error("{0}")]
    Upstream(String),

    // 429 - fixed-window quota exceeded for this client
    #[error("Too many requests, please try again later.")]
    RateLimited,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::debug!(%status, "{message}");
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_variant() {
        assert_eq!(
            ApiError::InvalidInput("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Config("no key".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Upstream("503".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn message_passes_through() {
        let err = ApiError::InvalidInput("query parameter is required".into());
        assert_eq!(err.to_string(), "query parameter is required");
    }

    #[test]
    fn rate_limited_has_fixed_message() {
        assert_eq!(
            ApiError::RateLimited.to_string(),
            "Too many requests, please try again later."
        );
    }
}
