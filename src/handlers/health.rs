use axum::Json;
use axum::extract::{ConnectInfo, State};
use std::net::SocketAddr;
use std::sync::Arc;

use super::check_rate_limit;
use crate::error::ApiError;
use crate::metrics::REQUEST_TOTAL;
use crate::state::AppState;

// health handler
pub async fn health_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Json<serde_json::Value>, ApiError> {
    REQUEST_TOTAL.inc();
    check_rate_limit(&state, addr)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_limit::RateLimiter;
    use std::time::Duration;

    fn test_state(max_requests: u32) -> Arc<AppState> {
        Arc::new(AppState {
            client: reqwest::Client::new(),
            rate_limiter: RateLimiter::new(max_requests, Duration::from_secs(60)),
            openai_api_key: None,
            usda_api_key: "DEMO_KEY".to_string(),
        })
    }

    fn addr() -> SocketAddr {
        "127.0.0.1:4000".parse().unwrap()
    }

    #[tokio::test]
    async fn reports_ok_with_rfc3339_timestamp() {
        let response = health_handler(State(test_state(30)), ConnectInfo(addr()))
            .await
            .unwrap();

        assert_eq!(response.0["status"], "ok");
        let ts = response.0["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[tokio::test]
    async fn rejects_once_over_quota() {
        let state = test_state(1);

        assert!(health_handler(State(state.clone()), ConnectInfo(addr()))
            .await
            .is_ok());
        assert!(matches!(
            health_handler(State(state), ConnectInfo(addr())).await,
            Err(ApiError::RateLimited)
        ));
    }
}
