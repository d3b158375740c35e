use axum::Json;
use axum::extract::{ConnectInfo, Query, State};
use std::net::SocketAddr;
use std::sync::Arc;

use super::check_rate_limit;
use crate::error::ApiError;
use crate::metrics::{REQUEST_TOTAL, UPSTREAM_ERRORS_TOTAL};
use crate::models::SearchParams;
use crate::state::AppState;
use crate::usda;

// GET /api/search-foods?query=&pageSize=&pageNumber=
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    REQUEST_TOTAL.inc();
    check_rate_limit(&state, addr)?;

    let query = params
        .query
        .as_deref()
        .ok_or_else(|| ApiError::InvalidInput("query parameter is required".to_string()))?;

    let page_size = parse_page(params.page_size.as_deref().unwrap_or("10"), "pageSize")?;
    let page_number = parse_page(params.page_number.as_deref().unwrap_or("1"), "pageNumber")?;

    let body = usda::search_foods(
        &state.client,
        &state.usda_api_key,
        query,
        page_size,
        page_number,
    )
    .await
    .map_err(|err| {
        UPSTREAM_ERRORS_TOTAL.inc();
        err
    })?;

    Ok(Json(body))
}

// Page values arrive as strings ("10", "1" defaults included) and must be
// base-10 integers of at least 1.
fn parse_page(raw: &str, name: &str) -> Result<u32, ApiError> {
    match raw.parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ApiError::InvalidInput(format!(
            "{name} must be a positive integer"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_limit::RateLimiter;
    use std::time::Duration;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            client: reqwest::Client::new(),
            rate_limiter: RateLimiter::new(30, Duration::from_secs(60)),
            openai_api_key: None,
            usda_api_key: "DEMO_KEY".to_string(),
        })
    }

    fn addr() -> SocketAddr {
        "127.0.0.1:4000".parse().unwrap()
    }

    fn params(
        query: Option<&str>,
        page_size: Option<&str>,
        page_number: Option<&str>,
    ) -> SearchParams {
        SearchParams {
            query: query.map(String::from),
            page_size: page_size.map(String::from),
            page_number: page_number.map(String::from),
        }
    }

    async fn run(p: SearchParams) -> Result<Json<serde_json::Value>, ApiError> {
        search_handler(State(test_state()), ConnectInfo(addr()), Query(p)).await
    }

    // each bad parameter is a 400 with no outbound call

    #[tokio::test]
    async fn missing_query_is_rejected() {
        let err = run(params(None, None, None)).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert!(err.to_string().contains("query"));
    }

    #[tokio::test]
    async fn zero_page_size_is_rejected() {
        let err = run(params(Some("apple"), Some("0"), None)).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert!(err.to_string().contains("pageSize"));
    }

    #[tokio::test]
    async fn negative_page_number_is_rejected() {
        let err = run(params(Some("apple"), None, Some("-1"))).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert!(err.to_string().contains("pageNumber"));
    }

    #[tokio::test]
    async fn non_numeric_page_values_are_rejected() {
        let err = run(params(Some("apple"), Some("ten"), None)).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = run(params(Some("apple"), None, Some("1.5"))).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn parse_page_accepts_plain_integers() {
        assert_eq!(parse_page("10", "pageSize").unwrap(), 10);
        assert_eq!(parse_page("1", "pageNumber").unwrap(), 1);
        assert!(parse_page("0", "pageSize").is_err());
        assert!(parse_page("+nonsense", "pageSize").is_err());
    }
}
