use axum::Json;
use axum::extract::{ConnectInfo, State};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::check_rate_limit;
use crate::error::ApiError;
use crate::estimate::{MealEstimate, normalize, parse_estimate};
use crate::metrics::{ESTIMATE_LATENCY, REQUEST_TOTAL, UPSTREAM_ERRORS_TOTAL};
use crate::openai;
use crate::state::AppState;

// POST /api/estimate-meal
//
// Input is validated before the credential check and before anything goes
// out on the wire, so malformed requests never cost an upstream call.
pub async fn estimate_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<Value>,
) -> Result<Json<MealEstimate>, ApiError> {
    REQUEST_TOTAL.inc();
    check_rate_limit(&state, addr)?;

    let user_input = payload
        .get("userInput")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ApiError::InvalidInput("userInput is required and must be a string".to_string())
        })?;

    let api_key = state
        .openai_api_key
        .as_deref()
        .ok_or_else(|| ApiError::Config("OPENAI_API_KEY is not configured".to_string()))?;

    tracing::debug!(chars = user_input.len(), "meal estimate requested");
    let start = Instant::now();

    let content = openai::request_estimate(&state.client, api_key, user_input)
        .await
        .map_err(|err| {
            UPSTREAM_ERRORS_TOTAL.inc();
            err
        })?;

    let estimate = parse_estimate(&content).map_err(|err| {
        UPSTREAM_ERRORS_TOTAL.inc();
        err
    })?;
    let estimate = normalize(estimate);

    ESTIMATE_LATENCY.observe(start.elapsed().as_secs_f64());

    Ok(Json(estimate))
}
