mod config;
mod error;
mod estimate;
mod handlers;
mod metrics;
mod models;
mod openai;
mod prompt;
mod rate_limit;
mod state;
mod usda;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use config::Args;
use handlers::{estimate_handler, health_handler, metrics_handler, search_handler};
use rate_limit::RateLimiter;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // parse cli arguments (API keys fall back to the environment)
    let args = Args::parse();

    // creating shared state, the rate limiter is built once and injected here
    let state = Arc::new(AppState {
        client: reqwest::Client::new(),
        rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
        openai_api_key: args.openai_api_key.clone(),
        usda_api_key: args.usda_api_key.clone(),
    });

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/estimate-meal", post(estimate_handler))
        .route("/api/search-foods", get(search_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Gateway running on http://localhost:{}", args.port);
    tracing::info!(
        "Rate limit: {} requests per {} seconds per client",
        args.rate_limit,
        args.rate_window
    );
    tracing::info!(
        "OpenAI API key configured: {}",
        args.openai_api_key.is_some()
    );

    // handlers key the rate limiter by peer address, so serve with connect info
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
