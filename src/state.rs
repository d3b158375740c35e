use crate::rate_limit::RateLimiter;

// app's shared state

pub struct AppState {
    pub client: reqwest::Client,
    pub rate_limiter: RateLimiter,
    pub openai_api_key: Option<String>, // absence is a per-request error, not a startup error
    pub usda_api_key: String,
}
