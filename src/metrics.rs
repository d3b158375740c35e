use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("nutrition_requests_total", "Total number of requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter =
        register_counter!("nutrition_rate_limited_total", "Requests rejected by the rate limiter")
            .unwrap();
    pub static ref UPSTREAM_ERRORS_TOTAL: Counter = register_counter!(
        "nutrition_upstream_errors_total",
        "Failed calls to the completion or food database provider"
    )
    .unwrap();
    pub static ref ESTIMATE_LATENCY: Histogram = register_histogram!(
        "nutrition_estimate_latency_seconds",
        "Meal estimate request latency in seconds"
    )
    .unwrap();
}
