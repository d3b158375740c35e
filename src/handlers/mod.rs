mod estimate;
mod health;
mod metrics;
mod search;

pub use estimate::estimate_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use search::search_handler;

use std::net::SocketAddr;

use crate::error::ApiError;
use crate::metrics::RATE_LIMITED_TOTAL;
use crate::state::AppState;

// Rate limit check, shared by every client-facing handler. The key is the
// peer IP, so each client gets its own window.
fn check_rate_limit(state: &AppState, addr: SocketAddr) -> Result<(), ApiError> {
    state.rate_limiter.check(&addr.ip().to_string()).map_err(|err| {
        RATE_LIMITED_TOTAL.inc();
        err
    })
}
