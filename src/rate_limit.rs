use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::error::ApiError;

// Rate limit entry - tracks requests per client key within the current window
struct RateLimitEntry {
    count: u32,
    reset_at: Instant,
}

// Fixed-window rate limiter keyed by client address. One instance lives in
// AppState and every handler goes through it.
//
// Entries are never evicted, so the map grows with the number of distinct
// clients seen over the life of the process. Known limitation, kept on purpose.
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            max_requests,
            window,
        }
    }

    // Admit or reject one request from `key`. DashMap holds the entry lock for
    // the whole check, so increment-and-compare is atomic per key.
    pub fn check(&self, key: &str) -> Result<(), ApiError> {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> Result<(), ApiError> {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(RateLimitEntry {
                count: 0,
                reset_at: now + self.window,
            });

        // window expired? start a fresh one
        if now > entry.reset_at {
            entry.count = 1;
            entry.reset_at = now + self.window;
            return Ok(());
        }

        // under limit? admit
        if entry.count < self.max_requests {
            entry.count += 1;
            return Ok(());
        }

        Err(ApiError::RateLimited)
    }
}
