//! Failed-login rate limiting.
//!
//! Counters are kept in an in-process TTL cache keyed by client network
//! identifier. The TTL is measured from the last write, so every recorded
//! failure refreshes the window (sliding, not absolute). A missing counter
//! reads as zero attempts.

use std::time::Duration;

use moka::sync::Cache;

/// Failed attempts at or above this count block further logins.
pub const MAX_LOGIN_ATTEMPTS: u32 = 5;

/// How long a failure counter survives after its last write.
pub const LOGIN_ATTEMPT_WINDOW: Duration = Duration::from_secs(900);

/// Tracks consecutive failed login attempts per client key.
///
/// Shared across requests behind an `Arc`; increments are atomic per key
/// (the cache's entry API serializes concurrent upserts of the same key).
pub struct LoginRateLimiter {
    counters: Cache<String, u32>,
    threshold: u32,
}

impl LoginRateLimiter {
    pub fn new(threshold: u32, window: Duration) -> Self {
        let counters = Cache::builder()
            .max_capacity(100_000)
            .time_to_live(window)
            .build();
        Self {
            counters,
            threshold,
        }
    }

    /// Record one failed attempt, returning the new count for the key.
    ///
    /// Also refreshes the expiry window for the key.
    pub fn record_failure(&self, key: &str) -> u32 {
        self.counters
            .entry(key.to_string())
            .and_upsert_with(|existing| match existing {
                Some(entry) => entry.into_value().saturating_add(1),
                None => 1,
            })
            .into_value()
    }

    /// Whether the key has reached the failure threshold.
    ///
    /// An absent (never-failed or expired) counter counts as zero.
    pub fn is_blocked(&self, key: &str) -> bool {
        self.counters
            .get(key)
            .is_some_and(|count| count >= self.threshold)
    }

    /// Clear the counter for the key.
    ///
    /// Called exactly once on every successful authentication for the key,
    /// before a token is issued.
    pub fn reset(&self, key: &str) {
        self.counters.invalidate(key);
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new(MAX_LOGIN_ATTEMPTS, LOGIN_ATTEMPT_WINDOW)
    }
}
