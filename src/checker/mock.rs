// src/checker/mock.rs
// =============================================================================
// This module simulates checking whether a backlink is alive.
//
// Key functionality:
// - Suspends for a random delay to stand in for network latency
// - Samples a status (active, broken, redirect) for each source URL
// - Maps each status to its canonical HTTP status code
// - Stamps every result with the local wall-clock time
//
// There is no real HTTP here: the whole checker is a simulation, so it can
// run anywhere (demos, CI) without touching the network.
//
// Rust concepts:
// - async/await: The delay suspends without blocking the thread
// - Enums: To represent the possible link states
// - impl blocks: Methods attached to our own types
// =============================================================================

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Represents the state of a backlink after (or during) a check
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
// #[derive(Debug, Clone, Copy)] enables debugging and cheap copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklinkStatus {
    /// Link is live and pointing at us (HTTP 200)
    Active,
    /// Link is gone or the page errored (HTTP 404 / 500)
    Broken,
    /// Link answers with a redirect (HTTP 301)
    Redirect,
    /// Check still in flight. Display-only: the generator never emits this,
    /// it exists so renderers can show an in-progress row.
    Pending,
}

impl BacklinkStatus {
    /// Maps a status to its canonical HTTP status code
    ///
    /// This is a pure function: active -> 200, redirect -> 301,
    /// everything else -> 404. The synthetic failure path stamps 500
    /// directly and does not go through this mapping.
    pub fn canonical_code(&self) -> u16 {
        match self {
            BacklinkStatus::Active => 200,
            BacklinkStatus::Redirect => 301,
            _ => 404,
        }
    }

    /// Returns true for statuses that don't need attention
    ///
    /// A redirect still delivers visitors, so it counts as OK here;
    /// only Broken is a problem worth an alert.
    pub fn is_ok(&self) -> bool {
        matches!(self, BacklinkStatus::Active | BacklinkStatus::Redirect)
    }
}

// Represents the result of checking a single backlink source
//
// Immutable once created: the batch loop appends these to its result list
// and nothing mutates them afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// The source URL that was checked
    pub url: String,
    /// The sampled status of the link
    pub status: BacklinkStatus,
    /// Simulated response time in milliseconds
    pub response_time_ms: u64,
    /// HTTP status code matching the status
    pub status_code: u16,
    /// Local wall-clock time when the check finished
    pub last_checked: String,
}

impl CheckResult {
    /// Builds the terminal result for a source whose check itself failed
    ///
    /// Policy: a failure while checking one source must never abort the
    /// batch. The item becomes Broken with code 500 and zero response time.
    pub fn failed(url: &str) -> Self {
        CheckResult {
            url: url.to_string(),
            status: BacklinkStatus::Broken,
            response_time_ms: 0,
            status_code: 500,
            last_checked: timestamp_now(),
        }
    }

    /// Helper method to check if the backlink is OK
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

// The simulated checker
//
// Holds the delay bounds so tests can run with zero delay while the real
// CLI keeps the 1-3 second "network" feel.
pub struct MockChecker {
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl MockChecker {
    /// Creates a checker with the default 1000-3000 ms delay window
    pub fn new() -> Self {
        MockChecker {
            delay_min_ms: 1000,
            delay_max_ms: 3000,
        }
    }

    /// Creates a checker with a custom delay window (used by tests)
    pub fn with_delay(delay_min_ms: u64, delay_max_ms: u64) -> Self {
        MockChecker {
            delay_min_ms,
            delay_max_ms,
        }
    }

    // Checks a single backlink source
    //
    // Parameters:
    //   url: the source URL to "check" (borrowed, we only read it)
    //
    // Returns: CheckResult with a sampled status and timings
    //
    // The Result wrapper is part of the contract: callers must convert an
    // Err into a Broken/500 entry instead of aborting their batch, even
    // though this simulated implementation never actually fails.
    pub async fn check(&self, url: &str) -> Result<CheckResult> {
        // Simulate network latency: sleep a random duration in our window
        let delay = self.sample_delay();
        tokio::time::sleep(Duration::from_millis(delay)).await;

        // Sample one of the three terminal statuses
        // (Pending is display-only and never produced here)
        let status = match rand::rng().random_range(0..3) {
            0 => BacklinkStatus::Active,
            1 => BacklinkStatus::Broken,
            _ => BacklinkStatus::Redirect,
        };

        Ok(CheckResult {
            url: url.to_string(),
            status,
            // Simulated response time between 100 and 600 ms
            response_time_ms: rand::rng().random_range(100..600),
            status_code: status.canonical_code(),
            last_checked: timestamp_now(),
        })
    }

    // Samples a delay inside the configured window
    //
    // random_range panics on an empty range, so a zero-width window
    // (min == max, the test configuration) short-circuits to min.
    fn sample_delay(&self) -> u64 {
        if self.delay_max_ms > self.delay_min_ms {
            rand::rng().random_range(self.delay_min_ms..self.delay_max_ms)
        } else {
            self.delay_min_ms
        }
    }
}

impl Default for MockChecker {
    fn default() -> Self {
        MockChecker::new()
    }
}

// Formats the current local time the way the product displays it
// (day.month.year, 24h clock)
fn timestamp_now() -> String {
    chrono::Local::now().format("%d.%m.%Y %H:%M:%S").to_string()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why simulate instead of doing real HTTP?
//    - The product demos link checking without any network access
//    - Real verification would need an HTTP client, timeouts and retries
//    - The simulation keeps the same shape of results, so a real checker
//      could slot in behind the same types later
//
// 2. What is rand::rng()?
//    - Returns a random number generator seeded by the OS
//    - random_range(low..high) samples uniformly, high excluded
//    - Each call is cheap; no need to store the generator
//
// 3. Why derive Copy on BacklinkStatus?
//    - The enum has no data inside, so it fits in a byte
//    - Copy lets us pass it around without worrying about ownership
//    - CheckResult is NOT Copy because it owns Strings
//
// 4. What does #[serde(rename_all = "snake_case")] do?
//    - Serializes Active as "active", Broken as "broken", etc.
//    - Keeps the JSON output lowercase like a web API would
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_codes() {
        assert_eq!(BacklinkStatus::Active.canonical_code(), 200);
        assert_eq!(BacklinkStatus::Redirect.canonical_code(), 301);
        assert_eq!(BacklinkStatus::Broken.canonical_code(), 404);
        // Pending never leaves the generator, but the mapping still
        // answers for it
        assert_eq!(BacklinkStatus::Pending.canonical_code(), 404);
    }

    #[test]
    fn test_failed_result_is_broken_500() {
        let result = CheckResult::failed("https://example.com/page");
        assert_eq!(result.status, BacklinkStatus::Broken);
        assert_eq!(result.status_code, 500);
        assert_eq!(result.response_time_ms, 0);
        assert!(!result.is_ok());
    }

    #[tokio::test]
    async fn test_check_produces_terminal_status() {
        let checker = MockChecker::with_delay(0, 0);

        // Run a handful of checks; every one must land on a terminal
        // status with its canonical code and a plausible response time
        for _ in 0..20 {
            let result = checker.check("https://example.com").await.unwrap();
            assert_ne!(result.status, BacklinkStatus::Pending);
            assert_eq!(result.status_code, result.status.canonical_code());
            assert!(result.response_time_ms >= 100 && result.response_time_ms < 600);
            assert_eq!(result.url, "https://example.com");
        }
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&BacklinkStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let json = serde_json::to_string(&BacklinkStatus::Redirect).unwrap();
        assert_eq!(json, "\"redirect\"");
    }

    #[test]
    fn test_redirect_counts_as_ok() {
        assert!(BacklinkStatus::Active.is_ok());
        assert!(BacklinkStatus::Redirect.is_ok());
        assert!(!BacklinkStatus::Broken.is_ok());
        assert!(!BacklinkStatus::Pending.is_ok());
    }
}
