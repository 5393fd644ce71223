// src/checker/batch.rs
// =============================================================================
// This module runs one check batch over a list of backlink sources.
//
// How a batch works:
// 1. Gate on the quota - an exhausted allowance rejects before anything runs
// 2. Validate the input - a blank target or zero non-blank sources rejects
// 3. Truncate the source list to the plan's cap (silently, never an error)
// 4. Check each source IN ORDER, one at a time, publishing every result and
//    a progress snapshot as soon as it lands
// 5. On completion, charge the quota exactly once for the whole batch
//
// The loop is strictly sequential: total wall-clock time is the SUM of the
// per-item delays, not the max. There is no cancellation and no per-item
// timeout beyond the simulated delay itself.
//
// Rust concepts:
// - Generics with FnMut: The observer is any closure the caller hands in
// - thiserror: Typed rejection reasons the caller can match on
// - Iterator chains: split / trim / filter / take in one pipeline
// =============================================================================

use thiserror::Error;

use crate::checker::mock::{CheckResult, MockChecker};
use crate::plan::Plan;
use crate::quota::Quota;

// Why a batch refused to start
//
// All three reject BEFORE any check runs, so no quota is ever consumed by
// a rejected batch. PartialEq lets tests assert the exact reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchRejection {
    /// The session's check allowance is used up
    #[error("no checks remaining")]
    NoChecksRemaining,
    /// The target website field was blank
    #[error("no target website given")]
    EmptyTarget,
    /// No non-blank source URL survived parsing
    #[error("no source URLs given")]
    NoSources,
}

// A progress snapshot published after every completed item
#[derive(Debug, Clone, Copy)]
pub struct BatchProgress {
    /// Items finished so far (1-based once the first result lands)
    pub completed: usize,
    /// Items in this batch after truncation
    pub total: usize,
    /// completed / total as a percentage
    pub percent: f64,
}

// Runs one check batch
//
// Parameters:
//   checker: the simulated checker (owns the delay window)
//   quota: the session allowance; charged once on completion
//   plan: the tier, which fixes the source cap
//   target: the user's own website (must be non-blank; the simulation does
//           not otherwise use it, since no real page is ever fetched)
//   sources: raw multi-line text, one candidate URL per line
//   observer: called with (result, progress) after every item so the caller
//             can render partial results while the batch is still running
//
// Returns: the ordered results, or the reason the batch never started
pub async fn run_batch<F>(
    checker: &MockChecker,
    quota: &mut Quota,
    plan: Plan,
    target: &str,
    sources: &str,
    mut observer: F,
) -> Result<Vec<CheckResult>, BatchRejection>
where
    F: FnMut(&CheckResult, BatchProgress),
{
    // Gate first: an exhausted quota rejects before any validation
    if !quota.can_start_check() {
        return Err(BatchRejection::NoChecksRemaining);
    }

    if target.trim().is_empty() {
        return Err(BatchRejection::EmptyTarget);
    }

    // Split the textarea-style input into candidate URLs:
    // one per line, blanks dropped, capped at the tier limit
    let source_list: Vec<&str> = sources
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(plan.source_cap())
        .collect();

    if source_list.is_empty() {
        return Err(BatchRejection::NoSources);
    }

    let total = source_list.len();
    let mut results = Vec::with_capacity(total);

    // Strictly sequential: one check at a time, in input order
    for (index, url) in source_list.into_iter().enumerate() {
        // A failure while checking one item becomes a Broken/500 entry
        // for that item; the batch itself always runs to completion
        let result = match checker.check(url).await {
            Ok(result) => result,
            Err(_) => CheckResult::failed(url),
        };

        let completed = index + 1;
        let progress = BatchProgress {
            completed,
            total,
            percent: completed as f64 / total as f64 * 100.0,
        };

        // Publish the result the moment it lands, then keep it
        observer(&result, progress);
        results.push(result);
    }

    // One batch = one check, regardless of how many sources it contained
    quota.on_batch_complete();

    Ok(results)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the observer a generic FnMut?
//    - FnMut means "a closure that may mutate what it captured"
//    - The CLI captures stdout state; tests capture Vecs to assert on
//    - Generics mean zero overhead: the closure is inlined per call site
//
// 2. Why return Result<Vec<...>, BatchRejection> instead of anyhow?
//    - The caller shows a different localized message per reason
//    - A typed enum makes that a match; anyhow would mean string-sniffing
//
// 3. What does .take(n) do?
//    - Stops the iterator after n items
//    - This is the silent truncation: extra lines are simply never seen
//
// 4. Why into_iter() on the Vec?
//    - We're done with the list; consuming it avoids an extra borrow
//    - enumerate() then numbers the items for the progress math
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Test helper: a checker with no delay so batches finish instantly
    fn instant_checker() -> MockChecker {
        MockChecker::with_delay(0, 0)
    }

    #[tokio::test]
    async fn test_three_sources_three_results() {
        let mut quota = Quota::for_plan(Plan::Free);
        let sources = "https://a.com\nhttps://b.com\nhttps://c.com";

        let results = run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Free,
            "https://mysite.com",
            sources,
            |_, _| {},
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(quota.remaining(), 9);
    }

    #[tokio::test]
    async fn test_free_plan_caps_at_five() {
        let mut quota = Quota::for_plan(Plan::Free);
        // Seven non-blank lines; the free cap is 5
        let sources = (1..=7)
            .map(|i| format!("https://site{}.com", i))
            .collect::<Vec<_>>()
            .join("\n");

        let results = run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Free,
            "https://mysite.com",
            &sources,
            |_, _| {},
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 5);
        // Truncation does not change the price: still one check
        assert_eq!(quota.remaining(), 9);
    }

    #[tokio::test]
    async fn test_premium_caps_at_fifty_and_can_exhaust_quota() {
        let mut quota = Quota::with_remaining(Plan::Premium, 1);
        let sources = (1..=60)
            .map(|i| format!("https://site{}.com", i))
            .collect::<Vec<_>>()
            .join("\n");

        let results = run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Premium,
            "https://mysite.com",
            &sources,
            |_, _| {},
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 50);
        assert_eq!(quota.remaining(), 0);
        assert!(!quota.can_start_check());
    }

    #[tokio::test]
    async fn test_exhausted_quota_rejects_without_results() {
        let mut quota = Quota::with_remaining(Plan::Free, 0);
        let mut seen = 0;

        let outcome = run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Free,
            "https://mysite.com",
            "https://a.com",
            |_, _| seen += 1,
        )
        .await;

        assert_eq!(outcome.unwrap_err(), BatchRejection::NoChecksRemaining);
        assert_eq!(seen, 0);
        assert_eq!(quota.remaining(), 0);
    }

    #[tokio::test]
    async fn test_blank_target_rejects() {
        let mut quota = Quota::for_plan(Plan::Free);

        let outcome = run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Free,
            "   ",
            "https://a.com",
            |_, _| {},
        )
        .await;

        assert_eq!(outcome.unwrap_err(), BatchRejection::EmptyTarget);
        assert_eq!(quota.remaining(), 10);
    }

    #[tokio::test]
    async fn test_blank_sources_do_not_consume_quota() {
        let mut quota = Quota::for_plan(Plan::Free);

        // Lines of pure whitespace count as no input at all
        let outcome = run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Free,
            "https://mysite.com",
            "\n   \n\t\n",
            |_, _| {},
        )
        .await;

        assert_eq!(outcome.unwrap_err(), BatchRejection::NoSources);
        assert_eq!(quota.remaining(), 10);
    }

    #[tokio::test]
    async fn test_blank_lines_are_skipped_not_counted() {
        let mut quota = Quota::for_plan(Plan::Free);
        let sources = "https://a.com\n\n   \nhttps://b.com\n";

        let results = run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Free,
            "https://mysite.com",
            sources,
            |_, _| {},
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://a.com");
        assert_eq!(results[1].url, "https://b.com");
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_and_ends_at_100() {
        let mut quota = Quota::for_plan(Plan::Free);
        let sources = "https://a.com\nhttps://b.com\nhttps://c.com\nhttps://d.com";
        let mut percents = Vec::new();
        let mut partial_counts = Vec::new();

        run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Free,
            "https://mysite.com",
            sources,
            |_, progress| {
                percents.push(progress.percent);
                partial_counts.push(progress.completed);
            },
        )
        .await
        .unwrap();

        // One event per item, counts growing one at a time
        assert_eq!(partial_counts, vec![1, 2, 3, 4]);

        // Percent never decreases and lands exactly on 100
        for pair in percents.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!((percents.last().unwrap() - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_results_keep_input_order() {
        let mut quota = Quota::for_plan(Plan::Premium);
        let sources = (1..=10)
            .map(|i| format!("https://site{}.com", i))
            .collect::<Vec<_>>()
            .join("\n");

        let results = run_batch(
            &instant_checker(),
            &mut quota,
            Plan::Premium,
            "https://mysite.com",
            &sources,
            |_, _| {},
        )
        .await
        .unwrap();

        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.url, format!("https://site{}.com", i + 1));
        }
    }
}
