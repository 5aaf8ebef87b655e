//
//  kaiten-client
//  api/rate_limit.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Sliding-Window Rate Limiter
//!
//! Enforces the Kaiten request budget: no more than `limit` request-starts
//! within any trailing one-second window, across every concurrent caller
//! sharing one client.
//!
//! ## Algorithm
//!
//! [`RateLimiter::acquire`] loops until a slot is free:
//!
//! 1. Lock the window and prune timestamps older than one second
//! 2. If the pruned window has room, append `now` and return — prune,
//!    check and append happen inside one critical section, so two callers
//!    can never both claim the same remaining slot
//! 3. Otherwise compute `1s - (now - oldest)`, release the lock, sleep that
//!    long, and re-evaluate from the top (other callers may have taken or
//!    freed slots in the meantime)
//!
//! ## Notes
//!
//! - Slots are consumed at request-start and are never retracted, matching
//!   the server's own accounting: a cancelled in-flight request still
//!   counted against the budget.
//! - No FIFO fairness is promised between waiters; the window-size
//!   invariant is what matters.
//! - After the server answers 429 its own counter has reset, so the
//!   pipeline calls [`RateLimiter::clear`] to resynchronize.

use std::collections::VecDeque;

use tokio::sync::Mutex;
use tokio::time::{sleep, Duration, Instant};
use tracing::debug;

/// Shared sliding window of request-start timestamps.
///
/// One instance lives on each [`KaitenClient`](crate::KaitenClient) and is
/// shared by all concurrent calls on that client.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    /// Request-start timestamps, oldest first.
    window: Mutex<VecDeque<Instant>>,
    /// Maximum request-starts per interval.
    limit: usize,
    /// Length of the sliding window.
    interval: Duration,
}

impl RateLimiter {
    /// Creates a limiter allowing `limit` request-starts per second.
    ///
    /// A limit of zero is treated as one; a zero budget would never grant
    /// a slot.
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            window: Mutex::new(VecDeque::new()),
            limit: limit.max(1),
            interval: Duration::from_secs(1),
        }
    }

    /// Suspends the calling task until a request slot is free, then records
    /// the request-start and returns.
    ///
    /// Safe to call from any number of tasks concurrently; the window is
    /// only ever mutated under the lock, and the sleep happens outside it
    /// so waiters never block each other's bookkeeping.
    pub(crate) async fn acquire(&self) {
        loop {
            let wait = {
                let mut window = self.window.lock().await;
                let now = Instant::now();

                while let Some(&oldest) = window.front() {
                    if now.duration_since(oldest) >= self.interval {
                        window.pop_front();
                    } else {
                        break;
                    }
                }

                match window.front() {
                    Some(&oldest) if window.len() >= self.limit => {
                        self.interval.saturating_sub(now.duration_since(oldest))
                    }
                    _ => {
                        window.push_back(now);
                        return;
                    }
                }
            };

            debug!(wait_ms = wait.as_millis() as u64, "rate limit reached, sleeping");
            sleep(wait).await;
        }
    }

    /// Empties the window.
    ///
    /// Called after an explicit 429 from the server: its counter has reset,
    /// so local accounting must start over.
    pub(crate) async fn clear(&self) {
        self.window.lock().await.clear();
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.window.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// No trailing one-second window may ever hold more than `limit`
    /// acquisitions.
    fn assert_window_invariant(times: &[Instant], limit: usize) {
        for (i, &start) in times.iter().enumerate() {
            if let Some(&later) = times.get(i + limit) {
                assert!(
                    later.duration_since(start) >= Duration::from_secs(1),
                    "acquisitions {} and {} landed within one second",
                    i,
                    i + limit
                );
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_acquires_respect_budget() {
        let limiter = RateLimiter::new(3);
        let mut times = Vec::new();

        for _ in 0..7 {
            limiter.acquire().await;
            times.push(Instant::now());
        }

        assert_window_invariant(&times, 3);
        // First three slots are granted immediately.
        assert_eq!(times[2].duration_since(times[0]), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_acquires_never_overshoot() {
        let limiter = Arc::new(RateLimiter::new(3));
        let times = Arc::new(std::sync::Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for _ in 0..9 {
            let limiter = Arc::clone(&limiter);
            let times = Arc::clone(&times);
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                times.lock().unwrap().push(Instant::now());
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut times = times.lock().unwrap().clone();
        times.sort();
        assert_eq!(times.len(), 9);
        assert_window_invariant(&times, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_prunes_old_entries() {
        let limiter = RateLimiter::new(3);
        for _ in 0..3 {
            limiter.acquire().await;
        }
        assert_eq!(limiter.len().await, 3);

        tokio::time::advance(Duration::from_secs(2)).await;
        limiter.acquire().await;
        // The three old timestamps were pruned, only the new one remains.
        assert_eq!(limiter.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_resets_window() {
        let limiter = RateLimiter::new(3);
        for _ in 0..3 {
            limiter.acquire().await;
        }
        limiter.clear().await;
        assert_eq!(limiter.len().await, 0);

        // A full budget is available again immediately.
        let before = Instant::now();
        for _ in 0..3 {
            limiter.acquire().await;
        }
        assert_eq!(Instant::now().duration_since(before), Duration::ZERO);
    }
}
