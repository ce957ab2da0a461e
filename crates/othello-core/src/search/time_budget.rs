//! Wall-clock budgeting for a single move decision.

use std::time::{Duration, Instant};

/// Tracks elapsed wall-clock time against an optional per-decision budget.
///
/// Cancellation is advisory and cooperative: the search consults `expired`
/// only between top-level move evaluations, never mid-recursion.
#[derive(Debug)]
pub struct TimeBudget {
    start: Instant,
    limit: Option<Duration>,
}

impl TimeBudget {
    /// Starts the clock for one decision.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum wall-clock time for the decision, or `None` for
    ///   unlimited.
    pub fn start(limit: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Returns `true` if the budget is exhausted.
    pub fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }

    /// Returns the time elapsed since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
