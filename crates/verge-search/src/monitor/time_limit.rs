// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Time Limit Monitor
//!
//! A lightweight monitor that enforces a wall-clock time budget on the
//! search. It periodically checks elapsed time (using a bitmask-based step
//! filter) and requests termination once the configured `Duration` has
//! been exceeded.
//!
//! ## Motivation
//!
//! A hosting system invoking the delta search per user interaction needs
//! predictable time-bounded behavior; the shrink loop itself has no
//! self-termination guarantee for ill-posed inputs. This monitor provides
//! a low-overhead way to cap runtime without checking the clock at every
//! step.
//!
//! ## Highlights
//!
//! - Bitmask-driven clock checks: `(steps & clock_check_mask) == 0`
//!   triggers a check. The default mask (`0xFF`) checks every 256 steps,
//!   tight enough for a loop this short-bodied.
//! - `on_step()` uses `wrapping_add` to increment steps at minimal cost.
//! - Constructors: `new(time_limit)` and
//!   `with_clock_check_mask(time_limit, mask)`.
//!
//! ## Usage
//!
//! ```rust
//! use verge_search::monitor::time_limit::TimeLimitMonitor;
//! use verge_search::monitor::search_monitor::{DeltaSearchMonitor, SearchCommand};
//! use std::time::Duration;
//!
//! let mut mon = TimeLimitMonitor::new(Duration::from_secs(1));
//! // In the search loop:
//! DeltaSearchMonitor::<f64>::on_step(&mut mon); // per shrink step
//! match DeltaSearchMonitor::<f64>::search_command(&mon) {
//!     SearchCommand::Continue => { /* keep shrinking */ }
//!     SearchCommand::Terminate(reason) => { /* stop: reason */ }
//! }
//! ```

use crate::{
    monitor::search_monitor::{DeltaSearchMonitor, SearchCommand},
    query::DeltaQuery,
};
use verge_core::num::real::RealNumeric;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    clock_check_mask: u64,
    steps: u64,
    time_limit: std::time::Duration,
    start_time: std::time::Instant,
}

impl TimeLimitMonitor {
    /// Default mask: check every 256 steps (2^8).
    /// 256 - 1 = 255 = 0xFF
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0xFF;

    #[inline]
    pub fn new(time_limit: std::time::Duration) -> Self {
        Self {
            clock_check_mask: Self::DEFAULT_STEP_CLOCK_CHECK_MASK,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn with_clock_check_mask(time_limit: std::time::Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
        }
    }
}

impl<T> DeltaSearchMonitor<T> for TimeLimitMonitor
where
    T: RealNumeric,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _query: &DeltaQuery<T>) {
        self.start_time = std::time::Instant::now();
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_delta_rejected(&mut self, _delta: T) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if (self.steps & self.clock_check_mask) == 0 && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn new_monitor_with_limit(ms: u64) -> TimeLimitMonitor {
        TimeLimitMonitor::new(Duration::from_millis(ms))
    }

    #[test]
    fn test_default_mask_is_power_of_two_minus_one() {
        assert_eq!(TimeLimitMonitor::DEFAULT_STEP_CLOCK_CHECK_MASK, 0xFF);
    }

    #[test]
    fn test_terminates_after_time_limit_when_mask_condition_met() {
        let mut mon = new_monitor_with_limit(10);
        // Make elapsed exceed limit by setting start_time sufficiently in the past.
        mon.start_time = Instant::now() - Duration::from_millis(50);

        // steps = 0 => (steps & mask) == 0, so clock check runs
        mon.steps = 0;
        match DeltaSearchMonitor::<f64>::search_command(&mon) {
            SearchCommand::Terminate(msg) => {
                assert!(msg.contains("time limit"), "unexpected message: {msg}");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_continues_when_mask_condition_not_met_even_if_time_exceeded() {
        let mut mon = new_monitor_with_limit(1);
        mon.start_time = Instant::now() - Duration::from_millis(50);

        // With default mask 0xFF, any nonzero steps with low bits set will
        // skip the check.
        mon.steps = 1; // 1 & 0xFF != 0
        match DeltaSearchMonitor::<f64>::search_command(&mon) {
            SearchCommand::Continue => {}
            other => panic!("expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_mask_zero_always_checks() {
        let mut mon = TimeLimitMonitor::with_clock_check_mask(Duration::from_millis(1), 0);
        // If mask is 0, (steps & mask) == 0 is always true, so we always
        // check the clock.
        mon.start_time = Instant::now() - Duration::from_millis(50);

        mon.steps = 12345;
        match DeltaSearchMonitor::<f64>::search_command(&mon) {
            SearchCommand::Terminate(_) => {}
            other => panic!("expected Terminate due to exceeded time, got {:?}", other),
        }
    }

    #[test]
    fn test_continues_before_time_limit() {
        let mon = new_monitor_with_limit(10_000);
        match DeltaSearchMonitor::<f64>::search_command(&mon) {
            SearchCommand::Continue => {}
            other => panic!("expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn test_enter_search_resets_clock_and_steps() {
        let mut mon = new_monitor_with_limit(10);
        mon.start_time = Instant::now() - Duration::from_millis(50);
        mon.steps = 7;

        let query = DeltaQuery::new(0.0, 0.0, 0.1).unwrap();
        mon.on_enter_search(&query);
        assert_eq!(mon.steps, 0);
        assert!(matches!(
            DeltaSearchMonitor::<f64>::search_command(&mon),
            SearchCommand::Continue
        ));
    }
}
