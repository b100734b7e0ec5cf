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

//! # Iteration Limit Monitor
//!
//! A monitor that terminates the search after a fixed number of shrink
//! steps. This is the primary defense against non-convergent queries: a
//! function discontinuous at the probed point, or a wrong claimed limit,
//! would otherwise shrink delta forever.
//!
//! ## Usage
//!
//! ```rust
//! use verge_search::monitor::iteration_limit::IterationLimitMonitor;
//! use verge_search::monitor::search_monitor::{DeltaSearchMonitor, SearchCommand};
//!
//! let mut mon = IterationLimitMonitor::new(100);
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

/// A monitor that terminates the search when a specified number of shrink
/// steps has been performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationLimitMonitor {
    steps: u64,
    iteration_limit: u64,
}

impl IterationLimitMonitor {
    /// Creates a new `IterationLimitMonitor` with the given step budget.
    #[inline]
    pub fn new(iteration_limit: u64) -> Self {
        Self {
            steps: 0,
            iteration_limit,
        }
    }

    /// The number of steps observed so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Checks if the iteration budget has been exhausted.
    #[inline]
    fn reached_limit(&self) -> bool {
        self.steps >= self.iteration_limit
    }
}

impl<T> DeltaSearchMonitor<T> for IterationLimitMonitor
where
    T: RealNumeric,
{
    fn name(&self) -> &str {
        "IterationLimitMonitor"
    }

    fn on_enter_search(&mut self, _query: &DeltaQuery<T>) {
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_delta_rejected(&mut self, _delta: T) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    fn search_command(&self) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("iteration limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IterationLimitMonitor;
    use crate::monitor::search_monitor::{DeltaSearchMonitor, SearchCommand};
    use crate::query::DeltaQuery;

    #[test]
    fn test_continues_before_limit_and_terminates_at_limit() {
        let mut monitor = IterationLimitMonitor::new(3);

        for _ in 0..2 {
            DeltaSearchMonitor::<f64>::on_step(&mut monitor);
            assert!(matches!(
                DeltaSearchMonitor::<f64>::search_command(&monitor),
                SearchCommand::Continue
            ));
        }

        DeltaSearchMonitor::<f64>::on_step(&mut monitor);
        match DeltaSearchMonitor::<f64>::search_command(&monitor) {
            SearchCommand::Terminate(reason) => {
                assert_eq!(reason, "iteration limit reached");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_budget_terminates_immediately() {
        let monitor = IterationLimitMonitor::new(0);
        assert!(matches!(
            DeltaSearchMonitor::<f64>::search_command(&monitor),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_enter_search_resets_step_count() {
        let mut monitor = IterationLimitMonitor::new(2);
        DeltaSearchMonitor::<f64>::on_step(&mut monitor);
        DeltaSearchMonitor::<f64>::on_step(&mut monitor);
        assert_eq!(monitor.steps(), 2);

        let query = DeltaQuery::new(0.0, 0.0, 0.1).unwrap();
        monitor.on_enter_search(&query);
        assert_eq!(monitor.steps(), 0);
        assert!(matches!(
            DeltaSearchMonitor::<f64>::search_command(&monitor),
            SearchCommand::Continue
        ));
    }
}
