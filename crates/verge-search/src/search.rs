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

//! # Geometric-Shrink Delta Search
//!
//! The engine that certifies an epsilon-delta claim by shrinking a
//! symmetric neighborhood around the point of interest until both boundary
//! probes map to within epsilon of the claimed limit.
//!
//! ## Algorithm
//!
//! 1. Start with the neighborhood of radius `initial_delta` (1 by
//!    default) around `a`.
//! 2. Evaluate the function at the two endpoints `a - delta` and
//!    `a + delta`. A probe fails if its evaluation raises a domain error
//!    or if `|f(x) - L| >= epsilon`.
//! 3. If both probes pass, the current delta is certified.
//! 4. Otherwise notify the monitor, consult its command, shrink the
//!    radius by the configured factor, and repeat.
//!
//! A probe landing outside the function's domain counts as a failed test
//! for that delta, never as an error escaping the loop. The loop carries
//! no intrinsic bound; termination on ill-posed queries comes from the
//! attached monitor, plus a last-resort guard for a delta that underflows
//! to zero.

use crate::{
    certificate::{DeltaCertificate, ProbeEvaluation},
    error::{ConvergenceError, SearchError},
    monitor::{
        iteration_limit::IterationLimitMonitor,
        search_monitor::{DeltaSearchMonitor, SearchCommand},
    },
    query::DeltaQuery,
    result::{SearchOutcome, SearchResult, TerminationReason},
    stats::SearchStatisticsBuilder,
};
use verge_core::{math::neighborhood::SymmetricNeighborhood, num::real::RealNumeric};
use verge_functions::function::RealFunction;

/// Shrink-step budget of the [`search_delta`] convenience entry point.
///
/// An `f64` delta underflows to zero after roughly 1075 halvings, so any
/// well-posed query certifies long before this budget runs out.
pub const DEFAULT_ITERATION_LIMIT: u64 = 4096;

/// The geometric-shrink delta search engine.
///
/// The default configuration starts at `delta = 1` and halves on every
/// rejection, which makes every returned delta a power-of-two fraction of
/// one and the whole run bit-for-bit reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaSearch<T> {
    initial_delta: T,
    shrink_factor: T,
}

impl<T> Default for DeltaSearch<T>
where
    T: RealNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeltaSearch<T>
where
    T: RealNumeric,
{
    /// Creates the canonical halving search: `initial_delta = 1`,
    /// `shrink_factor = 1/2`.
    #[inline]
    pub fn new() -> Self {
        let two = T::one() + T::one();
        Self {
            initial_delta: T::one(),
            shrink_factor: T::one() / two,
        }
    }

    /// Creates a search with a custom starting delta and shrink factor.
    ///
    /// # Panics
    ///
    /// Panics if `initial_delta` is not finite and positive, or if
    /// `shrink_factor` does not lie strictly in `(0, 1)`.
    #[inline]
    pub fn with_config(initial_delta: T, shrink_factor: T) -> Self {
        assert!(
            initial_delta > T::zero() && initial_delta.is_finite(),
            "Invalid search config: initial_delta must be finite and positive"
        );
        assert!(
            shrink_factor > T::zero() && shrink_factor < T::one(),
            "Invalid search config: shrink_factor must lie strictly in (0, 1)"
        );
        Self {
            initial_delta,
            shrink_factor,
        }
    }

    /// Creates a search with a custom configuration if the inputs are
    /// valid.
    ///
    /// Returns `None` under the same conditions `with_config` panics.
    #[inline]
    pub fn try_with_config(initial_delta: T, shrink_factor: T) -> Option<Self> {
        if initial_delta > T::zero()
            && initial_delta.is_finite()
            && shrink_factor > T::zero()
            && shrink_factor < T::one()
        {
            Some(Self {
                initial_delta,
                shrink_factor,
            })
        } else {
            None
        }
    }

    /// The starting delta of the search.
    #[inline]
    pub fn initial_delta(&self) -> T {
        self.initial_delta
    }

    /// The per-rejection shrink factor.
    #[inline]
    pub fn shrink_factor(&self) -> T {
        self.shrink_factor
    }

    /// Runs the delta search for `query` against `function`, under the
    /// control of `monitor`.
    ///
    /// The engine probes the two endpoints of a shrinking neighborhood
    /// around the query's point of interest. For every rejected delta the
    /// monitor sees `on_delta_rejected` and `on_step` and may issue a
    /// `Terminate` command; the engine then reports an aborted outcome
    /// carrying the monitor's reason.
    ///
    /// The run always ends in finite time when a monitor with a budget is
    /// attached. Without one, a query for which no certifying delta exists
    /// (discontinuity at the point, wrong claimed limit) keeps shrinking
    /// until the delta underflows to zero, which the engine reports as an
    /// aborted outcome of its own.
    pub fn run<F, M>(
        &self,
        query: &DeltaQuery<T>,
        function: &F,
        monitor: &mut M,
    ) -> SearchOutcome<T>
    where
        F: RealFunction<T> + ?Sized,
        M: DeltaSearchMonitor<T>,
    {
        let start_time = std::time::Instant::now();
        let mut iterations: u64 = 0;
        let mut probes_evaluated: u64 = 0;
        let mut domain_rejections: u64 = 0;

        monitor.on_enter_search(query);

        let mut ball = SymmetricNeighborhood::new_unchecked(query.point(), self.initial_delta);

        let (result, reason) = loop {
            let [lower_x, upper_x] = ball.endpoints();

            let lower = Self::probe(
                function,
                query,
                lower_x,
                &mut probes_evaluated,
                &mut domain_rejections,
            );
            let pair = match lower {
                Some(lower_eval) => Self::probe(
                    function,
                    query,
                    upper_x,
                    &mut probes_evaluated,
                    &mut domain_rejections,
                )
                .map(|upper_eval| (lower_eval, upper_eval)),
                None => None,
            };

            if let Some((lower_eval, upper_eval)) = pair {
                let certificate = DeltaCertificate::new(ball.radius(), lower_eval, upper_eval);
                break (
                    SearchResult::Certified(certificate),
                    TerminationReason::Certified,
                );
            }

            iterations += 1;
            monitor.on_delta_rejected(ball.radius());
            monitor.on_step();

            if let SearchCommand::Terminate(message) = monitor.search_command() {
                break (
                    SearchResult::Aborted {
                        last_delta: ball.radius(),
                    },
                    TerminationReason::Aborted(message),
                );
            }

            let shrunk = ball.scaled(self.shrink_factor);
            if shrunk.is_degenerate() {
                break (
                    SearchResult::Aborted {
                        last_delta: ball.radius(),
                    },
                    TerminationReason::Aborted("delta underflowed to zero".to_string()),
                );
            }
            ball = shrunk;
        };

        monitor.on_exit_search();

        let statistics = SearchStatisticsBuilder::new()
            .iterations(iterations)
            .probes_evaluated(probes_evaluated)
            .domain_rejections(domain_rejections)
            .search_duration(start_time.elapsed())
            .build();

        SearchOutcome::new(result, reason, statistics)
    }

    /// Evaluates one probe. Returns `None` when the probe fails the
    /// epsilon inequality or falls outside the function's domain; a domain
    /// rejection invalidates the current delta exactly like a failed
    /// inequality.
    #[inline]
    fn probe<F>(
        function: &F,
        query: &DeltaQuery<T>,
        x: T,
        probes_evaluated: &mut u64,
        domain_rejections: &mut u64,
    ) -> Option<ProbeEvaluation<T>>
    where
        F: RealFunction<T> + ?Sized,
    {
        match function.evaluate(x) {
            Ok(value) => {
                *probes_evaluated += 1;
                if query.within_epsilon(value) {
                    Some(ProbeEvaluation { input: x, value })
                } else {
                    None
                }
            }
            Err(_) => {
                *domain_rejections += 1;
                None
            }
        }
    }
}

/// Finds a delta satisfying the epsilon-delta condition at the two
/// boundary probes, for the given function, point of interest, claimed
/// limit, and tolerance.
///
/// Runs the canonical halving search under a [`DEFAULT_ITERATION_LIMIT`]
/// budget. Returns `SearchError::InvalidQuery` when `epsilon <= 0` or any
/// input is non-finite, and `SearchError::Convergence` when the budget is
/// exhausted — which is the defined behavior for a function discontinuous
/// at the probed point or a wrong claimed limit.
///
/// # Examples
///
/// ```rust
/// use verge_functions::catalogue::NamedFunction;
/// use verge_search::search::search_delta;
///
/// let delta = search_delta(&NamedFunction::Exponential, 0.0, 1.0, 0.5).unwrap();
/// assert_eq!(delta, 0.25);
/// ```
pub fn search_delta<T, F>(function: &F, point: T, limit: T, epsilon: T) -> Result<T, SearchError<T>>
where
    T: RealNumeric,
    F: RealFunction<T> + ?Sized,
{
    let query = DeltaQuery::new(point, limit, epsilon)?;
    let mut monitor = IterationLimitMonitor::new(DEFAULT_ITERATION_LIMIT);
    let outcome = DeltaSearch::new().run(&query, function, &mut monitor);

    match outcome.result {
        SearchResult::Certified(certificate) => Ok(certificate.delta()),
        SearchResult::Aborted { last_delta } => {
            Err(ConvergenceError::new(outcome.statistics.iterations, last_delta).into())
        }
    }
}
