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

use crate::{certificate::DeltaCertificate, stats::SearchStatistics};
use verge_core::num::real::RealNumeric;

/// The result of a delta search run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<T> {
    /// A delta satisfying the epsilon-delta condition at both boundary
    /// probes was found.
    Certified(DeltaCertificate<T>),
    /// The search stopped before certification. The field records the last
    /// rejected delta.
    Aborted { last_delta: T },
}

impl<T> std::fmt::Display for SearchResult<T>
where
    T: RealNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::Certified(certificate) => {
                write!(f, "Certified({})", certificate)
            }
            SearchResult::Aborted { last_delta } => {
                write!(f, "Aborted(last_delta={})", last_delta)
            }
        }
    }
}

/// Why a delta search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Both probes passed the epsilon inequality.
    Certified,
    /// A monitor or internal guard stopped the search. The string carries
    /// the reason for abortion (e.g. "iteration limit reached").
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Certified => write!(f, "Certified"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The full outcome bundle of a search run: result, termination reason,
/// and run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    pub result: SearchResult<T>,
    pub reason: TerminationReason,
    pub statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: RealNumeric,
{
    #[inline]
    pub fn new(
        result: SearchResult<T>,
        reason: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    /// Returns `true` if the run produced a certificate.
    #[inline]
    pub fn is_certified(&self) -> bool {
        matches!(self.result, SearchResult::Certified(_))
    }

    /// Returns the certificate, if any.
    #[inline]
    pub fn certificate(&self) -> Option<&DeltaCertificate<T>> {
        match &self.result {
            SearchResult::Certified(certificate) => Some(certificate),
            SearchResult::Aborted { .. } => None,
        }
    }

    /// Returns the certified delta, if any.
    #[inline]
    pub fn delta(&self) -> Option<T> {
        self.certificate().map(DeltaCertificate::delta)
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: RealNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.result, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::ProbeEvaluation;
    use std::time::Duration;

    fn dummy_statistics() -> SearchStatistics {
        SearchStatistics {
            iterations: 2,
            probes_evaluated: 6,
            domain_rejections: 0,
            search_duration: Duration::ZERO,
        }
    }

    fn dummy_certificate() -> DeltaCertificate<f64> {
        DeltaCertificate::new(
            0.25,
            ProbeEvaluation {
                input: -0.25,
                value: 0.7788,
            },
            ProbeEvaluation {
                input: 0.25,
                value: 1.284,
            },
        )
    }

    #[test]
    fn test_certified_outcome_accessors() {
        let outcome = SearchOutcome::new(
            SearchResult::Certified(dummy_certificate()),
            TerminationReason::Certified,
            dummy_statistics(),
        );
        assert!(outcome.is_certified());
        assert_eq!(outcome.delta(), Some(0.25));
        assert!(outcome.certificate().is_some());
    }

    #[test]
    fn test_aborted_outcome_accessors() {
        let outcome: SearchOutcome<f64> = SearchOutcome::new(
            SearchResult::Aborted { last_delta: 0.5 },
            TerminationReason::Aborted("iteration limit reached".to_string()),
            dummy_statistics(),
        );
        assert!(!outcome.is_certified());
        assert_eq!(outcome.delta(), None);
        assert!(outcome.certificate().is_none());
    }

    #[test]
    fn test_display() {
        let reason = TerminationReason::Aborted("interrupted".to_string());
        assert_eq!(format!("{}", reason), "Aborted: interrupted");
        assert_eq!(format!("{}", TerminationReason::Certified), "Certified");

        let result: SearchResult<f64> = SearchResult::Aborted { last_delta: 0.125 };
        assert_eq!(format!("{}", result), "Aborted(last_delta=0.125)");
    }
}
