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

use crate::query::InvalidQueryError;

/// Details about a delta search that was stopped before certification.
///
/// Raised by the convenience entry point when the budget monitor fires,
/// which happens for functions discontinuous at the probed point or for a
/// wrong claimed limit — cases where no certifying delta exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceError<T> {
    /// Number of shrink steps performed before giving up.
    pub iterations: u64,
    /// The last delta that was probed and rejected.
    pub last_delta: T,
}

impl<T> ConvergenceError<T> {
    /// Creates a new `ConvergenceError`.
    #[inline]
    pub fn new(iterations: u64, last_delta: T) -> Self {
        Self {
            iterations,
            last_delta,
        }
    }
}

impl<T> std::fmt::Display for ConvergenceError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Delta search did not converge after {} shrink steps (last rejected delta: {})",
            self.iterations, self.last_delta
        )
    }
}

impl<T> std::error::Error for ConvergenceError<T> where T: std::fmt::Display + std::fmt::Debug {}

/// The error type of the `search_delta` convenience entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError<T> {
    /// The query was rejected during validation (e.g. epsilon <= 0).
    InvalidQuery(InvalidQueryError<T>),
    /// The search exhausted its budget without certifying a delta.
    Convergence(ConvergenceError<T>),
}

impl<T> std::fmt::Display for SearchError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(e) => write!(f, "Invalid query: {}", e),
            Self::Convergence(e) => write!(f, "Convergence failure: {}", e),
        }
    }
}

impl<T> std::error::Error for SearchError<T>
where
    T: std::fmt::Display + std::fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl<T> From<InvalidQueryError<T>> for SearchError<T> {
    fn from(e: InvalidQueryError<T>) -> Self {
        Self::InvalidQuery(e)
    }
}

impl<T> From<ConvergenceError<T>> for SearchError<T> {
    fn from(e: ConvergenceError<T>) -> Self {
        Self::Convergence(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convergence_error_display() {
        let err = ConvergenceError::new(4096, 1e-300);
        let rendered = format!("{}", err);
        assert!(rendered.contains("4096 shrink steps"));
        assert!(rendered.contains("1e-300"));
    }

    #[test]
    fn test_from_conversions() {
        let search_err: SearchError<f64> = ConvergenceError::new(10, 0.5).into();
        assert!(matches!(search_err, SearchError::Convergence(_)));

        let search_err: SearchError<f64> = InvalidQueryError::NonPositiveEpsilon(0.0).into();
        assert!(matches!(search_err, SearchError::InvalidQuery(_)));
    }

    #[test]
    fn test_display_prefixes() {
        let err: SearchError<f64> = InvalidQueryError::NonPositiveEpsilon(-1.0).into();
        assert!(format!("{}", err).starts_with("Invalid query:"));

        let err: SearchError<f64> = ConvergenceError::new(1, 0.5).into();
        assert!(format!("{}", err).starts_with("Convergence failure:"));
    }
}
