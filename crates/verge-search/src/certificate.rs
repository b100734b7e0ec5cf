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

//! # Delta Certificate
//!
//! The positive result of a delta search: the certified delta together
//! with the two boundary probe evaluations that witnessed it. Downstream
//! consumers (e.g. a plotting layer shading the epsilon and delta bands)
//! get the full `(input, value)` pairs rather than just the bare delta.

use crate::query::DeltaQuery;
use verge_core::num::real::RealNumeric;

/// One evaluated probe: the input `x` and the function value `f(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeEvaluation<T> {
    /// The probed input, `a - delta` or `a + delta`.
    pub input: T,
    /// The function value at the probed input.
    pub value: T,
}

/// A certified delta for an epsilon-delta query.
///
/// # Invariants
///
/// `delta` is strictly positive, and both probe values lie within the
/// query's epsilon of the claimed limit at the moment of certification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaCertificate<T> {
    delta: T,
    lower: ProbeEvaluation<T>,
    upper: ProbeEvaluation<T>,
}

impl<T> DeltaCertificate<T>
where
    T: RealNumeric,
{
    /// Creates a new certificate from the certified delta and the two
    /// boundary probes.
    #[inline]
    pub fn new(delta: T, lower: ProbeEvaluation<T>, upper: ProbeEvaluation<T>) -> Self {
        debug_assert!(delta > T::zero(), "certified delta must be positive");
        Self {
            delta,
            lower,
            upper,
        }
    }

    /// The certified input tolerance.
    #[inline]
    pub fn delta(&self) -> T {
        self.delta
    }

    /// The probe at `a - delta`.
    #[inline]
    pub fn lower_probe(&self) -> ProbeEvaluation<T> {
        self.lower
    }

    /// The probe at `a + delta`.
    #[inline]
    pub fn upper_probe(&self) -> ProbeEvaluation<T> {
        self.upper
    }

    /// Re-checks the certificate against a query: the delta must be
    /// positive and both recorded probe values within epsilon of the
    /// claimed limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verge_search::certificate::{DeltaCertificate, ProbeEvaluation};
    /// use verge_search::query::DeltaQuery;
    ///
    /// let query = DeltaQuery::new(2.0, 4.0, 0.1).unwrap();
    /// let cert = DeltaCertificate::new(
    ///     0.01,
    ///     ProbeEvaluation { input: 1.99, value: 3.9601 },
    ///     ProbeEvaluation { input: 2.01, value: 4.0401 },
    /// );
    /// assert!(cert.certifies(&query));
    /// ```
    #[inline]
    pub fn certifies(&self, query: &DeltaQuery<T>) -> bool {
        self.delta > T::zero()
            && query.within_epsilon(self.lower.value)
            && query.within_epsilon(self.upper.value)
    }
}

impl<T> std::fmt::Display for DeltaCertificate<T>
where
    T: RealNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "delta={} (f({})={}, f({})={})",
            self.delta, self.lower.input, self.lower.value, self.upper.input, self.upper.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let cert = DeltaCertificate::new(
            0.25,
            ProbeEvaluation {
                input: -0.25,
                value: 0.7788,
            },
            ProbeEvaluation {
                input: 0.25,
                value: 1.284,
            },
        );
        assert_eq!(cert.delta(), 0.25);
        assert_eq!(cert.lower_probe().input, -0.25);
        assert_eq!(cert.upper_probe().value, 1.284);
    }

    #[test]
    fn test_certifies_requires_both_probes_within_epsilon() {
        let query = DeltaQuery::new(0.0, 1.0, 0.5).unwrap();
        let good = DeltaCertificate::new(
            0.25,
            ProbeEvaluation {
                input: -0.25,
                value: 0.7788,
            },
            ProbeEvaluation {
                input: 0.25,
                value: 1.284,
            },
        );
        assert!(good.certifies(&query));

        let bad = DeltaCertificate::new(
            0.25,
            ProbeEvaluation {
                input: -0.25,
                value: 0.7788,
            },
            ProbeEvaluation {
                input: 0.25,
                value: 1.7, // Outside epsilon of L = 1
            },
        );
        assert!(!bad.certifies(&query));
    }

    #[test]
    fn test_display() {
        let cert = DeltaCertificate::new(
            0.5,
            ProbeEvaluation {
                input: 1.5,
                value: 2.25,
            },
            ProbeEvaluation {
                input: 2.5,
                value: 6.25,
            },
        );
        assert_eq!(format!("{}", cert), "delta=0.5 (f(1.5)=2.25, f(2.5)=6.25)");
    }
}
