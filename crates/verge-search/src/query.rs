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

//! # Delta Query
//!
//! The probe request handed to the search engine: a point of interest `a`,
//! a claimed limit value `L`, and an output tolerance `epsilon`. Inputs are
//! validated eagerly so the engine never runs on an ill-formed request.

use verge_core::num::real::RealNumeric;

/// The error type for query construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidQueryError<T> {
    /// `epsilon` must be strictly positive.
    NonPositiveEpsilon(T),
    /// A query field was NaN or infinite. The static string names the
    /// offending field.
    NonFinite(&'static str, T),
}

impl<T> std::fmt::Display for InvalidQueryError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveEpsilon(epsilon) => {
                write!(f, "epsilon must be strictly positive, got {}", epsilon)
            }
            Self::NonFinite(field, value) => {
                write!(f, "query field '{}' must be finite, got {}", field, value)
            }
        }
    }
}

impl<T> std::error::Error for InvalidQueryError<T> where T: std::fmt::Display + std::fmt::Debug {}

/// A validated epsilon-delta probe request.
///
/// # Examples
///
/// ```rust
/// use verge_search::query::DeltaQuery;
///
/// let query = DeltaQuery::new(2.0, 4.0, 0.1).unwrap();
/// assert_eq!(query.point(), 2.0);
/// assert_eq!(query.limit(), 4.0);
/// assert_eq!(query.epsilon(), 0.1);
///
/// assert!(DeltaQuery::new(2.0, 4.0, 0.0).is_err());
/// assert!(DeltaQuery::new(f64::NAN, 4.0, 0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaQuery<T> {
    point: T,
    limit: T,
    epsilon: T,
}

impl<T> DeltaQuery<T>
where
    T: RealNumeric,
{
    /// Creates a new `DeltaQuery`, validating all fields eagerly.
    ///
    /// `point` and `limit` must be finite; `epsilon` must be finite and
    /// strictly positive.
    pub fn new(point: T, limit: T, epsilon: T) -> Result<Self, InvalidQueryError<T>> {
        if !point.is_finite() {
            return Err(InvalidQueryError::NonFinite("point", point));
        }
        if !limit.is_finite() {
            return Err(InvalidQueryError::NonFinite("limit", limit));
        }
        if !epsilon.is_finite() {
            return Err(InvalidQueryError::NonFinite("epsilon", epsilon));
        }
        if epsilon <= T::zero() {
            return Err(InvalidQueryError::NonPositiveEpsilon(epsilon));
        }
        Ok(Self {
            point,
            limit,
            epsilon,
        })
    }

    /// The point of interest `a` at which the limit is evaluated.
    #[inline]
    pub fn point(&self) -> T {
        self.point
    }

    /// The claimed limit value `L`.
    #[inline]
    pub fn limit(&self) -> T {
        self.limit
    }

    /// The output tolerance `epsilon` around `L`.
    #[inline]
    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// Returns `true` if `value` lies within `epsilon` of the claimed
    /// limit, i.e. `|value - L| < epsilon`.
    #[inline]
    pub fn within_epsilon(&self, value: T) -> bool {
        (value - self.limit).abs() < self.epsilon
    }
}

impl<T> std::fmt::Display for DeltaQuery<T>
where
    T: RealNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DeltaQuery(a={}, L={}, epsilon={})",
            self.point, self.limit, self.epsilon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query() {
        let query = DeltaQuery::new(0.0, 1.0, 0.5).unwrap();
        assert_eq!(query.point(), 0.0);
        assert_eq!(query.limit(), 1.0);
        assert_eq!(query.epsilon(), 0.5);
    }

    #[test]
    fn test_rejects_zero_and_negative_epsilon() {
        assert_eq!(
            DeltaQuery::new(0.0, 0.0, 0.0),
            Err(InvalidQueryError::NonPositiveEpsilon(0.0))
        );
        assert_eq!(
            DeltaQuery::new(0.0, 0.0, -0.1),
            Err(InvalidQueryError::NonPositiveEpsilon(-0.1))
        );
    }

    #[test]
    fn test_rejects_non_finite_fields() {
        assert!(matches!(
            DeltaQuery::new(f64::NAN, 0.0, 0.1),
            Err(InvalidQueryError::NonFinite("point", _))
        ));
        assert!(matches!(
            DeltaQuery::new(0.0, f64::INFINITY, 0.1),
            Err(InvalidQueryError::NonFinite("limit", _))
        ));
        assert!(matches!(
            DeltaQuery::new(0.0, 0.0, f64::NAN),
            Err(InvalidQueryError::NonFinite("epsilon", _))
        ));
    }

    #[test]
    fn test_within_epsilon() {
        let query = DeltaQuery::new(2.0, 4.0, 0.1).unwrap();
        assert!(query.within_epsilon(4.05));
        assert!(query.within_epsilon(3.95));
        assert!(!query.within_epsilon(4.1)); // Strict inequality
        assert!(!query.within_epsilon(5.0));
    }

    #[test]
    fn test_display() {
        let query = DeltaQuery::new(2.0, 4.0, 0.1).unwrap();
        assert_eq!(format!("{}", query), "DeltaQuery(a=2, L=4, epsilon=0.1)");
    }
}
