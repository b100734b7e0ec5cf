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

//! # Real Function Capability
//!
//! The evaluation seam between the function catalogue and the delta search.
//! A `RealFunction<T>` takes one real input and either returns one real
//! output or fails with a `DomainError` when the input falls in the
//! function's excluded set. Compute and domain validation are deliberately
//! one failing call; no separate domain metadata exists.
//!
//! ## Motivation
//!
//! The search engine must stay polymorphic over "takes a real, returns a
//! real, may fail with a domain error" without caring whether the function
//! comes from the built-in catalogue or from an ad-hoc closure. An
//! object-safe trait keeps both paths open.

use crate::error::DomainError;
use verge_core::num::real::RealNumeric;

/// A pure, single-argument real function that may be undefined on part of
/// the real line.
///
/// Implementations must be deterministic and side-effect free: repeated
/// evaluation at the same input yields the identical result.
pub trait RealFunction<T>
where
    T: RealNumeric,
{
    /// The snake_case identifier of the function, e.g. `"square_root"`.
    fn name(&self) -> &str;

    /// Evaluates the function at `x`.
    ///
    /// Returns a finite real for every input outside the excluded set, and
    /// `Err(DomainError)` for every input inside it.
    fn evaluate(&self, x: T) -> Result<T, DomainError<T>>;
}

impl<T> std::fmt::Debug for dyn RealFunction<T> + '_
where
    T: RealNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RealFunction({})", self.name())
    }
}

/// Adapter that turns a named closure into a `RealFunction`.
///
/// Useful for probing ad-hoc functions that are not part of the catalogue.
///
/// # Examples
///
/// ```rust
/// use verge_functions::function::{ClosureFunction, RealFunction};
///
/// let double = ClosureFunction::new("double", |x: f64| Ok(x * 2.0));
/// assert_eq!(double.name(), "double");
/// assert_eq!(double.evaluate(3.0), Ok(6.0));
/// ```
pub struct ClosureFunction<F> {
    name: &'static str,
    f: F,
}

impl<F> ClosureFunction<F> {
    /// Creates a new `ClosureFunction` with the given name.
    #[inline]
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<T, F> RealFunction<T> for ClosureFunction<F>
where
    T: RealNumeric,
    F: Fn(T) -> Result<T, DomainError<T>>,
{
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, x: T) -> Result<T, DomainError<T>> {
        (self.f)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_function_evaluates() {
        let shifted = ClosureFunction::new("shifted", |x: f64| Ok(x + 1.0));
        assert_eq!(shifted.evaluate(1.5), Ok(2.5));
    }

    #[test]
    fn test_closure_function_can_fail() {
        let partial = ClosureFunction::new("partial", |x: f64| {
            if x == 0.0 {
                Err(DomainError::new("partial", x, "x = 0"))
            } else {
                Ok(x.recip())
            }
        });
        assert!(partial.evaluate(0.0).is_err());
        assert_eq!(partial.evaluate(4.0), Ok(0.25));
    }

    #[test]
    fn test_trait_object_debug() {
        let f = ClosureFunction::new("identity", |x: f64| Ok(x));
        let obj: &dyn RealFunction<f64> = &f;
        assert_eq!(format!("{:?}", obj), "RealFunction(identity)");
    }
}
