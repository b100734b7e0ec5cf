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

//! # Real Numeric Trait
//!
//! Unified numeric bounds for the catalogue and search components.
//! `RealNumeric` specifies the floating-point capabilities required across
//! the Verge crates, including intrinsic traits (`Float`, `FloatConst`),
//! conversions from primitives, and formatting.
//!
//! ## Motivation
//!
//! The delta search and the function catalogue should remain generic over
//! float types while retaining predictable arithmetic semantics. This trait
//! collects the necessary bounds into a single alias, simplifying generic
//! signatures and keeping the constraint set consistent across crates.
//!
//! ## Highlights
//!
//! - Requires `Float + FloatConst + FromPrimitive` for numeric fundamentals
//!   and access to mathematical constants (`PI`, `FRAC_PI_2`).
//! - Enforces `Debug + Display` for diagnostics and log output.
//! - `Send + Sync` for cross-thread search execution.
//!
//! In practice the implementing types are `f32` and `f64`.

use num_traits::{Float, FloatConst, FromPrimitive};

/// A trait alias for floating-point types that can be used across the
/// Verge crates. These are usually the primitive float types `f32` and
/// `f64`.
///
/// # Examples
///
/// ```rust
/// use verge_core::num::real::RealNumeric;
///
/// fn midpoint<T: RealNumeric>(a: T, b: T) -> T {
///     (a + b) / T::from_f64(2.0).unwrap()
/// }
///
/// assert_eq!(midpoint(1.0_f64, 3.0_f64), 2.0);
/// ```
pub trait RealNumeric:
    Float + FloatConst + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> RealNumeric for T where
    T: Float + FloatConst + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::RealNumeric;

    fn assert_real_numeric<T: RealNumeric>() {}

    #[test]
    fn test_primitive_floats_satisfy_bounds() {
        assert_real_numeric::<f32>();
        assert_real_numeric::<f64>();
    }

    #[test]
    fn test_constants_are_accessible_through_alias() {
        fn half_pi<T: RealNumeric>() -> T {
            T::FRAC_PI_2()
        }
        assert_eq!(half_pi::<f64>(), std::f64::consts::FRAC_PI_2);
    }
}
