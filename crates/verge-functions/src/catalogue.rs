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

//! # Function Catalogue
//!
//! The fixed set of named, single-argument real functions exposed to
//! callers of the delta search. Each entry declares its domain restriction
//! by behavior: evaluation at an excluded input fails with a `DomainError`,
//! everything else returns a finite real.
//!
//! ## Highlights
//!
//! - `NamedFunction`: a `Copy` enum of the fifteen entries; the domain
//!   check runs before any arithmetic.
//! - `Catalogue`: an immutable name-to-entry registry built once; lookup by
//!   snake_case name, stable sorted enumeration, no mutation API.
//!
//! ## Usage
//!
//! ```rust
//! use verge_functions::catalogue::Catalogue;
//! use verge_functions::function::RealFunction;
//!
//! let catalogue = Catalogue::standard();
//! let square = catalogue.get("square").unwrap();
//! assert_eq!(square.evaluate(3.0), Ok(9.0));
//! assert!(catalogue.get("reciprocal").unwrap().evaluate(0.0).is_err());
//! ```

use crate::{error::DomainError, function::RealFunction};
use rustc_hash::FxHashMap;
use verge_core::num::real::RealNumeric;

/// One entry of the function catalogue.
///
/// The variants mirror the classic teaching set: six total functions with
/// no restriction, and nine partial functions whose excluded inputs raise
/// a `DomainError`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NamedFunction {
    /// `x²`, total.
    Square,
    /// `x³`, total.
    Cube,
    /// `sin x`, total.
    Sine,
    /// `cos x`, total.
    Cosine,
    /// `eˣ`, total.
    Exponential,
    /// `|x|`, total.
    AbsoluteValue,
    /// `1/x`, undefined at `x = 0`.
    Reciprocal,
    /// `√x`, undefined for `x < 0`.
    SquareRoot,
    /// `1/(x² - 1)`, undefined at `x = ±1`.
    ReciprocalQuadratic,
    /// `tan x`, undefined where `x mod π = π/2`.
    Tangent,
    /// `1/cos x`, undefined where `cos x` is exactly zero.
    Secant,
    /// `1/sin x`, undefined where `sin x` is exactly zero.
    Cosecant,
    /// `cos x / sin x`, undefined where `sin x` is exactly zero.
    Cotangent,
    /// `ln x`, undefined for `x ≤ 0`.
    NaturalLog,
    /// `log₁₀ x`, undefined for `x ≤ 0`.
    CommonLog,
}

impl NamedFunction {
    /// Every catalogue entry, in declaration order.
    pub const ALL: [NamedFunction; 15] = [
        NamedFunction::Square,
        NamedFunction::Cube,
        NamedFunction::Sine,
        NamedFunction::Cosine,
        NamedFunction::Exponential,
        NamedFunction::AbsoluteValue,
        NamedFunction::Reciprocal,
        NamedFunction::SquareRoot,
        NamedFunction::ReciprocalQuadratic,
        NamedFunction::Tangent,
        NamedFunction::Secant,
        NamedFunction::Cosecant,
        NamedFunction::Cotangent,
        NamedFunction::NaturalLog,
        NamedFunction::CommonLog,
    ];

    /// The snake_case identifier of the entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_functions::catalogue::NamedFunction;
    ///
    /// assert_eq!(NamedFunction::SquareRoot.identifier(), "square_root");
    /// ```
    #[inline]
    pub const fn identifier(&self) -> &'static str {
        match self {
            NamedFunction::Square => "square",
            NamedFunction::Cube => "cube",
            NamedFunction::Sine => "sine",
            NamedFunction::Cosine => "cosine",
            NamedFunction::Exponential => "exponential",
            NamedFunction::AbsoluteValue => "absolute_value",
            NamedFunction::Reciprocal => "reciprocal",
            NamedFunction::SquareRoot => "square_root",
            NamedFunction::ReciprocalQuadratic => "reciprocal_quadratic",
            NamedFunction::Tangent => "tangent",
            NamedFunction::Secant => "secant",
            NamedFunction::Cosecant => "cosecant",
            NamedFunction::Cotangent => "cotangent",
            NamedFunction::NaturalLog => "natural_log",
            NamedFunction::CommonLog => "common_log",
        }
    }

    /// Returns `true` if the entry is defined on the whole real line.
    #[inline]
    pub const fn is_total(&self) -> bool {
        matches!(
            self,
            NamedFunction::Square
                | NamedFunction::Cube
                | NamedFunction::Sine
                | NamedFunction::Cosine
                | NamedFunction::Exponential
                | NamedFunction::AbsoluteValue
        )
    }

    /// Reduces `x` into `[0, π)` the way a Euclidean remainder would.
    ///
    /// The `%` operator truncates toward zero, so negative inputs need one
    /// corrective addition to land in the canonical range.
    #[inline]
    fn rem_pi<T: RealNumeric>(x: T) -> T {
        let pi = T::PI();
        let r = x % pi;
        if r < T::zero() {
            r + pi
        } else {
            r
        }
    }

    #[inline]
    fn reject<T: RealNumeric>(&self, x: T, constraint: &'static str) -> DomainError<T> {
        DomainError::new(self.identifier(), x, constraint)
    }
}

impl<T> RealFunction<T> for NamedFunction
where
    T: RealNumeric,
{
    fn name(&self) -> &str {
        self.identifier()
    }

    fn evaluate(&self, x: T) -> Result<T, DomainError<T>> {
        match self {
            NamedFunction::Square => Ok(x * x),
            NamedFunction::Cube => Ok(x * x * x),
            NamedFunction::Sine => Ok(x.sin()),
            NamedFunction::Cosine => Ok(x.cos()),
            NamedFunction::Exponential => Ok(x.exp()),
            NamedFunction::AbsoluteValue => Ok(x.abs()),
            NamedFunction::Reciprocal => {
                if x == T::zero() {
                    Err(self.reject(x, "x = 0"))
                } else {
                    Ok(x.recip())
                }
            }
            NamedFunction::SquareRoot => {
                if x < T::zero() {
                    Err(self.reject(x, "x < 0"))
                } else {
                    Ok(x.sqrt())
                }
            }
            NamedFunction::ReciprocalQuadratic => {
                if x == T::one() || x == -T::one() {
                    Err(self.reject(x, "x = 1 or x = -1"))
                } else {
                    Ok((x * x - T::one()).recip())
                }
            }
            NamedFunction::Tangent => {
                if Self::rem_pi(x) == T::FRAC_PI_2() {
                    Err(self.reject(x, "x mod pi = pi/2"))
                } else {
                    Ok(x.tan())
                }
            }
            NamedFunction::Secant => {
                let cos = x.cos();
                if cos == T::zero() {
                    Err(self.reject(x, "cos(x) = 0"))
                } else {
                    Ok(cos.recip())
                }
            }
            NamedFunction::Cosecant => {
                let sin = x.sin();
                if sin == T::zero() {
                    Err(self.reject(x, "sin(x) = 0"))
                } else {
                    Ok(sin.recip())
                }
            }
            NamedFunction::Cotangent => {
                let sin = x.sin();
                if sin == T::zero() {
                    Err(self.reject(x, "sin(x) = 0"))
                } else {
                    Ok(x.cos() / sin)
                }
            }
            NamedFunction::NaturalLog => {
                if x <= T::zero() {
                    Err(self.reject(x, "x <= 0"))
                } else {
                    Ok(x.ln())
                }
            }
            NamedFunction::CommonLog => {
                if x <= T::zero() {
                    Err(self.reject(x, "x <= 0"))
                } else {
                    Ok(x.log10())
                }
            }
        }
    }
}

impl std::fmt::Display for NamedFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// The immutable name-to-function registry.
///
/// Built once at startup via [`Catalogue::standard`] and passed by
/// reference to consumers; there is no mutation API.
#[derive(Clone, Debug)]
pub struct Catalogue {
    entries: FxHashMap<&'static str, NamedFunction>,
}

impl Catalogue {
    /// Builds the standard catalogue containing every [`NamedFunction`].
    pub fn standard() -> Self {
        let mut entries =
            FxHashMap::with_capacity_and_hasher(NamedFunction::ALL.len(), Default::default());
        for function in NamedFunction::ALL {
            entries.insert(function.identifier(), function);
        }
        Self { entries }
    }

    /// Looks up an entry by its snake_case name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_functions::catalogue::{Catalogue, NamedFunction};
    ///
    /// let catalogue = Catalogue::standard();
    /// assert_eq!(catalogue.get("cube"), Some(NamedFunction::Cube));
    /// assert_eq!(catalogue.get("unknown"), None);
    /// ```
    #[inline]
    pub fn get(&self, name: &str) -> Option<NamedFunction> {
        self.entries.get(name).copied()
    }

    /// Returns `true` if an entry with the given name exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the entry names in sorted order, for stable listing.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Iterates over `(name, function)` pairs in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, NamedFunction)> + '_ {
        self.entries.iter().map(|(name, function)| (*name, *function))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalogue has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalogue {
    #[inline]
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A spread of ordinary inputs clear of every excluded set, including
    /// the non-positive reals rejected by the roots and logarithms.
    const REGULAR_INPUTS: [f64; 6] = [0.25, 0.5, 0.75, 1.5, 2.5, 3.0];

    #[test]
    fn test_total_functions_never_fail() {
        let totals = [
            NamedFunction::Square,
            NamedFunction::Cube,
            NamedFunction::Sine,
            NamedFunction::Cosine,
            NamedFunction::Exponential,
            NamedFunction::AbsoluteValue,
        ];
        for function in totals {
            assert!(function.is_total());
            for x in [-10.0, -1.0, 0.0, 1.0, 10.0] {
                let value: f64 = function.evaluate(x).unwrap();
                assert!(value.is_finite(), "{} at {} not finite", function, x);
            }
        }
    }

    #[test]
    fn test_partial_functions_succeed_off_their_excluded_set() {
        for function in NamedFunction::ALL {
            for x in REGULAR_INPUTS {
                let value = function.evaluate(x).unwrap_or_else(|e| {
                    panic!("{} unexpectedly failed at {}: {}", function, x, e)
                });
                assert!(value.is_finite());
            }
        }
    }

    #[test]
    fn test_square_and_cube_values() {
        assert_eq!(NamedFunction::Square.evaluate(3.0), Ok(9.0));
        assert_eq!(NamedFunction::Cube.evaluate(-2.0), Ok(-8.0));
        assert_eq!(NamedFunction::AbsoluteValue.evaluate(-4.5), Ok(4.5));
    }

    #[test]
    fn test_reciprocal_domain() {
        let err = NamedFunction::Reciprocal.evaluate(0.0).unwrap_err();
        assert_eq!(err.function, "reciprocal");
        assert_eq!(err.constraint, "x = 0");
        assert_eq!(NamedFunction::Reciprocal.evaluate(4.0), Ok(0.25));
        assert_eq!(NamedFunction::Reciprocal.evaluate(-0.5), Ok(-2.0));
    }

    #[test]
    fn test_square_root_domain() {
        assert!(NamedFunction::SquareRoot.evaluate(-1e-12).is_err());
        // Zero is inside the domain, unlike the reciprocal.
        assert_eq!(NamedFunction::SquareRoot.evaluate(0.0), Ok(0.0));
        assert_eq!(NamedFunction::SquareRoot.evaluate(9.0), Ok(3.0));
    }

    #[test]
    fn test_reciprocal_quadratic_domain() {
        assert!(NamedFunction::ReciprocalQuadratic.evaluate(1.0).is_err());
        assert!(NamedFunction::ReciprocalQuadratic.evaluate(-1.0).is_err());
        assert_eq!(NamedFunction::ReciprocalQuadratic.evaluate(0.0), Ok(-1.0));
        assert_eq!(
            NamedFunction::ReciprocalQuadratic.evaluate(2.0),
            Ok(1.0 / 3.0)
        );
    }

    #[test]
    fn test_tangent_excluded_at_odd_half_pi() {
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert!(NamedFunction::Tangent.evaluate(half_pi).is_err());
        // -pi/2 lands on pi/2 after Euclidean reduction.
        assert!(NamedFunction::Tangent.evaluate(-half_pi).is_err());
        assert_eq!(NamedFunction::Tangent.evaluate(0.0), Ok(0.0));
        assert!(NamedFunction::Tangent.evaluate(1.0).is_ok());
    }

    #[test]
    fn test_cosecant_and_cotangent_excluded_where_sine_vanishes() {
        // sin(0) is exactly zero; sin(pi) is not, because pi itself rounds.
        assert!(NamedFunction::Cosecant.evaluate(0.0).is_err());
        assert!(NamedFunction::Cotangent.evaluate(0.0).is_err());
        assert!(NamedFunction::Cosecant.evaluate(1.0).is_ok());
        assert!(NamedFunction::Cotangent.evaluate(1.0).is_ok());
    }

    #[test]
    fn test_secant_rejects_only_exact_zero_cosine() {
        // cos(pi/2) rounds to ~6.1e-17, not exactly zero, so the secant
        // evaluates there (to a huge but finite value). The excluded set is
        // "cos(x) exactly zero", matching the catalogue contract.
        let near_pole = NamedFunction::Secant
            .evaluate(std::f64::consts::FRAC_PI_2)
            .unwrap();
        assert!(near_pole.abs() > 1e15);
        assert_eq!(NamedFunction::Secant.evaluate(0.0), Ok(1.0));
    }

    #[test]
    fn test_logarithms_reject_non_positive_inputs() {
        for function in [NamedFunction::NaturalLog, NamedFunction::CommonLog] {
            assert!(function.evaluate(0.0).is_err());
            assert!(function.evaluate(-3.0).is_err());
            assert!(function.evaluate(1e-9_f64).unwrap().is_finite());
        }
        assert_eq!(NamedFunction::NaturalLog.evaluate(1.0), Ok(0.0));
        assert_eq!(NamedFunction::CommonLog.evaluate(100.0), Ok(2.0));
    }

    #[test]
    fn test_catalogue_contains_all_entries() {
        let catalogue = Catalogue::standard();
        assert_eq!(catalogue.len(), NamedFunction::ALL.len());
        assert!(!catalogue.is_empty());
        for function in NamedFunction::ALL {
            assert_eq!(catalogue.get(function.identifier()), Some(function));
        }
        assert!(!catalogue.contains("riemann_zeta"));
    }

    #[test]
    fn test_catalogue_names_are_sorted() {
        let names = Catalogue::standard().names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"absolute_value"));
        assert!(names.contains(&"reciprocal_quadratic"));
    }

    #[test]
    fn test_catalogue_iter_round_trips() {
        let catalogue = Catalogue::standard();
        let mut count = 0;
        for (name, function) in catalogue.iter() {
            assert_eq!(name, function.identifier());
            count += 1;
        }
        assert_eq!(count, catalogue.len());
    }

    #[test]
    fn test_generic_over_f32() {
        assert_eq!(NamedFunction::Square.evaluate(2.0_f32), Ok(4.0_f32));
        assert!(NamedFunction::Reciprocal.evaluate(0.0_f32).is_err());
    }
}
