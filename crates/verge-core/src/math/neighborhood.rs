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

use num_traits::Float;

/// A symmetric open neighborhood `(center - radius, center + radius)` around
/// a point on the real line.
///
/// This struct represents the delta-ball from the formal limit definition:
/// the set of inputs `x` with `|x - center| < radius`. It supports plain and
/// punctured membership queries (the punctured form excludes the center
/// itself) and geometric shrinking, which is the primitive operation of the
/// delta search.
///
/// # Invariants
/// `radius` must always be finite and non-negative.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct SymmetricNeighborhood<T>
where
    T: Float,
{
    center: T,
    radius: T,
}

impl<T> SymmetricNeighborhood<T>
where
    T: Float,
{
    /// Creates a new `SymmetricNeighborhood`.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_core::math::neighborhood::SymmetricNeighborhood;
    ///
    /// let ball = SymmetricNeighborhood::new(2.0, 0.5);
    /// assert_eq!(ball.lower(), 1.5);
    /// assert_eq!(ball.upper(), 2.5);
    /// ```
    #[inline]
    pub fn new(center: T, radius: T) -> Self {
        assert!(
            radius >= T::zero() && radius.is_finite(),
            "Invalid neighborhood: radius must be finite and non-negative"
        );
        Self { center, radius }
    }

    /// Creates a new `SymmetricNeighborhood` if the inputs are valid.
    ///
    /// Returns `None` if `radius` is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_core::math::neighborhood::SymmetricNeighborhood;
    ///
    /// assert!(SymmetricNeighborhood::try_new(0.0, 1.0).is_some());
    /// assert!(SymmetricNeighborhood::try_new(0.0, -1.0).is_none());
    /// assert!(SymmetricNeighborhood::try_new(0.0, f64::INFINITY).is_none());
    /// ```
    #[inline]
    pub fn try_new(center: T, radius: T) -> Option<Self> {
        if radius >= T::zero() && radius.is_finite() {
            Some(Self { center, radius })
        } else {
            None
        }
    }

    /// Creates a new `SymmetricNeighborhood` without checking invariants in
    /// release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `radius` is finite and non-negative.
    /// This function contains a `debug_assert!` to catch errors during
    /// development.
    #[inline]
    pub fn new_unchecked(center: T, radius: T) -> Self {
        debug_assert!(
            radius >= T::zero() && radius.is_finite(),
            "Invalid neighborhood: radius must be finite and non-negative"
        );
        Self { center, radius }
    }

    /// Returns the center of the neighborhood.
    #[inline]
    pub fn center(&self) -> T {
        self.center
    }

    /// Returns the radius of the neighborhood.
    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Returns the lower endpoint `center - radius`.
    #[inline]
    pub fn lower(&self) -> T {
        self.center - self.radius
    }

    /// Returns the upper endpoint `center + radius`.
    #[inline]
    pub fn upper(&self) -> T {
        self.center + self.radius
    }

    /// Returns the two endpoints `[lower, upper]`.
    ///
    /// These are exactly the probe inputs the delta search evaluates at
    /// distance `radius` from the center.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_core::math::neighborhood::SymmetricNeighborhood;
    ///
    /// let ball = SymmetricNeighborhood::new(2.0, 1.0);
    /// assert_eq!(ball.endpoints(), [1.0, 3.0]);
    /// ```
    #[inline]
    pub fn endpoints(&self) -> [T; 2] {
        [self.lower(), self.upper()]
    }

    /// Returns `true` if `x` lies strictly inside the open ball
    /// (`|x - center| < radius`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_core::math::neighborhood::SymmetricNeighborhood;
    ///
    /// let ball = SymmetricNeighborhood::new(0.0, 1.0);
    /// assert!(ball.contains(0.0));
    /// assert!(ball.contains(0.999));
    /// assert!(!ball.contains(1.0)); // Open at the boundary
    /// ```
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        (x - self.center).abs() < self.radius
    }

    /// Returns `true` if `x` lies strictly inside the punctured ball
    /// (`0 < |x - center| < radius`).
    ///
    /// This is the membership condition of the formal epsilon-delta
    /// definition: close to the point of interest, but never the point
    /// itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_core::math::neighborhood::SymmetricNeighborhood;
    ///
    /// let ball = SymmetricNeighborhood::new(0.0, 1.0);
    /// assert!(ball.contains_punctured(0.5));
    /// assert!(!ball.contains_punctured(0.0)); // The center is excluded
    /// assert!(!ball.contains_punctured(1.0));
    /// ```
    #[inline]
    pub fn contains_punctured(&self, x: T) -> bool {
        let distance = (x - self.center).abs();
        T::zero() < distance && distance < self.radius
    }

    /// Returns the neighborhood with the same center and half the radius.
    ///
    /// One step of the canonical geometric shrink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_core::math::neighborhood::SymmetricNeighborhood;
    ///
    /// let ball = SymmetricNeighborhood::new(2.0, 1.0);
    /// assert_eq!(ball.halved().radius(), 0.5);
    /// assert_eq!(ball.halved().center(), 2.0);
    /// ```
    #[inline]
    pub fn halved(&self) -> Self {
        let two = T::one() + T::one();
        Self {
            center: self.center,
            radius: self.radius / two,
        }
    }

    /// Returns the neighborhood with the same center and the radius scaled
    /// by `factor`.
    ///
    /// # Panics
    ///
    /// Panics if the scaled radius is negative or not finite.
    #[inline]
    pub fn scaled(&self, factor: T) -> Self {
        Self::new(self.center, self.radius * factor)
    }

    /// Returns `true` if the neighborhood has collapsed to a single point
    /// (`radius == 0`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use verge_core::math::neighborhood::SymmetricNeighborhood;
    ///
    /// assert!(SymmetricNeighborhood::new(1.0, 0.0).is_degenerate());
    /// assert!(!SymmetricNeighborhood::new(1.0, 0.5).is_degenerate());
    /// ```
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radius == T::zero()
    }
}

impl<T> std::fmt::Debug for SymmetricNeighborhood<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricNeighborhood")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .finish()
    }
}

impl<T> std::fmt::Display for SymmetricNeighborhood<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) \\ {{{}}}",
            self.lower(),
            self.upper(),
            self.center
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let ball = SymmetricNeighborhood::new(2.0, 0.5);
        assert_eq!(ball.center(), 2.0);
        assert_eq!(ball.radius(), 0.5);
        assert_eq!(ball.lower(), 1.5);
        assert_eq!(ball.upper(), 2.5);
        assert!(!ball.is_degenerate());
    }

    #[test]
    fn test_construction_degenerate() {
        let ball = SymmetricNeighborhood::new(2.0, 0.0);
        assert!(ball.is_degenerate());
        assert_eq!(ball.lower(), ball.upper());
    }

    #[test]
    fn test_try_new() {
        assert!(SymmetricNeighborhood::try_new(0.0, 1.0).is_some());
        assert!(SymmetricNeighborhood::try_new(0.0, 0.0).is_some());
        // Invalid: negative radius
        assert!(SymmetricNeighborhood::try_new(0.0, -1.0).is_none());
        // Invalid: non-finite radius
        assert!(SymmetricNeighborhood::try_new(0.0, f64::NAN).is_none());
        assert!(SymmetricNeighborhood::try_new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid neighborhood")]
    fn test_new_panic_on_negative_radius() {
        SymmetricNeighborhood::new(0.0, -0.1);
    }

    #[test]
    fn test_endpoints_are_the_probe_pair() {
        let ball = SymmetricNeighborhood::new(2.0, 1.0);
        assert_eq!(ball.endpoints(), [1.0, 3.0]);
    }

    #[test]
    fn test_contains() {
        let ball = SymmetricNeighborhood::new(0.0, 1.0);
        assert!(ball.contains(0.0)); // Center included in the plain ball
        assert!(ball.contains(-0.999));
        assert!(!ball.contains(1.0)); // Open at the boundary
        assert!(!ball.contains(-1.0));
        assert!(!ball.contains(2.0));
    }

    #[test]
    fn test_contains_punctured_excludes_center() {
        let ball = SymmetricNeighborhood::new(3.0, 0.5);
        assert!(ball.contains_punctured(3.25));
        assert!(ball.contains_punctured(2.75));
        assert!(!ball.contains_punctured(3.0)); // Center excluded
        assert!(!ball.contains_punctured(3.5)); // Boundary excluded
    }

    #[test]
    fn test_endpoints_are_outside_their_own_punctured_ball() {
        // The probes sit at exactly distance `radius`, which the strict
        // inequality rejects.
        let ball = SymmetricNeighborhood::new(2.0, 1.0);
        for x in ball.endpoints() {
            assert!(!ball.contains_punctured(x));
        }
    }

    #[test]
    fn test_halved() {
        let ball = SymmetricNeighborhood::new(2.0, 1.0);
        let halved = ball.halved();
        assert_eq!(halved.center(), 2.0);
        assert_eq!(halved.radius(), 0.5);
        // Halving is exact in binary floating point.
        assert_eq!(halved.halved().radius(), 0.25);
    }

    #[test]
    fn test_scaled() {
        let ball = SymmetricNeighborhood::new(0.0, 1.0);
        assert_eq!(ball.scaled(0.25).radius(), 0.25);
    }

    #[test]
    #[should_panic(expected = "Invalid neighborhood")]
    fn test_scaled_panics_on_negative_factor() {
        SymmetricNeighborhood::new(0.0, 1.0).scaled(-2.0);
    }

    #[test]
    fn test_traits_display_debug() {
        let ball = SymmetricNeighborhood::new(2.0, 1.0);
        assert_eq!(format!("{}", ball), "(1, 3) \\ {2}");
        assert_eq!(
            format!("{:?}", ball),
            "SymmetricNeighborhood { center: 2.0, radius: 1.0 }"
        );
    }
}
