// Copyright 2026 the Shrinkcircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of the circle value type.

use core::f64::consts::PI;
use core::fmt;
use core::ops::{Add, Sub};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sample::{check_deadzone, draw_polar};
use crate::{Distribution, Point, Rect, SampleError, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
///
/// This is a plain value: every frame of a shrink trajectory is its own
/// `Circle`, so frames handed out earlier never change.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// The unit circle at the origin.
    pub const UNIT: Circle = Circle {
        center: Point::ORIGIN,
        radius: 1.0,
    };

    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// The area of the disk.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    /// The length of the boundary.
    #[inline]
    pub fn circumference(&self) -> f64 {
        (2.0 * PI * self.radius).abs()
    }

    /// Returns `true` if `pt` lies in the closed disk.
    ///
    /// Points exactly on the boundary are contained.
    ///
    /// ```
    /// use shrinkcircle::{Circle, Point};
    ///
    /// let c = Circle::new((1.0, 1.0), 2.0);
    /// assert!(c.contains(Point::new(3.0, 1.0)));
    /// assert!(!c.contains(Point::new(3.0, 1.5)));
    /// ```
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.distance(self.center) <= self.radius
    }

    /// Returns `true` if `(x, y)` lies in the closed disk.
    ///
    /// See [`Circle::contains`].
    #[inline]
    pub fn is_contained(&self, x: f64, y: f64) -> bool {
        self.contains(Point::new(x, y))
    }

    /// Polar coordinates `(r, theta)` of `pt`, measured from this circle's
    /// center.
    ///
    /// `theta` is in radians, in the range (−π, π]. This is the inverse of
    /// [`Circle::from_polar`].
    #[inline]
    pub fn to_polar(&self, pt: Point) -> (f64, f64) {
        let v = pt - self.center;
        (v.hypot(), v.atan2())
    }

    /// The point at distance `r` and angle `theta` from this circle's center.
    #[inline]
    pub fn from_polar(&self, r: f64, theta: f64) -> Point {
        self.center + r * Vec2::from_angle(theta)
    }

    /// Draws a random point from the disk of radius `radius * (1 - deadzone)`
    /// around the center.
    ///
    /// The deadzone keeps the point away from the boundary, as a fraction of
    /// the radius, and must be in `[0, 1)`. Each call advances `rng`, so
    /// draws vary from call to call; pass `&mut rand::rng()` for a
    /// throwaway source.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidDeadzone`] for a deadzone outside
    /// `[0, 1)`, [`SampleError::Unsupported`] for [`Distribution::Normal`],
    /// and [`SampleError::DegenerateRadius`] if the radius is negative or not
    /// finite.
    pub fn sample_interior_point<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        distribution: Distribution,
        deadzone: f64,
    ) -> Result<Point, SampleError> {
        check_deadzone(deadzone)?;
        self.sample_with_margin(rng, distribution, deadzone)
    }

    /// Like [`Circle::sample_interior_point`], with a dedicated random source
    /// seeded from `seed`.
    ///
    /// The same seed and arguments always produce the same point.
    ///
    /// ```
    /// use shrinkcircle::{Circle, Distribution};
    ///
    /// let c = Circle::new((0.0, 0.0), 1.0);
    /// let a = c.sample_interior_point_seeded(Distribution::Uniform, 9, 0.5).unwrap();
    /// let b = c.sample_interior_point_seeded(Distribution::Uniform, 9, 0.5).unwrap();
    /// assert_eq!(a, b);
    /// assert!(a.distance(c.center) <= 0.5);
    /// ```
    ///
    /// # Errors
    ///
    /// As for [`Circle::sample_interior_point`].
    pub fn sample_interior_point_seeded(
        &self,
        distribution: Distribution,
        seed: u64,
        deadzone: f64,
    ) -> Result<Point, SampleError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.sample_interior_point(&mut rng, distribution, deadzone)
    }

    /// Sampling without the `[0, 1)` deadzone check.
    ///
    /// A margin of `1` collapses the sampling disk to the center.
    pub(crate) fn sample_with_margin<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        distribution: Distribution,
        margin: f64,
    ) -> Result<Point, SampleError> {
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(SampleError::DegenerateRadius(self.radius));
        }
        let r_max = self.radius * (1.0 - margin);
        let (r, theta) = draw_polar(rng, r_max, distribution)?;
        let pt = self.from_polar(r, theta);
        tracing::trace!(%pt, r, theta, %distribution, "sampled interior point");
        Ok(pt)
    }

    /// The smallest rectangle that encloses the circle.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        let (x, y) = self.center.into();
        Rect::new(x - r, y - r, x + r, y + r)
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(")?;
        fmt::Display::fmt(&self.center, f)?;
        write!(f, ", r=")?;
        fmt::Display::fmt(&self.radius, f)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Circle, Distribution, Point, Rect, SampleError, Vec2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn area_and_circumference() {
        let c = Circle::new((5.0, 5.0), 5.0);
        assert_approx_eq(c.area(), 25.0 * PI);
        assert_approx_eq(c.circumference(), 10.0 * PI);

        let c_neg_radius = Circle::new((5.0, 5.0), -5.0);
        assert_approx_eq(c_neg_radius.area(), 25.0 * PI);
        assert_approx_eq(c_neg_radius.circumference(), 10.0 * PI);
    }

    #[test]
    fn boundary_is_contained() {
        let c = Circle::new((0.0, 0.0), 1.0);
        assert!(c.is_contained(1.0, 0.0));
        assert!(c.is_contained(0.0, -1.0));
        assert!(c.contains(c.center));
        assert!(!c.is_contained(1.0, 1e-6));

        let c = Circle::new((-2.0, 3.0), 5.0);
        assert!(c.contains(Point::new(1.0, 7.0)));
        assert!(!c.contains(Point::new(1.0, 7.0001)));
    }

    #[test]
    fn negative_radius_contains_nothing() {
        let c = Circle::new((0.0, 0.0), -1.0);
        assert!(!c.contains(Point::ORIGIN));
    }

    #[test]
    fn polar_round_trip_off_origin() {
        let c = Circle::new((3.0, -2.0), 1.5);
        for pt in [
            Point::new(3.5, -1.0),
            Point::new(-4.0, 10.0),
            Point::new(3.0, -2.0),
            Point::new(2.0, -2.0),
        ] {
            let (r, theta) = c.to_polar(pt);
            assert!(theta > -PI && theta <= PI, "{theta}");
            let back = c.from_polar(r, theta);
            assert!(back.distance(pt) < 1e-12, "{back} != {pt}");
        }
    }

    #[test]
    fn polar_is_relative_to_center() {
        let c = Circle::new((1.0, 1.0), 1.0);
        let (r, theta) = c.to_polar(Point::new(1.0, 3.0));
        assert_approx_eq(r, 2.0);
        assert_approx_eq(theta, PI / 2.0);
        let pt = c.from_polar(1.0, PI);
        assert!(pt.distance(Point::new(0.0, 1.0)) < 1e-12);
    }

    #[test]
    fn seeded_sampling_is_deterministic() {
        let c = Circle::new((2.0, -1.0), 3.0);
        for seed in [0, 1, 42, u64::MAX] {
            let a = c.sample_interior_point_seeded(Distribution::Uniform, seed, 0.2);
            let b = c.sample_interior_point_seeded(Distribution::Uniform, seed, 0.2);
            assert_eq!(a, b);
        }
        let a = c.sample_interior_point_seeded(Distribution::Uniform, 1, 0.0);
        let b = c.sample_interior_point_seeded(Distribution::Uniform, 2, 0.0);
        assert_ne!(a, b);
    }

    #[test]
    fn sampling_respects_deadzone() {
        let c = Circle::new((10.0, 10.0), 4.0);
        let mut rng = StdRng::seed_from_u64(11);
        for deadzone in [0.0, 0.25, 0.5, 0.9] {
            let limit = c.radius * (1.0 - deadzone);
            for dist in [Distribution::Uniform, Distribution::UniformArea] {
                for _ in 0..500 {
                    let pt = c.sample_interior_point(&mut rng, dist, deadzone).unwrap();
                    assert!(pt.distance(c.center) <= limit + 1e-12);
                    assert!(c.contains(pt));
                }
            }
        }
    }

    #[test]
    fn sampling_rejects_bad_inputs() {
        let c = Circle::UNIT;
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            c.sample_interior_point(&mut rng, Distribution::Uniform, 1.0),
            Err(SampleError::InvalidDeadzone(1.0))
        );
        assert_eq!(
            c.sample_interior_point(&mut rng, Distribution::Normal, 0.0),
            Err(SampleError::Unsupported(Distribution::Normal))
        );
        assert_eq!(
            Circle::new((0.0, 0.0), -2.0).sample_interior_point(
                &mut rng,
                Distribution::Uniform,
                0.0
            ),
            Err(SampleError::DegenerateRadius(-2.0))
        );
    }

    #[test]
    fn full_margin_samples_center() {
        let c = Circle::new((1.0, 2.0), 3.0);
        let mut rng = StdRng::seed_from_u64(4);
        let pt = c
            .sample_with_margin(&mut rng, Distribution::Uniform, 1.0)
            .unwrap();
        assert!(pt.distance(c.center) < 1e-12);
    }

    #[test]
    fn degenerate_radius_reports_circle_radius() {
        let c = Circle::new((0.0, 0.0), -1.0);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            c.sample_with_margin(&mut rng, Distribution::Uniform, 0.5),
            Err(SampleError::DegenerateRadius(-1.0))
        );
        assert_eq!(
            c.sample_interior_point(&mut rng, Distribution::UniformArea, 0.5),
            Err(SampleError::DegenerateRadius(-1.0))
        );
        let c = Circle::new((0.0, 0.0), f64::INFINITY);
        assert_eq!(
            c.sample_interior_point(&mut rng, Distribution::Uniform, 0.25),
            Err(SampleError::DegenerateRadius(f64::INFINITY))
        );
    }

    #[test]
    fn bounding_box_and_translation() {
        let c = Circle::new((1.0, -1.0), 2.0);
        assert_eq!(c.bounding_box(), Rect::new(-1.0, -3.0, 3.0, 1.0));
        assert_eq!(c + Vec2::new(1.0, 1.0), Circle::new((2.0, 0.0), 2.0));
        assert_eq!(c - Vec2::new(1.0, 1.0), Circle::new((0.0, -2.0), 2.0));
        assert!(c.is_finite());
        assert!(!c.is_nan());
        assert!(Circle::new((f64::NAN, 0.0), 1.0).is_nan());
    }

    #[test]
    fn display() {
        let c = Circle::new((0.5, -1.0), 2.0);
        assert_eq!(c.to_string(), "Circle((0.5, -1), r=2)");
    }
}
