// Copyright 2026 the Shrinkcircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shrink trajectory generator.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Circle, Distribution, Point, Rect, SampleError};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The radius ratio of the initial circle; "full size".
const INIT_SHRINK_RATIO: f64 = 1.0;

/// Longest trajectory `shrink` will produce.
const MAX_FRAMES: usize = 1 << 24;

/// How the circle moves between its initial and final state.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum ShrinkMode {
    /// Constant velocity toward the target and constant shrink rate.
    #[default]
    Linear,
}

impl ShrinkMode {
    /// The canonical name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            ShrinkMode::Linear => "linear",
        }
    }
}

impl fmt::Display for ShrinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShrinkMode {
    type Err = ShrinkError;

    /// Parses a mode name.
    ///
    /// ```
    /// use shrinkcircle::{ShrinkError, ShrinkMode};
    ///
    /// assert_eq!("linear".parse::<ShrinkMode>(), Ok(ShrinkMode::Linear));
    /// assert!(matches!(
    ///     "exponential".parse::<ShrinkMode>(),
    ///     Err(ShrinkError::UnknownMode(_))
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(ShrinkMode::Linear),
            other => Err(ShrinkError::UnknownMode(other.to_string())),
        }
    }
}

/// The inputs of one shrink episode.
///
/// The defaults shrink to a point over 3 seconds at 10 frames per second.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShrinkParams {
    /// Final radius as a fraction of the initial radius.
    pub target_shrink_ratio: f64,
    /// Duration in seconds.
    pub shrink_time: f64,
    /// Frames per second.
    pub fps: f64,
    /// Interpolation between the initial and final state.
    pub shrink_mode: ShrinkMode,
}

impl Default for ShrinkParams {
    fn default() -> Self {
        ShrinkParams {
            target_shrink_ratio: 0.0,
            shrink_time: 3.0,
            fps: 10.0,
            shrink_mode: ShrinkMode::Linear,
        }
    }
}

impl ShrinkParams {
    /// Linear shrink parameters.
    #[inline]
    pub fn new(target_shrink_ratio: f64, shrink_time: f64, fps: f64) -> Self {
        ShrinkParams {
            target_shrink_ratio,
            shrink_time,
            fps,
            shrink_mode: ShrinkMode::Linear,
        }
    }

    /// Returns these parameters with a different mode.
    #[inline]
    #[must_use]
    pub fn with_mode(self, shrink_mode: ShrinkMode) -> Self {
        ShrinkParams {
            shrink_mode,
            ..self
        }
    }

    /// The number of frames, `round(shrink_time * fps)`.
    ///
    /// # Errors
    ///
    /// Returns [`ShrinkError::InvalidFrameCount`] unless the rounded product
    /// is finite, at least one, and at most 2²⁴.
    pub fn frame_count(&self) -> Result<usize, ShrinkError> {
        let n = (self.shrink_time * self.fps).round();
        if n.is_finite() && (1.0..=MAX_FRAMES as f64).contains(&n) {
            Ok(n as usize)
        } else {
            Err(ShrinkError::InvalidFrameCount {
                shrink_time: self.shrink_time,
                fps: self.fps,
            })
        }
    }
}

/// An error which can be returned by [`ShrinkCircle`].
///
/// All of these are precondition violations, reported by the call that
/// violates them. The generator's state is left as it was.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ShrinkError {
    /// The requested target point is not inside the current circle.
    TargetOutsideCircle {
        /// The rejected target.
        target: Point,
        /// The circle it had to lie in.
        circle: Circle,
    },
    /// The initial circle has a non-finite center, or a radius that is
    /// negative or not finite.
    InvalidCircle(Circle),
    /// `round(shrink_time * fps)` is not a positive frame count, or exceeds
    /// the longest supported trajectory.
    InvalidFrameCount {
        /// The requested duration.
        shrink_time: f64,
        /// The requested frame rate.
        fps: f64,
    },
    /// The target shrink ratio is NaN or infinite.
    InvalidRatio(f64),
    /// The name did not match any shrink mode.
    UnknownMode(String),
    /// Sampling a random target point failed.
    Sample(SampleError),
    /// Memory for this many frames could not be reserved.
    FrameAllocation(usize),
}

impl fmt::Display for ShrinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShrinkError::InvalidCircle(circle) => {
                write!(f, "Cannot shrink {circle}, it is not a finite circle")
            }
            ShrinkError::TargetOutsideCircle { target, circle } => {
                write!(f, "Target point {target} is not inside {circle}")
            }
            ShrinkError::InvalidFrameCount { shrink_time, fps } => write!(
                f,
                "Shrink time {shrink_time}s at {fps} fps does not give a valid frame count"
            ),
            ShrinkError::InvalidRatio(ratio) => {
                write!(f, "Target shrink ratio {ratio} is not finite")
            }
            ShrinkError::UnknownMode(name) => {
                write!(f, "Shrink mode \"{name}\" is not supported")
            }
            ShrinkError::Sample(err) => write!(f, "Could not sample a target point: {err}"),
            ShrinkError::FrameAllocation(n) => write!(f, "Could not allocate {n} frames"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShrinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShrinkError::Sample(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SampleError> for ShrinkError {
    fn from(err: SampleError) -> Self {
        ShrinkError::Sample(err)
    }
}

/// A circle that contracts toward a point inside it.
///
/// The generator keeps the initial circle fixed and advances a current
/// circle one frame at a time. A target point is either set explicitly with
/// [`set_target_point`](ShrinkCircle::set_target_point), drawn with
/// [`generate_target_point_randomly`](ShrinkCircle::generate_target_point_randomly),
/// or drawn by [`shrink`](ShrinkCircle::shrink) itself when none is set.
///
/// Randomness comes from the generator's own source `R`, never from global
/// state, so two generators never influence each other.
///
/// ```
/// use shrinkcircle::{ShrinkCircle, ShrinkParams};
///
/// let mut sc = ShrinkCircle::with_seed((0.0, 0.0), 1.0, 7);
/// let frames = sc.shrink(&ShrinkParams::new(0.5, 2.0, 10.0)).unwrap();
/// assert_eq!(frames.len(), 20);
///
/// let last = frames.last().unwrap();
/// assert!((last.radius - 0.5).abs() < 1e-9);
/// assert!(last.center.distance(sc.target_point().unwrap()) < 1e-9);
/// ```
#[derive(Clone)]
pub struct ShrinkCircle<R = StdRng> {
    init_circle: Circle,
    current_circle: Circle,
    target_point: Option<Point>,
    rng: R,
}

impl ShrinkCircle<StdRng> {
    /// A generator for the circle at `center` with `radius`, with a random
    /// source seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Self::with_rng(center, radius, StdRng::from_rng(&mut rand::rng()))
    }

    /// A generator whose random draws are reproducible from `seed`.
    pub fn with_seed(center: impl Into<Point>, radius: f64, seed: u64) -> Self {
        Self::with_rng(center, radius, StdRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "std")]
impl Default for ShrinkCircle<StdRng> {
    /// The unit circle at the origin.
    fn default() -> Self {
        Self::new(Point::ORIGIN, 1.0)
    }
}

impl<R: Rng> ShrinkCircle<R> {
    /// A generator drawing random target points from `rng`.
    ///
    /// The circle is checked when it is first used: [`shrink`](Self::shrink)
    /// and [`generate_target_point_randomly`](Self::generate_target_point_randomly)
    /// reject a non-finite center and a negative or non-finite radius.
    pub fn with_rng(center: impl Into<Point>, radius: f64, rng: R) -> Self {
        let init_circle = Circle::new(center, radius);
        ShrinkCircle {
            init_circle,
            current_circle: init_circle,
            target_point: None,
            rng,
        }
    }

    /// The circle the episode started from.
    #[inline]
    pub fn init_circle(&self) -> Circle {
        self.init_circle
    }

    /// The circle after the most recent frame.
    #[inline]
    pub fn current_circle(&self) -> Circle {
        self.current_circle
    }

    /// The center of the current circle.
    #[inline]
    pub fn center(&self) -> Point {
        self.current_circle.center
    }

    /// The radius of the current circle.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.current_circle.radius
    }

    /// The target point, if one has been set or generated.
    #[inline]
    pub fn target_point(&self) -> Option<Point> {
        self.target_point
    }

    /// The current radius as a fraction of the initial radius.
    ///
    /// This is NaN for a zero-radius initial circle.
    #[inline]
    pub fn current_shrink_ratio(&self) -> f64 {
        INIT_SHRINK_RATIO * self.current_circle.radius / self.init_circle.radius
    }

    /// The plot limits of the episode: the initial circle's bounding box.
    ///
    /// Every frame of a trajectory whose target was drawn by
    /// [`shrink`](ShrinkCircle::shrink) with a ratio in `[0, 1]` fits inside.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.init_circle.bounding_box()
    }

    /// Restores the initial circle and clears the target, so the generator
    /// can run another episode.
    pub fn reset(&mut self) {
        self.current_circle = self.init_circle;
        self.target_point = None;
    }

    /// Sets the point the circle contracts toward.
    ///
    /// # Errors
    ///
    /// Returns [`ShrinkError::TargetOutsideCircle`] if `target` is not in the
    /// current circle (the boundary counts as inside).
    pub fn set_target_point(&mut self, target: impl Into<Point>) -> Result<(), ShrinkError> {
        let target = target.into();
        if !self.current_circle.contains(target) {
            return Err(ShrinkError::TargetOutsideCircle {
                target,
                circle: self.current_circle,
            });
        }
        self.target_point = Some(target);
        Ok(())
    }

    /// Draws a target point inside the current circle, keeping `deadzone`
    /// (a fraction of the radius) clear of the boundary, and sets it.
    ///
    /// With a `seed`, the draw uses a fresh source seeded from it and is
    /// reproducible; the generator's own source is left untouched. Without
    /// one, the generator's source is used.
    ///
    /// # Errors
    ///
    /// Returns [`ShrinkError::InvalidCircle`] if the initial circle is not a
    /// finite circle with a non-negative radius, and [`ShrinkError::Sample`]
    /// if the deadzone is outside `[0, 1)`, the distribution is not
    /// implemented, or the current radius is negative.
    pub fn generate_target_point_randomly(
        &mut self,
        distribution: Distribution,
        seed: Option<u64>,
        deadzone: f64,
    ) -> Result<Point, ShrinkError>
    where
        R: SeedableRng,
    {
        self.check_init_circle()?;
        let circle = self.current_circle;
        let target = match seed {
            Some(seed) => {
                circle.sample_interior_point(&mut R::seed_from_u64(seed), distribution, deadzone)
            }
            None => circle.sample_interior_point(&mut self.rng, distribution, deadzone),
        }?;
        self.target_point = Some(target);
        Ok(target)
    }

    /// Runs the whole shrink episode and returns one circle per frame.
    ///
    /// The center moves toward the target point and the radius toward
    /// `target_shrink_ratio` times the initial radius, both by equal steps.
    /// If no target is set, one is drawn uniformly from the current circle
    /// with a deadzone of `target_shrink_ratio` (clamped to `[0, 1]`), which
    /// keeps the final circle inside the initial one.
    ///
    /// Frame `k` of `n` is interpolated at `k / n` from the current state,
    /// so the last frame is the final state exactly, and the generator's
    /// current circle is left there. Ratios below zero are not rejected; the
    /// radius then passes through zero and ends negative.
    ///
    /// # Errors
    ///
    /// Returns [`ShrinkError::InvalidCircle`] if the initial circle has a
    /// non-finite center or a negative or non-finite radius,
    /// [`ShrinkError::InvalidFrameCount`] if `round(shrink_time * fps)` is
    /// below one or above 2²⁴, [`ShrinkError::InvalidRatio`] for a non-finite
    /// ratio, [`ShrinkError::Sample`] if a target had to be drawn and could
    /// not be, and [`ShrinkError::FrameAllocation`] if the frames do not fit
    /// in memory. Nothing is changed on error.
    pub fn shrink(&mut self, params: &ShrinkParams) -> Result<Vec<Circle>, ShrinkError> {
        self.check_init_circle()?;
        let ratio = params.target_shrink_ratio;
        if !ratio.is_finite() {
            return Err(ShrinkError::InvalidRatio(ratio));
        }
        let frame_count = params.frame_count()?;
        let mut frames = Vec::new();
        frames
            .try_reserve_exact(frame_count)
            .map_err(|_| ShrinkError::FrameAllocation(frame_count))?;
        let target = match self.target_point {
            Some(target) => target,
            None => {
                let margin = ratio.clamp(0.0, 1.0);
                let target = self.current_circle.sample_with_margin(
                    &mut self.rng,
                    Distribution::Uniform,
                    margin,
                )?;
                self.target_point = Some(target);
                target
            }
        };
        if ratio < 0.0 {
            tracing::warn!(ratio, "negative shrink ratio, radius will end below zero");
        }
        tracing::debug!(
            frame_count,
            ratio,
            %target,
            mode = %params.shrink_mode,
            "shrinking circle"
        );

        let start = self.current_circle;
        let end = Circle {
            center: target,
            radius: start.radius - (INIT_SHRINK_RATIO - ratio) * self.init_circle.radius,
        };
        let n = frame_count as f64;
        for k in 1..frame_count {
            let t = k as f64 / n;
            frames.push(match params.shrink_mode {
                ShrinkMode::Linear => Circle {
                    center: start.center.lerp(end.center, t),
                    radius: start.radius + (end.radius - start.radius) * t,
                },
            });
        }
        frames.push(end);
        self.current_circle = end;
        Ok(frames)
    }

    fn check_init_circle(&self) -> Result<(), ShrinkError> {
        let circle = self.init_circle;
        if circle.is_finite() && circle.radius >= 0.0 {
            Ok(())
        } else {
            Err(ShrinkError::InvalidCircle(circle))
        }
    }
}

impl<R> fmt::Debug for ShrinkCircle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShrinkCircle")
            .field("init_circle", &self.init_circle)
            .field("current_circle", &self.current_circle)
            .field("target_point", &self.target_point)
            .finish_non_exhaustive()
    }
}
