// Copyright 2026 the Shrinkcircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random sampling of points inside a disk.

use alloc::string::{String, ToString};
use core::f64::consts::TAU;
use core::fmt;
use core::str::FromStr;

use rand::Rng;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// How a random interior point is distributed over the disk.
///
/// The names parse from and print as `"uniform"`, `"uniform_area"` and
/// `"normal"`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum Distribution {
    /// Radius and angle are each drawn uniformly.
    ///
    /// Because the radius is not weighted by area, points cluster toward
    /// the center: half of all samples land within half the radius, which
    /// is only a quarter of the area.
    #[default]
    Uniform,
    /// Uniform by area: the radius is drawn as `r_max * sqrt(u)`.
    UniformArea,
    /// A normal distribution around the center.
    ///
    /// Recognized but not implemented; sampling with it returns
    /// [`SampleError::Unsupported`].
    Normal,
}

impl Distribution {
    /// The canonical name of this distribution.
    pub fn name(self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::UniformArea => "uniform_area",
            Distribution::Normal => "normal",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Distribution::Uniform),
            "uniform_area" => Ok(Distribution::UniformArea),
            "normal" => Ok(Distribution::Normal),
            other => Err(SampleError::UnknownDistribution(other.to_string())),
        }
    }
}

/// An error which can be returned when sampling a point inside a circle.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SampleError {
    /// The deadzone was outside `[0, 1)`.
    InvalidDeadzone(f64),
    /// The distribution is recognized but has no implementation.
    Unsupported(Distribution),
    /// The name did not match any distribution.
    UnknownDistribution(String),
    /// The circle's radius is negative or not finite, so it has no interior
    /// to sample from.
    DegenerateRadius(f64),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::InvalidDeadzone(d) => {
                write!(f, "Deadzone {d} is outside the range [0, 1)")
            }
            SampleError::Unsupported(dist) => {
                write!(f, "The \"{dist}\" distribution is not yet supported")
            }
            SampleError::UnknownDistribution(name) => {
                write!(f, "Unknown distribution, \"{name}\"")
            }
            SampleError::DegenerateRadius(r) => {
                write!(f, "Cannot sample inside a circle of radius {r}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SampleError {}

/// Checks that `deadzone` is in `[0, 1)`.
pub(crate) fn check_deadzone(deadzone: f64) -> Result<(), SampleError> {
    if (0.0..1.0).contains(&deadzone) {
        Ok(())
    } else {
        Err(SampleError::InvalidDeadzone(deadzone))
    }
}

/// Draws polar coordinates `(r, theta)` with `r` in `[0, r_max]` and
/// `theta` in `[0, 2π)`.
pub(crate) fn draw_polar<R: Rng + ?Sized>(
    rng: &mut R,
    r_max: f64,
    distribution: Distribution,
) -> Result<(f64, f64), SampleError> {
    if !(r_max.is_finite() && r_max >= 0.0) {
        return Err(SampleError::DegenerateRadius(r_max));
    }
    let r = match distribution {
        Distribution::Uniform => rng.random_range(0.0..=r_max),
        Distribution::UniformArea => r_max * rng.random::<f64>().sqrt(),
        Distribution::Normal => return Err(SampleError::Unsupported(distribution)),
    };
    let theta = rng.random_range(0.0..TAU);
    Ok((r, theta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parse_names() {
        assert_eq!("uniform".parse::<Distribution>(), Ok(Distribution::Uniform));
        assert_eq!("uniform_area".parse::<Distribution>(), Ok(Distribution::UniformArea));
        assert_eq!("normal".parse::<Distribution>(), Ok(Distribution::Normal));
        assert_eq!(
            "gaussian".parse::<Distribution>(),
            Err(SampleError::UnknownDistribution("gaussian".to_string()))
        );
        for dist in [
            Distribution::Uniform,
            Distribution::UniformArea,
            Distribution::Normal,
        ] {
            assert_eq!(dist.to_string().parse::<Distribution>(), Ok(dist));
        }
    }

    #[test]
    fn deadzone_bounds() {
        assert!(check_deadzone(0.0).is_ok());
        assert!(check_deadzone(0.999).is_ok());
        assert_eq!(check_deadzone(1.0), Err(SampleError::InvalidDeadzone(1.0)));
        assert!(check_deadzone(-0.1).is_err());
        assert!(check_deadzone(f64::NAN).is_err());
    }

    #[test]
    fn normal_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            draw_polar(&mut rng, 1.0, Distribution::Normal),
            Err(SampleError::Unsupported(Distribution::Normal))
        );
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for dist in [Distribution::Uniform, Distribution::UniformArea] {
            for _ in 0..1000 {
                let (r, theta) = draw_polar(&mut rng, 2.5, dist).unwrap();
                assert!((0.0..=2.5).contains(&r), "{dist}: r = {r}");
                assert!((0.0..TAU).contains(&theta), "{dist}: theta = {theta}");
            }
        }
    }

    #[test]
    fn degenerate_radius_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            draw_polar(&mut rng, -0.5, Distribution::Uniform),
            Err(SampleError::DegenerateRadius(-0.5))
        );
        assert!(draw_polar(&mut rng, f64::INFINITY, Distribution::UniformArea).is_err());
        assert!(draw_polar(&mut rng, f64::NAN, Distribution::Uniform).is_err());
    }

    #[test]
    fn zero_radius_draws_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let (r, _) = draw_polar(&mut rng, 0.0, Distribution::Uniform).unwrap();
        assert_eq!(r, 0.0);
    }

    #[test]
    fn uniform_is_center_biased() {
        // With a linear radius draw about half of the samples fall inside
        // r_max / 2; an area-uniform draw puts about a quarter there.
        let mut rng = StdRng::seed_from_u64(3);
        let n = 20_000;
        let inner = |rng: &mut StdRng, dist: Distribution| {
            (0..n)
                .filter(|_| draw_polar(rng, 1.0, dist).unwrap().0 < 0.5)
                .count() as f64
                / n as f64
        };
        let linear = inner(&mut rng, Distribution::Uniform);
        let by_area = inner(&mut rng, Distribution::UniformArea);
        assert!((linear - 0.5).abs() < 0.03, "{linear}");
        assert!((by_area - 0.25).abs() < 0.03, "{by_area}");
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            SampleError::Unsupported(Distribution::Normal).to_string(),
            "The \"normal\" distribution is not yet supported"
        );
        assert_eq!(
            SampleError::InvalidDeadzone(1.5).to_string(),
            "Deadzone 1.5 is outside the range [0, 1)"
        );
    }
}
