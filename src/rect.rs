// Copyright 2026 the Shrinkcircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;

/// An axis-aligned rectangle.
///
/// Used for the plot limits of a shrink episode, which a renderer sets its
/// axes to.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (bottom edge in y-up spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (top edge in y-up spaces).
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// The x range, as a `(min, max)` pair.
    #[inline]
    pub fn x_range(&self) -> (f64, f64) {
        (self.x0, self.x1)
    }

    /// The y range, as a `(min, max)` pair.
    #[inline]
    pub fn y_range(&self) -> (f64, f64) {
        (self.y0, self.y1)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        fmt::Display::fmt(&self.x0, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.x1, f)?;
        write!(f, "] × [")?;
        fmt::Display::fmt(&self.y0, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.y1, f)?;
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::Rect;

    #[test]
    fn ranges() {
        let r = Rect::new(-1.0, -2.0, 3.0, 4.0);
        assert_eq!(r.x_range(), (-1.0, 3.0));
        assert_eq!(r.y_range(), (-2.0, 4.0));
    }

    #[test]
    fn display() {
        let r = Rect::new(-1.0, -2.0, 1.0, 2.0);
        assert_eq!(format!("{r}"), "[-1, 1] × [-2, 2]");
    }
}
