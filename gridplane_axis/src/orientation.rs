// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Size};

/// Which coordinate direction an axis measures.
///
/// A [`Orientation::Horizontal`] axis measures values along pixel X; its grid
/// lines are therefore vertical segments. A [`Orientation::Vertical`] axis
/// measures values along pixel Y with values growing upward, so its ratio is
/// inverted relative to pixel space and its grid lines are horizontal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The X axis.
    Horizontal,
    /// The Y axis.
    Vertical,
}

impl Orientation {
    /// Returns the other orientation.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Pixel extent of `shape` along this orientation.
    #[must_use]
    pub fn extent(self, shape: Size) -> f64 {
        match self {
            Self::Horizontal => shape.width,
            Self::Vertical => shape.height,
        }
    }

    /// Maps `value` into a `0..1` ratio of the visible window `[offset, offset + range]`.
    ///
    /// `range` must already be clamped away from zero.
    #[must_use]
    pub fn ratio(self, value: f64, offset: f64, range: f64) -> f64 {
        let t = (value - offset) / range;
        match self {
            Self::Horizontal => t,
            Self::Vertical => 1.0 - t,
        }
    }

    /// Inverse of [`Orientation::ratio`].
    #[must_use]
    pub fn value_at(self, ratio: f64, offset: f64, range: f64) -> f64 {
        let t = match self {
            Self::Horizontal => ratio,
            Self::Vertical => 1.0 - ratio,
        };
        offset + t * range
    }

    /// Normalized segment spanning the full opposite extent at ratio `t`.
    ///
    /// Horizontal axes yield `[t,0] -> [t,1]`; vertical axes yield `[0,t] -> [1,t]`.
    #[must_use]
    pub fn segment(self, t: f64) -> Line {
        match self {
            Self::Horizontal => Line::new(Point::new(t, 0.0), Point::new(t, 1.0)),
            Self::Vertical => Line::new(Point::new(0.0, t), Point::new(1.0, t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_ratio_is_inverted() {
        let h = Orientation::Horizontal.ratio(25.0, 0.0, 100.0);
        let v = Orientation::Vertical.ratio(25.0, 0.0, 100.0);
        assert!((h - 0.25).abs() < 1e-12);
        assert!((v - 0.75).abs() < 1e-12);
    }

    #[test]
    fn value_at_inverts_ratio() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let r = orientation.ratio(-37.5, -100.0, 250.0);
            let v = orientation.value_at(r, -100.0, 250.0);
            assert!((v + 37.5).abs() < 1e-9, "{orientation:?} round trip gave {v}");
        }
    }

    #[test]
    fn segments_span_the_opposite_extent() {
        let x = Orientation::Horizontal.segment(0.3);
        assert_eq!(x.p0, Point::new(0.3, 0.0));
        assert_eq!(x.p1, Point::new(0.3, 1.0));

        let y = Orientation::Vertical.segment(0.3);
        assert_eq!(y.p0, Point::new(0.0, 0.3));
        assert_eq!(y.p1, Point::new(1.0, 0.3));
    }

    #[test]
    fn extent_and_opposite() {
        let shape = Size::new(800.0, 600.0);
        assert_eq!(Orientation::Horizontal.extent(shape), 800.0);
        assert_eq!(Orientation::Vertical.extent(shape), 600.0);
        assert_eq!(Orientation::Horizontal.opposite(), Orientation::Vertical);
    }
}
