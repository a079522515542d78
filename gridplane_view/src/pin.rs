// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner pinning.
//!
//! A pinned viewport keeps the value origin a fixed `margin` pixels from one
//! corner of the canvas at every zoom, instead of following the viewport
//! center.

use kurbo::{Point, Size};

/// A canvas corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl Corner {
    /// All four corners, clockwise from the top-left.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Returns `true` for the right-hand corners.
    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Returns `true` for the top corners.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Axis offset that puts the value origin `margin` pixels from one edge.
///
/// `extent` is the canvas size along the axis in pixels and `zoom` is
/// magnification (pixels per value unit). `far_edge` selects the high-value
/// end of the axis: the right edge horizontally, the top edge vertically.
#[must_use]
pub fn pinned_offset(extent: f64, zoom: f64, margin: f64, far_edge: bool) -> f64 {
    let offset = extent / (2.0 * zoom) - margin / zoom;
    if far_edge { -offset } else { offset }
}

/// Viewport center, in value units, that pins the origin to `corner`.
#[must_use]
pub fn pinned_center(size: Size, zoom: f64, margin: f64, corner: Corner) -> Point {
    Point::new(
        pinned_offset(size.width, zoom, margin, corner.is_right()),
        pinned_offset(size.height, zoom, margin, corner.is_top()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_right_pin_is_negative_horizontally() {
        assert_eq!(pinned_offset(800.0, 2.0, 10.0, Corner::BottomRight.is_right()), -195.0);
    }

    #[test]
    fn near_edges_are_positive() {
        let c = pinned_center(Size::new(800.0, 600.0), 1.0, 10.0, Corner::BottomLeft);
        assert_eq!(c, Point::new(390.0, 290.0));
    }

    #[test]
    fn far_edges_mirror_near_edges() {
        let size = Size::new(640.0, 480.0);
        let near = pinned_center(size, 4.0, 12.0, Corner::BottomLeft);
        let far = pinned_center(size, 4.0, 12.0, Corner::TopRight);
        assert_eq!(far, Point::new(-near.x, -near.y));
    }

    #[test]
    fn origin_lands_margin_pixels_from_the_corner() {
        // With center c and zoom z, value 0 sits at width / 2 - c.x * z pixels.
        let size = Size::new(800.0, 600.0);
        let zoom = 2.5;
        for corner in Corner::ALL {
            let c = pinned_center(size, zoom, 10.0, corner);
            let px = size.width / 2.0 - c.x * zoom;
            let py = size.height / 2.0 + c.y * zoom;
            let want_x = if corner.is_right() { size.width - 10.0 } else { 10.0 };
            let want_y = if corner.is_top() { 10.0 } else { size.height - 10.0 };
            assert!((px - want_x).abs() < 1e-9, "{corner:?}: x {px}");
            assert!((py - want_y).abs() < 1e-9, "{corner:?}: y {py}");
        }
    }
}
