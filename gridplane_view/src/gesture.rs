// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// One pan/zoom input record, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanZoomGesture {
    /// Horizontal pan delta.
    pub dx: f64,
    /// Vertical pan delta, positive downward.
    pub dy: f64,
    /// Zoom delta, wheel-like: positive zooms out.
    pub dz: f64,
    /// Anchor x, usually the pointer position.
    pub x0: f64,
    /// Anchor y, usually the pointer position.
    pub y0: f64,
    /// The gesture uses the alternate (pan) button.
    pub is_right: bool,
}

impl PanZoomGesture {
    /// A pure pan by `delta`.
    #[must_use]
    pub fn pan(delta: Vec2) -> Self {
        Self {
            dx: delta.x,
            dy: delta.y,
            ..Self::default()
        }
    }

    /// A pure zoom by `dz` anchored at `anchor`.
    #[must_use]
    pub fn zoom(dz: f64, anchor: Point) -> Self {
        Self {
            dz,
            x0: anchor.x,
            y0: anchor.y,
            ..Self::default()
        }
    }

    /// Sets the alternate-button flag.
    #[must_use]
    pub fn with_right_button(mut self, is_right: bool) -> Self {
        self.is_right = is_right;
        self
    }

    /// Pan delta as a vector.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// Anchor as a point.
    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// Returns `true` if every field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite()
            && self.dy.is_finite()
            && self.dz.is_finite()
            && self.x0.is_finite()
            && self.y0.is_finite()
    }
}
