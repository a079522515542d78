// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use gridplane_axis::{Axis, DiagnosticSink, NoDiagnostics, Orientation};
use kurbo::{Line, Point, Size};

use crate::CoordinateState;
use crate::geometry::place_ticks;
use crate::resolve::resolve_state;

/// Both coordinate states of one frame.
///
/// Each state is placed against the other: a state's ticks and labels sit on
/// its axis line, whose position comes from the opposite state.
#[derive(Clone, Debug, PartialEq)]
pub struct GridFrame {
    /// The horizontal axis state (vertical grid lines).
    pub x: CoordinateState,
    /// The vertical axis state (horizontal grid lines).
    pub y: CoordinateState,
}

impl GridFrame {
    /// Computes a frame for a canvas of `shape` pixels.
    ///
    /// `x_axis` should be horizontal and `y_axis` vertical.
    #[must_use]
    pub fn compute(x_axis: &Axis, y_axis: &Axis, shape: Size) -> Self {
        Self::compute_with_diagnostics(x_axis, y_axis, shape, &mut NoDiagnostics)
    }

    /// Like [`GridFrame::compute`], reporting recovered problems to `sink`.
    pub fn compute_with_diagnostics(
        x_axis: &Axis,
        y_axis: &Axis,
        shape: Size,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let mut x = resolve_state(x_axis, shape, sink);
        let mut y = resolve_state(y_axis, shape, sink);
        let x_ratio = y.ratio(x.axis_origin);
        let y_ratio = x.ratio(y.axis_origin);
        place_ticks(&mut x, x_ratio, sink);
        place_ticks(&mut y, y_ratio, sink);
        Self { x, y }
    }

    /// Canvas size the frame was computed for.
    #[must_use]
    pub fn shape(&self) -> Size {
        self.x.shape
    }

    /// The state with the given orientation.
    #[must_use]
    pub fn state(&self, orientation: Orientation) -> &CoordinateState {
        match orientation {
            Orientation::Horizontal => &self.x,
            Orientation::Vertical => &self.y,
        }
    }

    /// The state opposite to `orientation`.
    #[must_use]
    pub fn opposite(&self, orientation: Orientation) -> &CoordinateState {
        self.state(orientation.opposite())
    }

    /// Normalized axis line of the `orientation` state, if it is on-canvas.
    ///
    /// The axis line runs perpendicular to the state's grid lines, at the
    /// state's `axis_origin` measured along the opposite axis.
    #[must_use]
    pub fn axis_line(&self, orientation: Orientation) -> Option<Line> {
        let state = self.state(orientation);
        let opposite = self.opposite(orientation);
        let t = opposite.ratio(state.axis_origin);
        (t.is_finite() && (0.0..=1.0).contains(&t)).then(|| opposite.orientation.segment(t))
    }

    /// Pixel position where the two axis lines cross.
    ///
    /// The point may lie off-canvas when an axis origin is scrolled away.
    #[must_use]
    pub fn origin_pixel(&self) -> Point {
        let x = self.y.to_pixel(Point::new(self.x.ratio(self.y.axis_origin), 0.0)).x;
        let y = self.x.to_pixel(Point::new(0.0, self.y.ratio(self.x.axis_origin))).y;
        Point::new(x, y)
    }

    /// Values of the `orientation` state's lines visible in the window.
    #[must_use]
    pub fn visible_lines(&self, orientation: Orientation) -> Vec<f64> {
        let window = self.state(orientation).window();
        self.state(orientation)
            .lines
            .iter()
            .copied()
            .filter(|v| window.contains(*v))
            .collect()
    }
}
