// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use gridplane_axis::{AxisWindow, EPSILON, Orientation};
use kurbo::{Insets, Line, Point, Rect, Size, Vec2};
use peniko::Color;

/// Per-frame computed snapshot of one axis.
///
/// A coordinate state is a pure function of an [`Axis`](gridplane_axis::Axis)
/// and the canvas shape. It is recomputed on every update and never written
/// back into the axis.
///
/// `lines`, `line_colors`, `ticks`, `labels`, `coords`, `normals`,
/// `tick_coords` and `label_coords` are parallel: entry `i` of each describes
/// line `i`. Normalized coordinates are in `0..1` over the padded plot area,
/// with `y` growing downward.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateState {
    /// Axis orientation.
    pub orientation: Orientation,
    /// Canvas size in pixels.
    pub shape: Size,
    /// Visible span in value units.
    pub range: f64,
    /// Value at the start of the visible span.
    pub offset: f64,
    /// Value units per pixel.
    pub zoom: f64,
    /// Resolved padding in pixels.
    pub padding: Insets,
    /// Line values, in resolution order.
    pub lines: Vec<f64>,
    /// Line colors; `None` lines are not stroked.
    pub line_colors: Vec<Option<Color>>,
    /// Tick lengths in pixels; `None` lines have no tick.
    pub ticks: Vec<Option<f64>>,
    /// Label text; `None` lines have no label.
    pub labels: Vec<Option<String>>,
    /// Normalized line segments.
    pub coords: Vec<Line>,
    /// Unit direction of each segment; `None` for zero-length segments.
    pub normals: Vec<Option<Vec2>>,
    /// Normalized tick segments.
    pub tick_coords: Vec<Option<Line>>,
    /// Normalized label anchors, where each line meets the axis line.
    pub label_coords: Vec<Option<Point>>,
    /// Position of this axis's axis line across the opposite axis, in `0..1`.
    pub axis_ratio: f64,
    /// Axis line and tick color.
    pub axis_color: Option<Color>,
    /// Label color.
    pub label_color: Option<Color>,
    /// Grid line width in pixels.
    pub line_width: f64,
    /// Axis line width in pixels.
    pub axis_width: f64,
    /// Tick alignment in `0..1`.
    pub tick_align: f64,
    /// Label font size in pixels.
    pub font_size: f64,
    /// Whether the axis line is drawn.
    pub draw_axis: bool,
    /// Value at which the axis line crosses the opposite axis.
    pub axis_origin: f64,
}

impl CoordinateState {
    /// Number of resolved lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no lines were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The visible window this state was computed from.
    #[must_use]
    pub fn window(&self) -> AxisWindow {
        AxisWindow {
            orientation: self.orientation,
            shape: self.shape,
            range: self.range,
            offset: self.offset,
            zoom: self.zoom,
        }
    }

    /// Position of `value` in the visible span; see [`AxisWindow::ratio`].
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        self.window().ratio(value)
    }

    /// Value at `ratio` in the visible span.
    #[must_use]
    pub fn value_at(&self, ratio: f64) -> f64 {
        self.window().value_at(ratio)
    }

    /// Normalized segments for `values`.
    #[must_use]
    pub fn coords_for(&self, values: &[f64]) -> Vec<Line> {
        self.window().coords_for(values)
    }

    /// The padded plot area in pixels.
    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        let p = self.padding;
        let x0 = p.x0;
        let y0 = p.y0;
        let x1 = (self.shape.width - p.x1).max(x0);
        let y1 = (self.shape.height - p.y1).max(y0);
        Rect::new(x0, y0, x1, y1)
    }

    /// Plot area size with both sides clamped away from zero.
    ///
    /// Used as the denominator when converting pixel lengths to normalized ones.
    #[must_use]
    pub fn plot_extent(&self) -> Size {
        let rect = self.plot_rect();
        Size::new(rect.width().max(EPSILON), rect.height().max(EPSILON))
    }

    /// Converts a normalized point into pixels.
    #[must_use]
    pub fn to_pixel(&self, normalized: Point) -> Point {
        let rect = self.plot_rect();
        Point::new(
            rect.x0 + normalized.x * rect.width(),
            rect.y0 + normalized.y * rect.height(),
        )
    }

    /// Converts a normalized segment into pixels.
    #[must_use]
    pub fn line_to_pixels(&self, normalized: Line) -> Line {
        Line::new(self.to_pixel(normalized.p0), self.to_pixel(normalized.p1))
    }

    /// Checks that every per-line sequence has one entry per line.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.lines.len();
        self.line_colors.len() == n
            && self.ticks.len() == n
            && self.labels.len() == n
            && self.coords.len() == n
            && self.normals.len() == n
            && self.tick_coords.len() == n
            && self.label_coords.len() == n
    }
}
