// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Line, Size};
use peniko::Color;
use peniko::color::palette::css;

use crate::orientation::Orientation;
use crate::policy::{
    AxisScale, ColorSpec, LabelFormatter, LabelSpec, LineColors, LineSpec, Padding, TickSpec,
};

/// Smallest range or extent used as a denominator.
pub const EPSILON: f64 = 1e-9;

/// Finite stand-in for unbounded axis limits.
///
/// Infinite bounds are replaced by this value before any clamping arithmetic
/// so that no infinity reaches a subtraction or division.
pub const UNBOUNDED: f64 = f64::MAX / 4.0;

/// Points per CSS pixel ratio used for the default `11pt` label font.
const PX_PER_PT: f64 = 96.0 / 72.0;

/// Configuration and scroll state for one coordinate direction.
///
/// An `Axis` is long lived: it is built once per map and its `offset` and
/// `zoom` are updated from the viewport every frame. Everything per-frame is
/// derived from it through [`Axis::window`] and the grid engine; nothing
/// derived is ever written back.
///
/// `offset` is the value at the center of the view, `zoom` is value units per
/// pixel. Both are clamped on write so that `min <= offset <= max` for finite
/// bounds and `zoom > 0`.
#[derive(Clone)]
pub struct Axis {
    orientation: Orientation,
    offset: f64,
    zoom: f64,
    min: f64,
    max: f64,
    /// Scale kind used for automatic line values.
    pub scale: AxisScale,
    /// Pixel padding around the plot area.
    pub padding: Padding,
    /// Values at which grid lines are drawn.
    pub lines: LineSpec,
    /// Tick lengths.
    pub ticks: TickSpec,
    /// Label text.
    pub labels: LabelSpec,
    /// Where ticks sit relative to their line.
    ///
    /// `0` puts the tick fully on one side, `1` fully on the other and `0.5`
    /// centers it. Values outside `[0, 1]` are clamped during resolution.
    pub tick_align: f64,
    /// Base color for alpha-blended paints.
    pub color: Color,
    /// Grid line colors.
    pub line_color: LineColors,
    /// Paint of the axis line and the ticks.
    pub axis_color: ColorSpec,
    /// Paint of the labels.
    pub label_color: ColorSpec,
    /// Grid line width in pixels.
    pub line_width: f64,
    /// Axis line width in pixels.
    pub axis_width: f64,
    /// Whether the axis line itself is drawn.
    ///
    /// While it is, the opposite axis suppresses its own grid line at
    /// [`Axis::axis_origin`] to avoid drawing it twice.
    pub draw_axis: bool,
    /// Value at which this axis's axis line crosses the opposite axis.
    pub axis_origin: f64,
    /// Label font size in pixels.
    pub font_size: f64,
    /// Minimum pixel spacing between automatically derived lines.
    pub distance: f64,
    /// Label formatter used by [`LabelSpec::Values`].
    ///
    /// When `None`, values are formatted with just enough decimals for the
    /// line step.
    pub format: Option<LabelFormatter>,
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("orientation", &self.orientation)
            .field("offset", &self.offset)
            .field("zoom", &self.zoom)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("scale", &self.scale)
            .field("padding", &self.padding)
            .field("lines", &self.lines)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("tick_align", &self.tick_align)
            .field("color", &self.color)
            .field("line_color", &self.line_color)
            .field("axis_color", &self.axis_color)
            .field("label_color", &self.label_color)
            .field("line_width", &self.line_width)
            .field("axis_width", &self.axis_width)
            .field("draw_axis", &self.draw_axis)
            .field("axis_origin", &self.axis_origin)
            .field("font_size", &self.font_size)
            .field("distance", &self.distance)
            .field(
                "format",
                &match self.format {
                    Some(_) => format_args!("Some(..)"),
                    None => format_args!("None"),
                },
            )
            .finish()
    }
}

impl Axis {
    /// Creates an axis with the default configuration.
    ///
    /// - Unbounded, centered on `0`, one value unit per pixel.
    /// - Automatic lines at least `13` pixels apart, automatic ticks, no labels.
    /// - Blue styling: lines at 40% alpha, axis at 80% alpha, `11pt` labels.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            offset: 0.0,
            zoom: 1.0,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            scale: AxisScale::Linear,
            padding: Padding::default(),
            lines: LineSpec::Auto,
            ticks: TickSpec::Auto,
            labels: LabelSpec::Off,
            tick_align: 0.5,
            color: css::BLUE,
            line_color: LineColors::default(),
            axis_color: ColorSpec::Alpha(0.8),
            label_color: ColorSpec::Base,
            line_width: 1.0,
            axis_width: 2.0,
            draw_axis: true,
            axis_origin: 0.0,
            font_size: 11.0 * PX_PER_PT,
            distance: 13.0,
            format: None,
        }
    }

    /// Shorthand for a horizontal (X) axis.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Shorthand for a vertical (Y) axis.
    #[must_use]
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Returns the axis orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the value at the center of the view.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the zoom in value units per pixel.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the lower value bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper value bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the value bounds, normalizing them so that `min <= max`.
    ///
    /// NaN bounds are treated as unbounded. The current offset is clamped into
    /// the new bounds.
    pub fn set_bounds(&mut self, min: f64, max: f64) {
        let min = if min.is_nan() { f64::NEG_INFINITY } else { min };
        let max = if max.is_nan() { f64::INFINITY } else { max };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min = min;
        self.max = max;
        self.set_offset(self.offset);
    }

    /// Sets the value at the center of the view, clamped into the bounds.
    ///
    /// Returns the applied offset. Non-finite offsets are ignored.
    pub fn set_offset(&mut self, offset: f64) -> f64 {
        if offset.is_finite() {
            self.offset = offset.max(self.min).min(self.max);
        }
        self.offset
    }

    /// Sets the zoom in value units per pixel.
    ///
    /// Non-positive or non-finite zooms are ignored. Returns the applied zoom.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
        self.zoom
    }

    /// Builder form of [`Axis::set_bounds`].
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.set_bounds(min, max);
        self
    }

    /// Builder form of [`Axis::set_offset`].
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.set_offset(offset);
        self
    }

    /// Builder form of [`Axis::set_zoom`].
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.set_zoom(zoom);
        self
    }

    /// Sets the line policy.
    #[must_use]
    pub fn with_lines(mut self, lines: LineSpec) -> Self {
        self.lines = lines;
        self
    }

    /// Sets the tick policy.
    #[must_use]
    pub fn with_ticks(mut self, ticks: TickSpec) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the label policy.
    #[must_use]
    pub fn with_labels(mut self, labels: LabelSpec) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the tick alignment.
    #[must_use]
    pub fn with_tick_align(mut self, tick_align: f64) -> Self {
        self.tick_align = tick_align;
        self
    }

    /// Sets the value at which the axis line is drawn.
    #[must_use]
    pub fn with_axis_origin(mut self, axis_origin: f64) -> Self {
        self.axis_origin = axis_origin;
        self
    }

    /// Sets the label formatter.
    #[must_use]
    pub fn with_format(mut self, format: LabelFormatter) -> Self {
        self.format = Some(format);
        self
    }

    /// Computes the visible window for a canvas of `shape` pixels.
    ///
    /// `range` is the pixel extent along this axis times `zoom`, clamped away
    /// from zero. `offset` is the window start, `zoom`-centered on the axis
    /// offset and clamped into the finite form of the bounds.
    #[must_use]
    pub fn window(&self, shape: Size) -> AxisWindow {
        let range = (self.orientation.extent(shape) * self.zoom).max(EPSILON);
        let lo = self.min.max(-UNBOUNDED);
        let hi = self.max.min(UNBOUNDED);
        let offset = (self.offset - range * 0.5).max(lo).min(hi);
        AxisWindow {
            orientation: self.orientation,
            shape,
            range,
            offset,
            zoom: self.zoom,
        }
    }

    /// Ratio of `value` within `window`; see [`AxisWindow::ratio`].
    #[must_use]
    pub fn ratio(&self, value: f64, window: &AxisWindow) -> f64 {
        debug_assert_eq!(window.orientation, self.orientation, "window from another axis");
        window.ratio(value)
    }

    /// Normalized line segments for `values`; see [`AxisWindow::coords_for`].
    #[must_use]
    pub fn coords_for(&self, values: &[f64], window: &AxisWindow) -> Vec<Line> {
        debug_assert_eq!(window.orientation, self.orientation, "window from another axis");
        window.coords_for(values)
    }
}

/// The visible span of an axis for one frame.
///
/// This is the part of a coordinate state that depends only on the axis and
/// the canvas shape. It is handed to configuration callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    /// Orientation of the axis this window belongs to.
    pub orientation: Orientation,
    /// Canvas size in pixels.
    pub shape: Size,
    /// Visible span in value units, never below [`EPSILON`].
    pub range: f64,
    /// Value at the start of the visible span.
    pub offset: f64,
    /// Value units per pixel.
    pub zoom: f64,
}

impl AxisWindow {
    /// Position of `value` within the visible span, `0..1` when visible.
    ///
    /// Vertical windows are inverted so that `0` is the top of the canvas.
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        self.orientation.ratio(value, self.offset, self.range)
    }

    /// Value at `ratio` within the visible span.
    #[must_use]
    pub fn value_at(&self, ratio: f64) -> f64 {
        self.orientation.value_at(ratio, self.offset, self.range)
    }

    /// Value at the end of the visible span.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.offset + self.range
    }

    /// Returns `true` if `value` lies within the visible span.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.offset && value <= self.end()
    }

    /// Maps each value to its normalized line segment.
    ///
    /// Horizontal windows produce vertical segments spanning the full height,
    /// vertical windows produce horizontal segments spanning the full width.
    #[must_use]
    pub fn coords_for(&self, values: &[f64]) -> Vec<Line> {
        values
            .iter()
            .map(|&value| self.orientation.segment(self.ratio(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::sync::Arc;

    #[test]
    fn debug_elides_the_label_formatter() {
        let axis =
            Axis::horizontal().with_format(Arc::new(|v: f64, _: f64| alloc::format!("{v}")));
        let text = alloc::format!("{axis:?}");
        assert!(text.contains("format: Some(..)"), "{text}");
        assert!(text.contains("orientation: Horizontal"), "{text}");
        let plain = alloc::format!("{:?}", Axis::vertical());
        assert!(plain.contains("format: None"), "{plain}");
    }

    #[test]
    fn defaults_match_documented_configuration() {
        let axis = Axis::horizontal();
        assert_eq!(axis.offset(), 0.0);
        assert_eq!(axis.zoom(), 1.0);
        assert_eq!(axis.min(), f64::NEG_INFINITY);
        assert_eq!(axis.max(), f64::INFINITY);
        assert_eq!(axis.tick_align, 0.5);
        assert!(axis.draw_axis);
        assert!(matches!(axis.lines, LineSpec::Auto));
        assert!(matches!(axis.ticks, TickSpec::Auto));
        assert!(matches!(axis.labels, LabelSpec::Off));
        assert!((axis.font_size - 14.666_666).abs() < 1e-3);
    }

    #[test]
    fn offset_is_clamped_into_bounds() {
        let mut axis = Axis::horizontal().with_bounds(-10.0, 10.0);
        assert_eq!(axis.set_offset(50.0), 10.0);
        assert_eq!(axis.set_offset(-50.0), -10.0);
        assert_eq!(axis.set_offset(f64::NAN), -10.0);

        // Tightening the bounds re-clamps the current offset.
        axis.set_bounds(0.0, 5.0);
        assert_eq!(axis.offset(), 0.0);
    }

    #[test]
    fn reversed_bounds_are_normalized() {
        let axis = Axis::vertical().with_bounds(10.0, -10.0);
        assert_eq!(axis.min(), -10.0);
        assert_eq!(axis.max(), 10.0);
    }

    #[test]
    fn zoom_stays_positive() {
        let mut axis = Axis::horizontal();
        assert_eq!(axis.set_zoom(0.0), 1.0);
        assert_eq!(axis.set_zoom(-2.0), 1.0);
        assert_eq!(axis.set_zoom(f64::INFINITY), 1.0);
        assert_eq!(axis.set_zoom(0.5), 0.5);
    }

    #[test]
    fn window_centers_on_offset() {
        let axis = Axis::horizontal().with_offset(100.0).with_zoom(0.5);
        let window = axis.window(Size::new(800.0, 600.0));
        assert_eq!(window.range, 400.0);
        assert_eq!(window.offset, -100.0);
        assert!((window.ratio(100.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn window_uses_the_axis_extent() {
        let axis = Axis::vertical();
        let window = axis.window(Size::new(800.0, 600.0));
        assert_eq!(window.range, 600.0);
        assert_eq!(window.offset, -300.0);
        // Value zero sits at the vertical middle; larger values go up.
        assert!((window.ratio(0.0) - 0.5).abs() < 1e-12);
        assert!(window.ratio(100.0) < 0.5);
    }

    #[test]
    fn window_start_is_clamped_by_finite_bounds() {
        let axis = Axis::horizontal().with_bounds(0.0, 1000.0);
        let window = axis.window(Size::new(800.0, 600.0));
        assert_eq!(window.offset, 0.0);
    }

    #[test]
    fn unbounded_window_has_finite_arithmetic() {
        let axis = Axis::horizontal().with_offset(1e12);
        let window = axis.window(Size::new(10.0, 10.0));
        assert!(window.offset.is_finite());
        assert!(window.ratio(1e12).is_finite());
    }

    #[test]
    fn zero_area_canvas_keeps_a_positive_range() {
        let axis = Axis::horizontal();
        let window = axis.window(Size::ZERO);
        assert_eq!(window.range, EPSILON);
        assert!(window.ratio(1.0).is_finite());
    }

    #[test]
    fn coords_follow_orientation() {
        let axis = Axis::horizontal();
        let window = axis.window(Size::new(100.0, 100.0));
        let coords = axis.coords_for(&[0.0, 25.0], &window);
        assert_eq!(coords.len(), 2);
        assert!((coords[0].p0.x - 0.5).abs() < 1e-12);
        assert_eq!(coords[0].p0.y, 0.0);
        assert_eq!(coords[0].p1.y, 1.0);
        assert!((coords[1].p0.x - 0.75).abs() < 1e-12);
    }
}
