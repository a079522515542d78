// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-space drawing primitives and the renderer seam.
//!
//! [`GridFrame::primitives`] turns a frame into a flat list of
//! [`GridPrimitive`]s in canvas pixels. Backends implement [`GridRenderer`]
//! and receive them in paint order: grid lines, then axis lines and ticks,
//! then labels.

use alloc::string::String;
use alloc::vec::Vec;

use gridplane_axis::Orientation;
use kurbo::{Line, Point, Size};
use peniko::Color;

use crate::geometry::{clamp_soft, coincides_with_axis, flip_numeric_sign, label_indent, label_offset};
use crate::{CoordinateState, GridFrame, TextMeasurer};

/// One thing to draw, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum GridPrimitive {
    /// A grid line.
    GridLine {
        /// Axis the line belongs to.
        orientation: Orientation,
        /// Line value.
        value: f64,
        /// Segment in pixels.
        line: Line,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f64,
    },
    /// A tick on an axis line.
    Tick {
        /// Axis the tick belongs to.
        orientation: Orientation,
        /// Value of the line the tick marks.
        value: f64,
        /// Segment in pixels.
        line: Line,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f64,
    },
    /// An axis line.
    AxisLine {
        /// Axis the line belongs to.
        orientation: Orientation,
        /// Segment in pixels.
        line: Line,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f64,
    },
    /// A text label.
    Label {
        /// Axis the label belongs to.
        orientation: Orientation,
        /// Value of the labeled line.
        value: f64,
        /// Text to draw.
        text: String,
        /// Top-left corner of the text box in pixels.
        origin: Point,
        /// Fill color.
        color: Color,
        /// Font size in pixels.
        font_size: f64,
    },
}

/// Receives primitives for one frame.
pub trait GridRenderer {
    /// Called once before any primitive of a frame.
    fn begin_frame(&mut self, _shape: Size) {}

    /// Draws one primitive.
    fn draw(&mut self, primitive: &GridPrimitive);

    /// Called once after the last primitive of a frame.
    fn end_frame(&mut self) {}
}

impl GridRenderer for Vec<GridPrimitive> {
    fn begin_frame(&mut self, _shape: Size) {
        self.clear();
    }

    fn draw(&mut self, primitive: &GridPrimitive) {
        self.push(primitive.clone());
    }
}

impl GridFrame {
    /// Converts the frame into pixel-space primitives.
    ///
    /// Lines and ticks lying on the opposite axis's drawn axis line are left
    /// out, as are vertical-axis labels there. Labels are kept on-canvas.
    #[must_use]
    pub fn primitives(&self, measurer: &dyn TextMeasurer) -> Vec<GridPrimitive> {
        let mut out = Vec::new();
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            push_grid_lines(self.state(o), self.opposite(o), &mut out);
        }
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            self.push_axis(o, &mut out);
        }
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            push_labels(self.state(o), self.opposite(o), measurer, &mut out);
        }
        out
    }

    /// Draws the frame into `renderer`.
    pub fn render_into(&self, renderer: &mut dyn GridRenderer, measurer: &dyn TextMeasurer) {
        renderer.begin_frame(self.shape());
        for primitive in &self.primitives(measurer) {
            renderer.draw(primitive);
        }
        renderer.end_frame();
    }

    fn push_axis(&self, orientation: Orientation, out: &mut Vec<GridPrimitive>) {
        let state = self.state(orientation);
        let opposite = self.opposite(orientation);
        let Some(color) = state.axis_color else {
            return;
        };
        if state.draw_axis
            && let Some(line) = self.axis_line(orientation)
        {
            out.push(GridPrimitive::AxisLine {
                orientation,
                line: state.line_to_pixels(line),
                color,
                width: state.axis_width,
            });
        }
        for (i, tick) in state.tick_coords.iter().enumerate() {
            let Some(tick) = tick else { continue };
            let value = state.lines[i];
            if coincides_with_axis(value, opposite) {
                continue;
            }
            out.push(GridPrimitive::Tick {
                orientation,
                value,
                line: state.line_to_pixels(*tick),
                color,
                width: state.axis_width,
            });
        }
    }
}

fn push_grid_lines(
    state: &CoordinateState,
    opposite: &CoordinateState,
    out: &mut Vec<GridPrimitive>,
) {
    for (i, &value) in state.lines.iter().enumerate() {
        let Some(color) = state.line_colors[i] else {
            continue;
        };
        if coincides_with_axis(value, opposite) {
            continue;
        }
        out.push(GridPrimitive::GridLine {
            orientation: state.orientation,
            value,
            line: state.line_to_pixels(state.coords[i]),
            color,
            width: state.line_width,
        });
    }
}

fn push_labels(
    state: &CoordinateState,
    opposite: &CoordinateState,
    measurer: &dyn TextMeasurer,
    out: &mut Vec<GridPrimitive>,
) {
    let Some(color) = state.label_color else {
        return;
    };
    let rect = state.plot_rect();
    let indent = label_indent(state);
    let offset = label_offset(state);
    let shape = state.shape;

    for (i, label) in state.labels.iter().enumerate() {
        let (Some(text), Some(anchor)) = (label, state.label_coords[i]) else {
            continue;
        };
        let value = state.lines[i];
        if state.orientation == Orientation::Vertical && coincides_with_axis(value, opposite) {
            continue;
        }
        let size = measurer.measure(text, state.font_size);
        let left = rect.x0 + anchor.x * rect.width() + indent;
        let top = rect.y0 + anchor.y * rect.height() + offset;

        let (origin, text) = match state.orientation {
            Orientation::Horizontal => {
                let max = shape.height - size.height - 2.0 * state.axis_width;
                (Point::new(left, clamp_soft(top, 0.0, max)), text.clone())
            }
            Orientation::Vertical => {
                let clamped = clamp_soft(left, indent, shape.width - size.width - indent);
                let text = if clamped == left {
                    text.clone()
                } else {
                    flip_numeric_sign(text)
                };
                (Point::new(clamped, top), text)
            }
        };
        out.push(GridPrimitive::Label {
            orientation: state.orientation,
            value,
            text,
            origin,
            color,
            font_size: state.font_size,
        });
    }
}
