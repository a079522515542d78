// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of an [`Axis`] configuration into per-line sequences.
//!
//! This covers everything about a coordinate state that depends only on its
//! own axis: padding, line values, colors, tick lengths, labels, normalized
//! segments and their normals. Placement against the opposite axis happens in
//! [`GridFrame`](crate::GridFrame).

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use gridplane_axis::scale::{auto_lines, auto_step};
use gridplane_axis::{
    Axis, AxisWindow, Diagnostic, DiagnosticSink, LabelSpec, LineColors, LineSequence, LineSpec,
    Orientation, Padding, TickSpec, format_value,
};
use kurbo::{Insets, Size};

use crate::CoordinateState;
use crate::geometry::normals_for;

/// Resolves `axis` against a canvas of `shape` pixels.
///
/// The returned state has its own-axis fields filled in. `tick_coords` and
/// `label_coords` are all `None` and `axis_ratio` is `0` until the state is
/// placed against its opposite axis.
pub fn resolve_state(axis: &Axis, shape: Size, sink: &mut dyn DiagnosticSink) -> CoordinateState {
    let window = axis.window(shape);
    let orientation = axis.orientation();
    let padding = resolve_padding(&axis.padding, &window, sink);

    let mut lines = resolve_lines(&axis.lines, axis, &window, sink);
    let step = label_step(axis, &window, &lines);
    let n = lines.len();

    let mut line_colors = match &axis.line_color {
        LineColors::Uniform(spec) => vec![spec.resolve(axis.color); n],
        LineColors::PerLine(colors) => {
            fit_to(colors.clone(), n, orientation, LineSequence::LineColors, sink)
        }
        LineColors::Computed(f) => {
            fit_to(f(&window, &lines), n, orientation, LineSequence::LineColors, sink)
        }
    };

    let mut ticks = match &axis.ticks {
        TickSpec::Off => vec![None; n],
        TickSpec::Auto => vec![Some(axis.axis_width * 2.0); n],
        TickSpec::Length(length) => vec![Some(*length); n],
        TickSpec::PerLine(lengths) => {
            fit_to(lengths.clone(), n, orientation, LineSequence::Ticks, sink)
        }
        TickSpec::Keyed(_) => vec![Some(0.0); n],
        TickSpec::Computed(f) => fit_to(f(&window, &lines), n, orientation, LineSequence::Ticks, sink),
    };

    let mut labels = match &axis.labels {
        LabelSpec::Off | LabelSpec::Keyed(_) => vec![None; n],
        LabelSpec::Values => lines
            .iter()
            .map(|&value| Some(format_label(axis, value, step)))
            .collect(),
        LabelSpec::PerLine(text) => fit_to(text.clone(), n, orientation, LineSequence::Labels, sink),
        LabelSpec::Computed(f) => {
            fit_to(f(&window, &lines), n, orientation, LineSequence::Labels, sink)
        }
    };

    // Keyed maps append their own lines after the base set, ticks first.
    if let TickSpec::Keyed(entries) = &axis.ticks {
        for (key, length) in entries {
            let Some(value) = parse_key(key, orientation, LineSequence::Ticks, sink) else {
                continue;
            };
            lines.push(value);
            line_colors.push(None);
            ticks.push(Some(*length));
            labels.push(None);
        }
    }
    if let LabelSpec::Keyed(entries) = &axis.labels {
        for (key, text) in entries {
            let Some(value) = parse_key(key, orientation, LineSequence::Labels, sink) else {
                continue;
            };
            lines.push(value);
            line_colors.push(None);
            ticks.push(None);
            labels.push(Some(text.clone()));
        }
    }

    let coords = window.coords_for(&lines);
    let normals = normals_for(&coords);
    let n = lines.len();

    CoordinateState {
        orientation,
        shape,
        range: window.range,
        offset: window.offset,
        zoom: window.zoom,
        padding,
        lines,
        line_colors,
        ticks,
        labels,
        coords,
        normals,
        tick_coords: vec![None; n],
        label_coords: vec![None; n],
        axis_ratio: 0.0,
        axis_color: axis.axis_color.resolve(axis.color),
        label_color: axis.label_color.resolve(axis.color),
        line_width: axis.line_width,
        axis_width: axis.axis_width,
        tick_align: clamp_unit(axis.tick_align),
        font_size: axis.font_size,
        draw_axis: axis.draw_axis,
        axis_origin: axis.axis_origin,
    }
}

/// Resolves padding to pixel insets, replacing invalid sides with zero.
pub fn resolve_padding(
    padding: &Padding,
    window: &AxisWindow,
    sink: &mut dyn DiagnosticSink,
) -> Insets {
    let raw = match padding {
        Padding::Uniform(v) => Insets::uniform(*v),
        Padding::Sides(sides) => Padding::sides_to_insets(*sides),
        Padding::Computed(f) => f(window),
    };
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if valid(raw.x0) && valid(raw.y0) && valid(raw.x1) && valid(raw.y1) {
        return raw;
    }
    sink.report(Diagnostic::InvalidPadding {
        orientation: window.orientation,
    });
    let fix = |v: f64| if valid(v) { v } else { 0.0 };
    Insets::new(fix(raw.x0), fix(raw.y0), fix(raw.x1), fix(raw.y1))
}

fn resolve_lines(
    spec: &LineSpec,
    axis: &Axis,
    window: &AxisWindow,
    sink: &mut dyn DiagnosticSink,
) -> Vec<f64> {
    let values = match spec {
        LineSpec::Off => return Vec::new(),
        LineSpec::Auto => return auto_lines(axis.scale, window, axis.distance),
        LineSpec::Values(values) => values.clone(),
        LineSpec::Computed(f) => f(window),
    };
    let mut lines = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        if value.is_finite() {
            lines.push(value);
        } else {
            sink.report(Diagnostic::NonFiniteLine {
                orientation: window.orientation,
                index,
            });
        }
    }
    lines
}

/// Spacing used to pick label precision.
///
/// Auto lines use the scale step; explicit lines use their smallest gap.
fn label_step(axis: &Axis, window: &AxisWindow, lines: &[f64]) -> f64 {
    let auto = auto_step(axis.scale, window, axis.distance);
    if matches!(axis.lines, LineSpec::Auto) {
        return auto;
    }
    lines
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .filter(|gap| *gap > 0.0)
        .reduce(f64::min)
        .unwrap_or(auto)
}

fn format_label(axis: &Axis, value: f64, step: f64) -> String {
    match &axis.format {
        Some(format) => format(value, step),
        None => format_value(value, step),
    }
}

fn fit_to<T: Clone>(
    mut values: Vec<Option<T>>,
    n: usize,
    orientation: Orientation,
    sequence: LineSequence,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Option<T>> {
    if values.len() != n {
        sink.report(Diagnostic::LengthMismatch {
            orientation,
            sequence,
            expected: n,
            found: values.len(),
        });
        values.resize(n, None);
    }
    values
}

fn parse_key(
    key: &str,
    orientation: Orientation,
    sequence: LineSequence,
    sink: &mut dyn DiagnosticSink,
) -> Option<f64> {
    match key.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            sink.report(Diagnostic::UnparsableKey {
                orientation,
                sequence,
                key: String::from(key),
            });
            None
        }
    }
}

fn clamp_unit(v: f64) -> f64 {
    // `max` first so NaN lands on 0.
    v.max(0.0).min(1.0)
}
