// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick, label and skip-rule geometry.

use alloc::string::String;
use alloc::vec::Vec;

use gridplane_axis::{Diagnostic, DiagnosticSink, EPSILON};
use kurbo::{Line, Point, Vec2};

use crate::CoordinateState;

/// Extra horizontal gap between the axis line and a label, in pixels.
pub const LABEL_GAP: f64 = 1.5;

/// Unit direction of each segment, `None` where the segment has no length.
#[must_use]
pub fn normals_for(coords: &[Line]) -> Vec<Option<Vec2>> {
    coords
        .iter()
        .map(|line| {
            let d = line.p1 - line.p0;
            let len = d.hypot();
            (len.is_finite() && len > 0.0).then(|| d / len)
        })
        .collect()
}

/// Places ticks and label anchors on `state`'s axis line.
///
/// `axis_ratio` is where the axis line sits across the opposite axis; it is
/// clamped into `0..1` so ticks stay on-canvas when the axis scrolls away.
/// Lines with no normal or with non-finite geometry get no tick and no label
/// anchor.
pub fn place_ticks(state: &mut CoordinateState, axis_ratio: f64, sink: &mut dyn DiagnosticSink) {
    let axis_ratio = axis_ratio.max(0.0).min(1.0);
    state.axis_ratio = axis_ratio;
    let extent = state.plot_extent();
    let align = state.tick_align;

    let n = state.lines.len();
    state.tick_coords.clear();
    state.label_coords.clear();
    for i in 0..n {
        let line = state.coords[i];
        let Some(normal) = state.normals[i] else {
            sink.report(Diagnostic::DegenerateLine {
                orientation: state.orientation,
                index: i,
            });
            state.tick_coords.push(None);
            state.label_coords.push(None);
            continue;
        };
        let anchor = line.p0 + (line.p1 - line.p0) * axis_ratio;
        let tick = state.ticks[i].map(|length| {
            let t = Vec2::new(
                normal.x * length / extent.width,
                normal.y * length / extent.height,
            );
            Line::new(anchor + t * align, anchor - t * (1.0 - align))
        });
        let finite = |p: Point| p.is_finite();
        if !finite(anchor) || tick.is_some_and(|t| !(finite(t.p0) && finite(t.p1))) {
            sink.report(Diagnostic::DegenerateLine {
                orientation: state.orientation,
                index: i,
            });
            state.tick_coords.push(None);
            state.label_coords.push(None);
            continue;
        }
        state.tick_coords.push(tick);
        state.label_coords.push(Some(anchor));
    }
}

/// Returns `true` if `a` and `b` are equal within a relative epsilon.
#[must_use]
pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Returns `true` if line `value` of one axis should be hidden because it
/// lies on the axis line drawn by `opposite`.
#[must_use]
pub fn coincides_with_axis(value: f64, opposite: &CoordinateState) -> bool {
    opposite.draw_axis && almost_equal(value, opposite.axis_origin)
}

/// Vertical pixel shift from a label anchor to the label's top edge.
#[must_use]
pub fn label_offset(state: &CoordinateState) -> f64 {
    if state.tick_align < 0.5 {
        -(state.font_size + 2.0 * state.axis_width)
    } else {
        2.0 * state.axis_width
    }
}

/// Horizontal pixel shift from a label anchor to the label's left edge.
#[must_use]
pub fn label_indent(state: &CoordinateState) -> f64 {
    state.axis_width + LABEL_GAP
}

/// Clamps `v` into `lo..=hi`, preferring `lo` when the range is empty.
#[must_use]
pub fn clamp_soft(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

/// Flips the sign of a numeric label; other text is returned unchanged.
///
/// Zero stays unsigned.
#[must_use]
pub fn flip_numeric_sign(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => match trimmed.strip_prefix('-') {
            Some(rest) => String::from(rest),
            None => {
                let mut out = String::with_capacity(trimmed.len() + 1);
                out.push('-');
                out.push_str(trimmed.strip_prefix('+').unwrap_or(trimmed));
                out
            }
        },
        _ => String::from(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_state;
    use alloc::vec;
    use gridplane_axis::{Axis, DiagnosticLog, LineSpec, NoDiagnostics, TickSpec};
    use kurbo::Size;

    #[test]
    fn normals_are_unit_directions() {
        let normals = normals_for(&[
            Line::new((0.25, 0.0), (0.25, 1.0)),
            Line::new((0.0, 0.5), (1.0, 0.5)),
            Line::new((0.3, 0.3), (0.3, 0.3)),
        ]);
        assert_eq!(normals[0], Some(Vec2::new(0.0, 1.0)));
        assert_eq!(normals[1], Some(Vec2::new(1.0, 0.0)));
        assert_eq!(normals[2], None);
    }

    #[test]
    fn ticks_straddle_the_axis_line() {
        let axis = Axis::horizontal()
            .with_lines(LineSpec::Values(vec![0.0]))
            .with_ticks(TickSpec::Length(60.0));
        let mut state = resolve_state(&axis, Size::new(800.0, 600.0), &mut NoDiagnostics);
        place_ticks(&mut state, 0.5, &mut NoDiagnostics);

        let tick = state.tick_coords[0].expect("tick");
        // 60px over a 600px plot height, split evenly around y = 0.5.
        assert!((tick.p0.y - 0.55).abs() < 1e-12);
        assert!((tick.p1.y - 0.45).abs() < 1e-12);
        assert_eq!(tick.p0.x, 0.5);
        assert_eq!(state.label_coords[0], Some(Point::new(0.5, 0.5)));
    }

    #[test]
    fn tick_align_moves_the_tick_to_one_side() {
        let axis = Axis::vertical()
            .with_lines(LineSpec::Values(vec![0.0]))
            .with_ticks(TickSpec::Length(80.0))
            .with_tick_align(0.0);
        let mut state = resolve_state(&axis, Size::new(800.0, 600.0), &mut NoDiagnostics);
        place_ticks(&mut state, 0.25, &mut NoDiagnostics);

        let tick = state.tick_coords[0].expect("tick");
        assert_eq!(tick.p0.x, 0.25);
        assert!((tick.p1.x - 0.15).abs() < 1e-12);
    }

    #[test]
    fn axis_ratio_is_clamped() {
        let axis = Axis::horizontal().with_lines(LineSpec::Values(vec![0.0]));
        let mut state = resolve_state(&axis, Size::new(800.0, 600.0), &mut NoDiagnostics);
        place_ticks(&mut state, 7.0, &mut NoDiagnostics);
        assert_eq!(state.axis_ratio, 1.0);
        place_ticks(&mut state, f64::NAN, &mut NoDiagnostics);
        assert_eq!(state.axis_ratio, 0.0);
    }

    #[test]
    fn zero_sized_canvas_keeps_ticks_finite() {
        let axis = Axis::horizontal().with_lines(LineSpec::Values(vec![0.0, 1.0]));
        let mut state = resolve_state(&axis, Size::ZERO, &mut NoDiagnostics);
        let mut log = DiagnosticLog::new();
        place_ticks(&mut state, 0.5, &mut log);
        assert!(state.is_consistent());
        // Ticks divide by the plot extent, which is clamped away from zero.
        assert!(state.tick_coords.iter().all(|t| t.is_some()));
        assert!(log.is_empty());
    }

    #[test]
    fn almost_equal_is_relative() {
        assert!(almost_equal(0.0, 1e-12));
        assert!(!almost_equal(0.0, 1e-6));
        assert!(almost_equal(1e12, 1e12 + 1.0));
    }

    #[test]
    fn label_offset_depends_on_alignment() {
        let mut state = resolve_state(
            &Axis::horizontal(),
            Size::new(100.0, 100.0),
            &mut NoDiagnostics,
        );
        state.font_size = 10.0;
        state.axis_width = 2.0;
        state.tick_align = 0.2;
        assert_eq!(label_offset(&state), -14.0);
        state.tick_align = 0.5;
        assert_eq!(label_offset(&state), 4.0);
        assert_eq!(label_indent(&state), 3.5);
    }

    #[test]
    fn numeric_labels_flip_sign() {
        assert_eq!(flip_numeric_sign("20"), "-20");
        assert_eq!(flip_numeric_sign("-0.5"), "0.5");
        assert_eq!(flip_numeric_sign("0"), "0");
        assert_eq!(flip_numeric_sign("north"), "north");
    }

    #[test]
    fn clamp_soft_prefers_the_lower_bound() {
        assert_eq!(clamp_soft(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_soft(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp_soft(5.0, 8.0, 2.0), 8.0);
    }
}
