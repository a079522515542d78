// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Automatic line placement.

use alloc::vec::Vec;

use crate::AxisWindow;
use crate::policy::AxisScale;

/// Upper bound on the number of automatically derived lines per axis.
pub const MAX_AUTO_LINES: usize = 10_000;

/// Returns the smallest step on the 1-2-5 ladder that is `>= desired`.
///
/// Non-finite or non-positive inputs yield `0.0`.
#[must_use]
pub fn nice_step(desired: f64) -> f64 {
    if !desired.is_finite() || desired <= 0.0 {
        return 0.0;
    }
    let unit = libm::pow(10.0, libm::floor(libm::log10(desired)));
    for m in [1.0_f64, 2.0, 5.0, 10.0] {
        let step = m * unit;
        if step >= desired {
            return step;
        }
    }
    10.0 * unit
}

/// Line spacing, in value units, for a window and minimum pixel distance.
#[must_use]
pub fn auto_step(scale: AxisScale, window: &AxisWindow, distance: f64) -> f64 {
    match scale {
        AxisScale::Linear => nice_step(window.zoom * distance.max(1.0)),
    }
}

/// Derives line values covering `window`, at least `distance` pixels apart.
///
/// Values are multiples of [`auto_step`] in increasing order. At most
/// [`MAX_AUTO_LINES`] values are produced.
#[must_use]
pub fn auto_lines(scale: AxisScale, window: &AxisWindow, distance: f64) -> Vec<f64> {
    let step = auto_step(scale, window, distance);
    if step <= 0.0 || !window.offset.is_finite() {
        return Vec::new();
    }
    let first = libm::ceil(window.offset / step);
    let last = libm::floor(window.end() / step);
    if !(first.is_finite() && last.is_finite()) || last < first {
        return Vec::new();
    }
    let count = last - first + 1.0;
    if count > MAX_AUTO_LINES as f64 {
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by the finite and MAX_AUTO_LINES checks above"
    )]
    let count = count as usize;
    (0..count)
        .map(|i| {
            let value = (first + i as f64) * step;
            // Avoid `-0` showing up as a distinct line value.
            if value == 0.0 { 0.0 } else { value }
        })
        .collect()
}
