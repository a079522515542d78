// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// Most decimals a default label will show.
const MAX_DECIMALS: usize = 12;

/// Formats `value` with just enough decimals to distinguish lines `step` apart.
///
/// Integral steps produce integers; a step of `0.25` produces two decimals.
/// Negative zero is printed as `0`.
#[must_use]
pub fn format_value(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let decimals = decimals_for_step(step);
    let out = format!("{value:.decimals$}");
    if out.starts_with('-') && out[1..].bytes().all(|b| b == b'0' || b == b'.') {
        return String::from(&out[1..]);
    }
    out
}

fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 || step >= 1.0 {
        return 0;
    }
    let mut decimals = 0;
    let mut scaled = step;
    // Count decimal places until the step is (nearly) integral.
    while decimals < MAX_DECIMALS && (scaled - libm::round(scaled)).abs() > 1e-9 * scaled.max(1.0)
    {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}
