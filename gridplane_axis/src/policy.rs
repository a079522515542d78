// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration shapes for the per-line policies of an [`Axis`](crate::Axis).
//!
//! Each policy can be switched off, derived automatically, given literally
//! (positionally or keyed by value), or computed from the in-progress
//! [`AxisWindow`]. Resolving these into parallel per-line sequences is the job
//! of the grid engine; this module only describes them.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Insets;
use peniko::Color;

use crate::AxisWindow;

/// Computes padding from the in-progress window.
pub type PaddingFn = Arc<dyn Fn(&AxisWindow) -> Insets + Send + Sync>;

/// Computes line values from the in-progress window.
pub type LinesFn = Arc<dyn Fn(&AxisWindow) -> Vec<f64> + Send + Sync>;

/// Computes one optional tick length (pixels) per resolved line.
pub type TicksFn = Arc<dyn Fn(&AxisWindow, &[f64]) -> Vec<Option<f64>> + Send + Sync>;

/// Computes one optional label per resolved line.
pub type LabelsFn = Arc<dyn Fn(&AxisWindow, &[f64]) -> Vec<Option<String>> + Send + Sync>;

/// Computes one optional color per resolved line.
pub type LineColorsFn = Arc<dyn Fn(&AxisWindow, &[f64]) -> Vec<Option<Color>> + Send + Sync>;

/// Formats a label for `(value, step)`, where `step` is the best-effort line spacing.
pub type LabelFormatter = Arc<dyn Fn(f64, f64) -> String + Send + Sync>;

/// Axis scale kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum AxisScale {
    /// Evenly spaced values on a 1-2-5 step ladder.
    #[default]
    Linear,
}

/// Pixel padding around the plot area.
#[derive(Clone)]
pub enum Padding {
    /// The same padding on all four sides.
    Uniform(f64),
    /// Per-side padding in `[top, right, bottom, left]` order.
    Sides([f64; 4]),
    /// Padding computed from the in-progress window.
    Computed(PaddingFn),
}

impl Padding {
    /// Builds [`Insets`] from `[top, right, bottom, left]`.
    #[must_use]
    pub fn sides_to_insets(sides: [f64; 4]) -> Insets {
        let [top, right, bottom, left] = sides;
        Insets::new(left, top, right, bottom)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl fmt::Debug for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform(v) => f.debug_tuple("Uniform").field(v).finish(),
            Self::Sides(s) => f.debug_tuple("Sides").field(s).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Which values grid lines are drawn at.
#[derive(Clone, Default)]
pub enum LineSpec {
    /// No lines.
    Off,
    /// Derive line values from the axis scale and the visible window.
    #[default]
    Auto,
    /// Literal values, drawn in the given order.
    Values(Vec<f64>),
    /// Values computed from the in-progress window.
    Computed(LinesFn),
}

impl fmt::Debug for LineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("Off"),
            Self::Auto => f.write_str("Auto"),
            Self::Values(v) => f.debug_tuple("Values").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Tick lengths in pixels.
#[derive(Clone, Default)]
pub enum TickSpec {
    /// No ticks.
    Off,
    /// Every line gets a tick of `axis_width * 2`.
    #[default]
    Auto,
    /// Every line gets a tick of this many pixels.
    Length(f64),
    /// One optional length per line, positionally.
    PerLine(Vec<Option<f64>>),
    /// Extra ticks keyed by value.
    ///
    /// Keys are parsed as numbers and appended to the line set; existing
    /// lines get a zero-length tick.
    Keyed(Vec<(String, f64)>),
    /// Lengths computed per resolved line.
    Computed(TicksFn),
}

impl fmt::Debug for TickSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("Off"),
            Self::Auto => f.write_str("Auto"),
            Self::Length(v) => f.debug_tuple("Length").field(v).finish(),
            Self::PerLine(v) => f.debug_tuple("PerLine").field(v).finish(),
            Self::Keyed(v) => f.debug_tuple("Keyed").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Label text per line.
#[derive(Clone, Default)]
pub enum LabelSpec {
    /// No labels.
    #[default]
    Off,
    /// Every line is labeled with its formatted value.
    Values,
    /// One optional label per line, positionally.
    PerLine(Vec<Option<String>>),
    /// Extra labels keyed by value.
    ///
    /// Keys are parsed as numbers and appended to the line set; existing
    /// lines stay unlabeled.
    Keyed(Vec<(String, String)>),
    /// Labels computed per resolved line.
    Computed(LabelsFn),
}

impl fmt::Debug for LabelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("Off"),
            Self::Values => f.write_str("Values"),
            Self::PerLine(v) => f.debug_tuple("PerLine").field(v).finish(),
            Self::Keyed(v) => f.debug_tuple("Keyed").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A single paint derived from the axis base color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSpec {
    /// Not painted.
    Off,
    /// The axis base color, unchanged.
    Base,
    /// A fixed color.
    Solid(Color),
    /// The axis base color with this alpha.
    Alpha(f32),
}

impl ColorSpec {
    /// Resolves against the axis base color.
    #[must_use]
    pub fn resolve(self, base: Color) -> Option<Color> {
        match self {
            Self::Off => None,
            Self::Base => Some(base),
            Self::Solid(color) => Some(color),
            Self::Alpha(alpha) => Some(base.with_alpha(alpha.clamp(0.0, 1.0))),
        }
    }
}

/// Per-line grid line colors.
#[derive(Clone)]
pub enum LineColors {
    /// The same paint for every line.
    Uniform(ColorSpec),
    /// One optional color per line, positionally.
    PerLine(Vec<Option<Color>>),
    /// Colors computed per resolved line.
    Computed(LineColorsFn),
}

impl Default for LineColors {
    fn default() -> Self {
        Self::Uniform(ColorSpec::Alpha(0.4))
    }
}

impl fmt::Debug for LineColors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform(c) => f.debug_tuple("Uniform").field(c).finish(),
            Self::PerLine(v) => f.debug_tuple("PerLine").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
