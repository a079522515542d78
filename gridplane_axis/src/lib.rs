// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridplane_axis --heading-base-level=0

//! Gridplane Axis: per-axis configuration and coordinate mapping.
//!
//! An [`Axis`] describes one direction of a coordinate plane: its value
//! bounds, current scroll position and zoom, and the policies that decide
//! where grid lines, ticks and labels go. Per frame it yields an
//! [`AxisWindow`], the visible span for a given canvas size, which provides
//! the two mapping functions the grid engine is built on:
//!
//! - [`AxisWindow::ratio`]: value to `0..1` position in the visible span.
//! - [`AxisWindow::coords_for`]: values to normalized line segments.
//!
//! The crate does no drawing and holds no per-frame state.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use gridplane_axis::Axis;
//!
//! // Half a value unit per pixel, centered on x = 100.
//! let axis = Axis::horizontal().with_offset(100.0).with_zoom(0.5);
//! let window = axis.window(Size::new(800.0, 600.0));
//!
//! assert_eq!(window.range, 400.0);
//! assert_eq!(window.ratio(100.0), 0.5);
//!
//! let coords = window.coords_for(&[0.0, 100.0]);
//! assert_eq!(coords[1].p0.x, 0.5);
//! ```
//!
//! ## Vertical axes
//!
//! Values on a [`Orientation::Vertical`] axis grow upward while pixel Y grows
//! downward, so its ratio is `1 - (value - offset) / range`.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

// Keeps the README example compiling.
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

mod axis;
pub mod diagnostics;
mod format;
mod orientation;
pub mod scale;
pub mod policy;

pub use axis::{Axis, AxisWindow, EPSILON, UNBOUNDED};
pub use diagnostics::{Diagnostic, DiagnosticLog, DiagnosticSink, LineSequence, NoDiagnostics};
pub use format::format_value;
pub use orientation::Orientation;
pub use policy::{
    AxisScale, ColorSpec, LabelFormatter, LabelSpec, LineColors, LineSpec, Padding, TickSpec,
};

#[cfg(feature = "tracing")]
pub use diagnostics::TracingDiagnostics;
