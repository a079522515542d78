// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridplane_grid --heading-base-level=0

//! Gridplane Grid: per-frame grid calculation.
//!
//! Given a horizontal and a vertical [`Axis`](gridplane_axis::Axis) and a
//! canvas size, [`GridFrame::compute`] produces one [`CoordinateState`] per
//! axis: the visible span, the resolved line values with their colors, tick
//! lengths and labels, and the normalized geometry of every line, tick and
//! label anchor.
//!
//! The engine does no drawing. [`GridFrame::primitives`] converts a frame into
//! pixel-space [`GridPrimitive`]s and [`GridFrame::render_into`] feeds them to a
//! [`GridRenderer`].
//!
//! ## Pipeline
//!
//! 1. Padding is resolved to pixel insets.
//! 2. Line values are resolved (explicit, computed, or auto-derived).
//! 3. Colors, tick lengths and labels are resolved per line. Keyed ticks and
//!    labels append their keys as extra lines.
//! 4. Lines become normalized segments with unit normals.
//! 5. Each state is placed against the opposite one: ticks and label anchors
//!    land on the axis line.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridplane_axis::{Axis, LabelSpec};
//! use gridplane_grid::{GridFrame, GridPrimitive, HeuristicTextMeasurer};
//! use kurbo::{Point, Size};
//!
//! let x = Axis::horizontal().with_labels(LabelSpec::Values);
//! let y = Axis::vertical();
//! let frame = GridFrame::compute(&x, &y, Size::new(800.0, 600.0));
//!
//! assert_eq!(frame.origin_pixel(), Point::new(400.0, 300.0));
//! assert_eq!(frame.x.lines.len(), frame.x.labels.len());
//!
//! let labels = frame
//!     .primitives(&HeuristicTextMeasurer)
//!     .into_iter()
//!     .filter(|p| matches!(p, GridPrimitive::Label { .. }))
//!     .count();
//! // The y axis is unlabeled by default.
//! assert_eq!(labels, frame.x.lines.len());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

// Keeps the README example compiling.
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

mod frame;
pub mod geometry;
mod measure;
mod render;
pub mod resolve;
mod state;

pub use frame::GridFrame;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use render::{GridPrimitive, GridRenderer};
pub use state::CoordinateState;
