// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridplane --heading-base-level=0

//! Gridplane: pannable, zoomable coordinate-plane grids.
//!
//! A [`GridMap`] owns a [`ViewportState`](view::ViewportState) and two
//! [`Axis`](axis::Axis) values. Gestures and setters change the viewport; the
//! map then points both axes at the viewport center and zoom and recomputes
//! a [`GridFrame`](grid::GridFrame) holding every grid line, tick, axis line
//! and label for the current canvas size.
//!
//! The building blocks are re-exported as modules:
//!
//! - [`axis`]: per-axis configuration and value to ratio mapping.
//! - [`grid`]: the per-frame grid engine and the renderer seam.
//! - [`view`]: the viewport state machine, corner pins and settle queue.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridplane::view::{Mode, PanZoomGesture, ViewportConfig};
//! use gridplane::{GridMap, MapConfig};
//! use kurbo::{Point, Size, Vec2};
//!
//! let mut map = GridMap::new(
//!     MapConfig::default().with_viewport(
//!         ViewportConfig::default()
//!             .with_size(Size::new(800.0, 600.0))
//!             .with_mode(Mode::Grab),
//!     ),
//! );
//! assert_eq!(map.origin_pixel(), Point::new(400.0, 300.0));
//!
//! // Drag the plane 100px to the right: the origin follows the pointer.
//! map.panzoom(PanZoomGesture::pan(Vec2::new(100.0, 0.0)));
//! assert_eq!(map.origin_pixel(), Point::new(500.0, 300.0));
//!
//! // The host drains deferred passes on its next tick.
//! map.run_settle(16);
//! assert!(map.viewport().is_ready());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

// Keeps the README example compiling.
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

mod map;

pub use gridplane_axis as axis;
pub use gridplane_grid as grid;
pub use gridplane_view as view;

pub use map::{Cursor, GridMap, MapConfig};
