// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridplane_view --heading-base-level=0

//! Gridplane View: viewport state for a pannable, zoomable plane.
//!
//! [`ViewportState`] owns the viewport center, zoom and canvas size and
//! changes them only through transition methods: [`PanZoomGesture`]s,
//! direct setters, and resizes. Each committed change notifies registered
//! observers once with the [`ViewportSnapshot`]s before and after it.
//!
//! - [`pin`]: keep the value origin anchored to a canvas corner.
//! - [`settle`]: queue of deferred follow-up passes drained by the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridplane_view::{Mode, PanZoomGesture, ViewportConfig, ViewportState};
//! use kurbo::{Point, Size, Vec2};
//!
//! let mut vp = ViewportState::new(
//!     ViewportConfig::default()
//!         .with_size(Size::new(800.0, 600.0))
//!         .with_mode(Mode::Grab),
//! );
//! vp.observe(|event| {
//!     let _ = event;
//! });
//!
//! // Drag right by 10px at zoom 1: the center moves 10 units left.
//! vp.process_gesture(PanZoomGesture::pan(Vec2::new(10.0, 0.0)));
//! assert_eq!(vp.center(), Point::new(-10.0, 0.0));
//! assert_eq!(vp.revision(), 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

// Keeps the README example compiling.
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

mod config;
mod gesture;
mod observer;
pub mod pin;
pub mod settle;
mod viewport;

pub use config::{Mode, ViewportConfig};
pub use gesture::PanZoomGesture;
pub use observer::{ChangeKind, ObserverId, ViewportChange, ViewportEvent, ViewportSnapshot};
pub use pin::{Corner, pinned_center, pinned_offset};
pub use settle::{SettleQueue, SettleReason};
pub use viewport::{UPDATE_THROTTLE_MS, ViewportState};
