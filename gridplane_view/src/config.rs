// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::Corner;

/// Pointer interaction mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Primary-button drags select; only the alternate button pans.
    #[default]
    Select,
    /// Primary-button drags pan.
    Grab,
}

/// Initial viewport configuration.
///
/// Values are normalized by [`ViewportState::new`](crate::ViewportState::new):
/// zoom limits are ordered and the zoom is clamped into them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Viewport center in value units.
    pub center: Point,
    /// Magnification in pixels per value unit.
    pub zoom: f64,
    /// Smallest allowed zoom.
    pub min_zoom: f64,
    /// Largest allowed zoom.
    pub max_zoom: f64,
    /// Canvas size in pixels.
    pub size: Size,
    /// Interaction mode.
    pub mode: Mode,
    /// Corner the value origin is pinned to, if any.
    pub origin_pin: Option<Corner>,
    /// Distance of a pinned origin from its corner, in pixels.
    pub pin_margin: f64,
    /// Zoom around the gesture anchor rather than the viewport center.
    pub zoom_over_mouse: bool,
    /// Gestures may zoom.
    pub zoom_enabled: bool,
    /// Gestures may pan.
    pub pan_enabled: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            zoom: 1.0,
            min_zoom: 0.0,
            max_zoom: f64::INFINITY,
            size: Size::ZERO,
            mode: Mode::Select,
            origin_pin: None,
            pin_margin: 10.0,
            zoom_over_mouse: true,
            zoom_enabled: true,
            pan_enabled: true,
        }
    }
}

impl ViewportConfig {
    /// Sets the canvas size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the initial center.
    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Sets the initial zoom.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the interaction mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Pins the origin to `corner`.
    #[must_use]
    pub fn with_origin_pin(mut self, corner: Option<Corner>) -> Self {
        self.origin_pin = corner;
        self
    }

    /// Sets whether zoom follows the gesture anchor.
    #[must_use]
    pub fn with_zoom_over_mouse(mut self, zoom_over_mouse: bool) -> Self {
        self.zoom_over_mouse = zoom_over_mouse;
        self
    }
}
