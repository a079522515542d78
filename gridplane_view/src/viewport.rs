// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use gridplane_axis::{Diagnostic, DiagnosticSink, EPSILON};
use kurbo::{Point, Rect, Size, Vec2};

use crate::observer::ObserverRegistry;
use crate::pin::pinned_center;
use crate::{
    ChangeKind, Corner, Mode, ObserverId, PanZoomGesture, ViewportChange, ViewportConfig,
    ViewportEvent, ViewportSnapshot,
};

/// Fraction of the canvas height a single gesture may zoom by.
const MAX_ZOOM_STEP: f64 = 0.75;

/// Minimum spacing, in milliseconds, between recorded update timestamps.
pub const UPDATE_THROTTLE_MS: u64 = 100;

/// Viewport state machine for a pannable, zoomable plane.
///
/// Owns the center, zoom and canvas size, plus interaction settings and the
/// record of the last gesture. Every field is changed through a transition
/// method. A transition that changes anything observable bumps the
/// [revision](Self::revision) and notifies observers once with the snapshots
/// on either side; a transition that changes nothing is silent.
///
/// Zoom is magnification: pixels per value unit. Gestures work in its inverse,
/// the scale in value units per pixel. The zoom limits bound the zoom itself.
pub struct ViewportState {
    center: Point,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    size: Size,
    origin: Point,
    mode: Mode,
    origin_pin: Option<Corner>,
    pin_margin: f64,
    zoom_over_mouse: bool,
    zoom_enabled: bool,
    pan_enabled: bool,
    deltas: Vec2,
    anchor: Point,
    is_right: bool,
    last_update: Option<u64>,
    revision: u64,
    ready: bool,
    observers: ObserverRegistry,
    diagnostics: Option<Box<dyn DiagnosticSink>>,
}

impl fmt::Debug for ViewportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportState")
            .field("snapshot", &self.snapshot())
            .field("last_update", &self.last_update)
            .field("ready", &self.ready)
            .field("observers", &self.observers)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl ViewportState {
    /// Creates a viewport from `config`.
    ///
    /// Invalid values are replaced: zoom limits are ordered, the zoom is
    /// clamped into them, and non-finite sizes or margins fall back to the
    /// defaults.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        let defaults = ViewportConfig::default();
        let (min_zoom, max_zoom) = normalize_limits(config.min_zoom, config.max_zoom);
        let zoom = if config.zoom.is_finite() && config.zoom > 0.0 {
            config.zoom
        } else {
            defaults.zoom
        };
        let size = sanitize_size(config.size);
        let center = if config.center.is_finite() {
            config.center
        } else {
            defaults.center
        };
        let pin_margin = if config.pin_margin.is_finite() {
            config.pin_margin
        } else {
            defaults.pin_margin
        };
        Self {
            center,
            zoom: clamp_zoom(zoom, min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            size,
            origin: origin_for(size),
            mode: config.mode,
            origin_pin: config.origin_pin,
            pin_margin,
            zoom_over_mouse: config.zoom_over_mouse,
            zoom_enabled: config.zoom_enabled,
            pan_enabled: config.pan_enabled,
            deltas: Vec2::ZERO,
            anchor: Point::ORIGIN,
            is_right: false,
            last_update: None,
            revision: 0,
            ready: false,
            observers: ObserverRegistry::default(),
            diagnostics: None,
        }
    }

    /// Routes recovered problems to `sink`.
    pub fn set_diagnostics(&mut self, sink: Option<Box<dyn DiagnosticSink>>) {
        self.diagnostics = sink;
    }

    /// Registers an observer for every subsequent [`ViewportEvent`].
    pub fn observe(&mut self, observer: impl FnMut(&ViewportEvent) + 'static) -> ObserverId {
        self.observers.insert(Box::new(observer))
    }

    /// Unregisters an observer. Returns `false` if `id` was not registered.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // --- Queries ---

    /// Viewport center in value units.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Magnification in pixels per value unit.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Value units per pixel, the inverse of [`zoom`](Self::zoom).
    #[must_use]
    pub fn scale(&self) -> f64 {
        1.0 / self.zoom
    }

    /// Smallest allowed zoom.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Largest allowed zoom.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Canvas size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Canvas origin, `(-width / 2, -height / 2)`.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Interaction mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` in [`Mode::Grab`].
    #[must_use]
    pub fn is_grab_mode(&self) -> bool {
        self.mode == Mode::Grab
    }

    /// Returns `true` in [`Mode::Select`].
    #[must_use]
    pub fn is_select_mode(&self) -> bool {
        self.mode == Mode::Select
    }

    /// Returns `true` if gestures currently pan: grab mode or alternate button.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.is_grab_mode() || self.is_right
    }

    /// Pinned corner, if any.
    #[must_use]
    pub fn origin_pin(&self) -> Option<Corner> {
        self.origin_pin
    }

    /// Pin margin in pixels.
    #[must_use]
    pub fn pin_margin(&self) -> f64 {
        self.pin_margin
    }

    /// Zoom follows the gesture anchor.
    #[must_use]
    pub fn zoom_over_mouse(&self) -> bool {
        self.zoom_over_mouse
    }

    /// Gestures may zoom.
    #[must_use]
    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Gestures may pan.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.pan_enabled
    }

    /// Pan delta of the last gesture.
    #[must_use]
    pub fn deltas(&self) -> Vec2 {
        self.deltas
    }

    /// Anchor of the last gesture.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The last gesture used the alternate button.
    #[must_use]
    pub fn is_right(&self) -> bool {
        self.is_right
    }

    /// Last recorded update time, in host milliseconds.
    #[must_use]
    pub fn last_update(&self) -> Option<u64> {
        self.last_update
    }

    /// Revision counter, bumped once per committed change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` once [`mark_ready`](Self::mark_ready) has run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Pixel-space viewport rectangle centered on the canvas origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            -self.size.width / 2.0,
            -self.size.height / 2.0,
            self.size.width / 2.0,
            self.size.height / 2.0,
        )
    }

    /// Copy of every observable field.
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            center: self.center,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            size: self.size,
            origin: self.origin,
            mode: self.mode,
            origin_pin: self.origin_pin,
            pin_margin: self.pin_margin,
            zoom_over_mouse: self.zoom_over_mouse,
            zoom_enabled: self.zoom_enabled,
            pan_enabled: self.pan_enabled,
            deltas: self.deltas,
            anchor: self.anchor,
            is_right: self.is_right,
            revision: self.revision,
        }
    }

    /// Center the axes should follow, in value units.
    ///
    /// This is the pinned center when a corner pin is set, otherwise the
    /// viewport center.
    #[must_use]
    pub fn axis_center(&self) -> Point {
        match self.origin_pin {
            Some(corner) => pinned_center(self.size, self.zoom, self.pin_margin, corner),
            None => self.center,
        }
    }

    /// Axis zoom in value units per pixel.
    #[must_use]
    pub fn axis_zoom(&self) -> f64 {
        self.scale()
    }

    // --- Transitions ---

    /// Sets the zoom, clamped into the zoom limits.
    ///
    /// Also clears the gesture deltas and moves the anchor to the canvas
    /// center.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() {
            self.report(Diagnostic::NonFiniteInput { what: "zoom" });
            return false;
        }
        let applied = clamp_zoom(zoom, self.min_zoom, self.max_zoom);
        if applied != zoom {
            self.report(Diagnostic::ZoomClamped {
                requested: zoom,
                applied,
            });
        }
        let anchor = Point::new(self.size.width / 2.0, self.size.height / 2.0);
        self.commit(ChangeKind::Zoom, |s| {
            s.zoom = applied;
            s.deltas = Vec2::ZERO;
            s.anchor = anchor;
        })
    }

    /// Applies one pan/zoom gesture.
    ///
    /// Pans when in grab mode or when the alternate button is used, and zooms
    /// by `dz` relative to the canvas height, around the gesture anchor when
    /// zoom-over-mouse is on. Disabled pan or zoom parts are ignored.
    pub fn process_gesture(&mut self, gesture: PanZoomGesture) -> bool {
        if !gesture.is_finite() {
            self.report(Diagnostic::NonFiniteInput { what: "gesture" });
            return false;
        }
        let width = self.size.width.max(EPSILON);
        let height = self.size.height.max(EPSILON);
        let step = (-gesture.dz).clamp(-MAX_ZOOM_STEP * height, MAX_ZOOM_STEP * height) / height;

        let prev_scale = self.scale();
        let target_scale = if self.zoom_enabled {
            let requested = prev_scale * (1.0 - step);
            let (lo, hi) = scale_limits(self.min_zoom, self.max_zoom);
            let clamped = requested.max(lo).min(hi);
            if clamped != requested {
                self.report(Diagnostic::ZoomClamped {
                    requested: 1.0 / requested,
                    applied: 1.0 / clamped,
                });
            }
            clamped
        } else {
            prev_scale
        };

        let mut center = self.center;
        if self.pan_enabled && (self.is_grab_mode() || gesture.is_right) {
            center.x -= prev_scale * gesture.dx;
            center.y += prev_scale * gesture.dy;
        }
        if self.zoom_enabled {
            let (tx, ty) = if self.zoom_over_mouse {
                (gesture.x0 / width - 0.5, 0.5 - gesture.y0 / height)
            } else {
                (0.0, 0.0)
            };
            let d = target_scale - prev_scale;
            center.x -= width * d * tx;
            center.y -= height * d * ty;
        }

        // Keep the stored zoom bit-exact when the scale did not move.
        // The reciprocal of a clamped scale can land an ulp past the limits.
        let zoom = if target_scale == prev_scale {
            self.zoom
        } else {
            clamp_zoom(1.0 / target_scale, self.min_zoom, self.max_zoom)
        };
        self.commit(ChangeKind::PanZoom, |s| {
            s.center = center;
            s.zoom = zoom;
            s.deltas = gesture.delta();
            s.anchor = gesture.anchor();
            s.is_right = gesture.is_right;
        })
    }

    /// Sets the canvas size and the derived origin.
    ///
    /// Center and zoom are unchanged.
    pub fn set_dimensions(&mut self, size: Size) -> bool {
        if !(size.width.is_finite() && size.height.is_finite()) {
            self.report(Diagnostic::NonFiniteInput { what: "dimensions" });
            return false;
        }
        let size = sanitize_size(size);
        self.commit(ChangeKind::Dimensions, |s| {
            s.size = size;
            s.origin = origin_for(size);
        })
    }

    /// Sets the interaction mode.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        self.commit(ChangeKind::Mode, |s| s.mode = mode)
    }

    /// Pins the origin to `corner`, or unpins it.
    pub fn set_origin_pin(&mut self, corner: Option<Corner>) -> bool {
        let changed = self.commit(ChangeKind::OriginPin, |s| s.origin_pin = corner);
        if changed {
            self.observers.emit(&ViewportEvent::OriginPinChanged(corner));
        }
        changed
    }

    /// Sets the pin margin in pixels.
    pub fn set_pin_margin(&mut self, margin: f64) -> bool {
        if !margin.is_finite() {
            self.report(Diagnostic::NonFiniteInput { what: "pin margin" });
            return false;
        }
        let changed = self.commit(ChangeKind::PinMargin, |s| s.pin_margin = margin);
        if changed {
            self.observers.emit(&ViewportEvent::PinMarginChanged(margin));
        }
        changed
    }

    /// Sets the smallest allowed zoom.
    ///
    /// Raises the largest allowed zoom and the zoom itself if needed, in one
    /// change.
    pub fn set_min_zoom(&mut self, min_zoom: f64) -> bool {
        if min_zoom.is_nan() || min_zoom < 0.0 || min_zoom == f64::INFINITY {
            self.report(Diagnostic::NonFiniteInput { what: "min zoom" });
            return false;
        }
        let max_zoom = self.max_zoom.max(min_zoom);
        self.set_zoom_limits(min_zoom, max_zoom)
    }

    /// Sets the largest allowed zoom.
    ///
    /// Lowers the smallest allowed zoom and the zoom itself if needed, in one
    /// change.
    pub fn set_max_zoom(&mut self, max_zoom: f64) -> bool {
        if max_zoom.is_nan() || max_zoom <= 0.0 {
            self.report(Diagnostic::NonFiniteInput { what: "max zoom" });
            return false;
        }
        let min_zoom = self.min_zoom.min(max_zoom);
        self.set_zoom_limits(min_zoom, max_zoom)
    }

    fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> bool {
        let zoom = clamp_zoom(self.zoom, min_zoom, max_zoom);
        if zoom != self.zoom {
            self.report(Diagnostic::ZoomClamped {
                requested: self.zoom,
                applied: zoom,
            });
        }
        self.commit(ChangeKind::ZoomLimits, |s| {
            s.min_zoom = min_zoom;
            s.max_zoom = max_zoom;
            s.zoom = zoom;
        })
    }

    /// Recomputes the origin from the current size.
    ///
    /// Center and zoom are unchanged.
    pub fn reset_view(&mut self) -> bool {
        let origin = origin_for(self.size);
        self.commit(ChangeKind::ResetView, |s| s.origin = origin)
    }

    /// Sets the center in value units.
    pub fn set_center(&mut self, center: Point) -> bool {
        if !center.is_finite() {
            self.report(Diagnostic::NonFiniteInput { what: "center" });
            return false;
        }
        self.commit(ChangeKind::Center, |s| s.center = center)
    }

    /// Centers on a view point given with `y` growing downward.
    ///
    /// The stored center has `y` flipped. Gesture deltas and anchor are
    /// cleared.
    pub fn set_view(&mut self, view: Point) -> bool {
        if !view.is_finite() {
            self.report(Diagnostic::NonFiniteInput { what: "view" });
            return false;
        }
        self.commit(ChangeKind::View, |s| {
            s.center = Point::new(view.x, -view.y);
            s.deltas = Vec2::ZERO;
            s.anchor = Point::ORIGIN;
        })
    }

    /// Sets whether zoom follows the gesture anchor.
    pub fn set_zoom_over_mouse(&mut self, zoom_over_mouse: bool) -> bool {
        self.commit(ChangeKind::ZoomOverMouse, |s| s.zoom_over_mouse = zoom_over_mouse)
    }

    /// Enables or disables gesture zoom.
    pub fn set_zoom_enabled(&mut self, enabled: bool) -> bool {
        self.commit(ChangeKind::ZoomEnabled, |s| s.zoom_enabled = enabled)
    }

    /// Enables or disables gesture pan.
    pub fn set_pan_enabled(&mut self, enabled: bool) -> bool {
        self.commit(ChangeKind::PanEnabled, |s| s.pan_enabled = enabled)
    }

    /// Overwrites the recorded gesture deltas.
    pub fn set_deltas(&mut self, deltas: Vec2) -> bool {
        self.commit(ChangeKind::Deltas, |s| s.deltas = deltas)
    }

    /// Overwrites the recorded gesture anchor.
    pub fn set_anchor(&mut self, anchor: Point) -> bool {
        self.commit(ChangeKind::Anchor, |s| s.anchor = anchor)
    }

    /// Records `now_ms` as the last update time, at most once per
    /// [`UPDATE_THROTTLE_MS`].
    ///
    /// Returns `true` if the time was recorded. This never notifies.
    pub fn touch(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_update
            && now_ms.abs_diff(last) < UPDATE_THROTTLE_MS
        {
            return false;
        }
        self.last_update = Some(now_ms);
        true
    }

    /// Emits [`ViewportEvent::Ready`] the first time it is called.
    pub fn mark_ready(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.ready = true;
        self.observers.emit(&ViewportEvent::Ready);
        true
    }

    fn commit(&mut self, kind: ChangeKind, apply: impl FnOnce(&mut Self)) -> bool {
        let previous = self.snapshot();
        apply(self);
        let mut next = self.snapshot();
        if next == previous {
            return false;
        }
        self.revision = self.revision.wrapping_add(1);
        next.revision = self.revision;
        self.observers.emit(&ViewportEvent::Changed(ViewportChange {
            kind,
            previous,
            next,
        }));
        true
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if let Some(sink) = self.diagnostics.as_mut() {
            sink.report(diagnostic);
        }
    }
}

fn origin_for(size: Size) -> Point {
    Point::new(-size.width / 2.0, -size.height / 2.0)
}

fn sanitize_size(size: Size) -> Size {
    let fix = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Size::new(fix(size.width), fix(size.height))
}

/// Orders the limits and keeps the lower one non-negative.
fn normalize_limits(min_zoom: f64, max_zoom: f64) -> (f64, f64) {
    let min_zoom = if min_zoom.is_nan() { 0.0 } else { min_zoom.max(0.0) };
    let max_zoom = if max_zoom.is_nan() || max_zoom <= 0.0 {
        f64::INFINITY
    } else {
        max_zoom
    };
    if min_zoom <= max_zoom {
        (min_zoom, max_zoom)
    } else {
        (max_zoom, min_zoom)
    }
}

/// Clamps a zoom into the limits, keeping it strictly positive.
fn clamp_zoom(zoom: f64, min_zoom: f64, max_zoom: f64) -> f64 {
    zoom.min(max_zoom).max(min_zoom.max(EPSILON))
}

/// Scale bounds matching the zoom limits: `[1 / max_zoom, 1 / min_zoom]`.
fn scale_limits(min_zoom: f64, max_zoom: f64) -> (f64, f64) {
    (1.0 / max_zoom, 1.0 / min_zoom.max(EPSILON))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use gridplane_axis::DiagnosticLog;

    fn viewport() -> ViewportState {
        ViewportState::new(ViewportConfig::default().with_size(Size::new(800.0, 600.0)))
    }

    fn record(vp: &mut ViewportState) -> Rc<RefCell<Vec<ViewportEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        vp.observe(move |e| sink.borrow_mut().push(*e));
        events
    }

    fn changes(events: &RefCell<Vec<ViewportEvent>>) -> Vec<ChangeKind> {
        events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewportEvent::Changed(c) => Some(c.kind),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn defaults_follow_the_config() {
        let vp = ViewportState::default();
        assert_eq!(vp.center(), Point::ORIGIN);
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.min_zoom(), 0.0);
        assert_eq!(vp.max_zoom(), f64::INFINITY);
        assert_eq!(vp.pin_margin(), 10.0);
        assert!(vp.zoom_over_mouse() && vp.zoom_enabled() && vp.pan_enabled());
        assert!(vp.is_select_mode());
        assert_eq!(vp.revision(), 0);
    }

    #[test]
    fn set_zoom_clamps_and_recenters_the_anchor() {
        let mut vp = ViewportState::new(
            ViewportConfig::default()
                .with_size(Size::new(800.0, 600.0))
                .with_zoom_limits(0.5, 4.0),
        );
        let events = record(&mut vp);
        vp.set_deltas(Vec2::new(3.0, 4.0));
        assert!(vp.set_zoom(10.0));
        assert_eq!(vp.zoom(), 4.0);
        assert_eq!(vp.deltas(), Vec2::ZERO);
        assert_eq!(vp.anchor(), Point::new(400.0, 300.0));
        assert_eq!(changes(&events), [ChangeKind::Deltas, ChangeKind::Zoom]);
    }

    #[test]
    fn equal_values_are_silent() {
        let mut vp = viewport();
        let events = record(&mut vp);
        assert!(!vp.set_mode(Mode::Select));
        assert!(!vp.set_dimensions(Size::new(800.0, 600.0)));
        assert!(!vp.set_center(Point::ORIGIN));
        assert!(!vp.set_pin_margin(10.0));
        assert!(!vp.reset_view());
        assert!(events.borrow().is_empty());
        assert_eq!(vp.revision(), 0);
    }

    #[test]
    fn changes_carry_both_snapshots() {
        let mut vp = viewport();
        let events = record(&mut vp);
        vp.set_center(Point::new(5.0, -5.0));
        let ViewportEvent::Changed(change) = events.borrow()[0] else {
            panic!("expected a change");
        };
        assert_eq!(change.previous.center, Point::ORIGIN);
        assert_eq!(change.next.center, Point::new(5.0, -5.0));
        assert_eq!(change.previous.revision, 0);
        assert_eq!(change.next.revision, 1);
        assert_eq!(vp.revision(), 1);
    }

    #[test]
    fn grab_mode_pans_against_the_drag() {
        let mut vp = viewport();
        vp.set_mode(Mode::Grab);
        vp.set_zoom(2.0);
        vp.process_gesture(PanZoomGesture::pan(Vec2::new(10.0, 20.0)));
        // Half a unit per pixel; screen y grows downward.
        assert_eq!(vp.center(), Point::new(-5.0, 10.0));
        assert_eq!(vp.deltas(), Vec2::new(10.0, 20.0));
        assert!(vp.is_panning());
    }

    #[test]
    fn select_mode_pans_only_with_the_alternate_button() {
        let mut vp = viewport();
        vp.process_gesture(PanZoomGesture::pan(Vec2::new(10.0, 0.0)));
        assert_eq!(vp.center(), Point::ORIGIN);
        vp.process_gesture(PanZoomGesture::pan(Vec2::new(10.0, 0.0)).with_right_button(true));
        assert_eq!(vp.center(), Point::new(-10.0, 0.0));
        assert!(vp.is_right());
    }

    #[test]
    fn disabled_pan_is_ignored() {
        let mut vp = viewport();
        vp.set_mode(Mode::Grab);
        vp.set_pan_enabled(false);
        vp.process_gesture(PanZoomGesture::pan(Vec2::new(10.0, 10.0)));
        assert_eq!(vp.center(), Point::ORIGIN);
    }

    #[test]
    fn wheel_zoom_is_relative_to_height() {
        let mut vp = viewport();
        vp.set_zoom_over_mouse(false);
        // dz = -300 on a 600px canvas halves the scale.
        vp.process_gesture(PanZoomGesture::zoom(-300.0, Point::ORIGIN));
        assert!((vp.zoom() - 2.0).abs() < 1e-12);
        assert_eq!(vp.center(), Point::ORIGIN);

        // Steps are capped at 75% of the height.
        vp.process_gesture(PanZoomGesture::zoom(1e6, Point::ORIGIN));
        assert!((vp.zoom() - 2.0 / 1.75).abs() < 1e-12);
    }

    #[test]
    fn zoom_over_mouse_keeps_the_anchor_fixed() {
        let mut vp = viewport();
        // The value under pixel (600, 150) before zooming.
        let value_at = |vp: &ViewportState, p: Point| {
            Point::new(
                vp.center().x + (p.x - 400.0) * vp.scale(),
                vp.center().y - (p.y - 300.0) * vp.scale(),
            )
        };
        let anchor = Point::new(600.0, 150.0);
        let before = value_at(&vp, anchor);
        vp.process_gesture(PanZoomGesture::zoom(-120.0, anchor));
        let after = value_at(&vp, anchor);
        assert!(vp.zoom() > 1.0);
        assert!((before - after).hypot() < 1e-9);
    }

    #[test]
    fn gesture_zoom_respects_limits() {
        let mut vp = ViewportState::new(
            ViewportConfig::default()
                .with_size(Size::new(800.0, 600.0))
                .with_zoom_limits(0.5, 2.0),
        );
        let log = Rc::new(RefCell::new(DiagnosticLog::new()));
        struct Shared(Rc<RefCell<DiagnosticLog>>);
        impl DiagnosticSink for Shared {
            fn report(&mut self, diagnostic: Diagnostic) {
                self.0.borrow_mut().report(diagnostic);
            }
        }
        vp.set_diagnostics(Some(Box::new(Shared(log.clone()))));
        for _ in 0..10 {
            vp.process_gesture(PanZoomGesture::zoom(-400.0, Point::new(400.0, 300.0)));
        }
        assert_eq!(vp.zoom(), 2.0);
        for _ in 0..10 {
            vp.process_gesture(PanZoomGesture::zoom(400.0, Point::new(400.0, 300.0)));
        }
        assert_eq!(vp.zoom(), 0.5);
        assert!(!log.borrow().is_empty());
    }

    #[test]
    fn gesture_zoom_lands_exactly_on_the_limit() {
        let mut vp = ViewportState::new(
            ViewportConfig::default()
                .with_size(Size::new(800.0, 600.0))
                .with_zoom_limits(0.5, 49.0),
        );
        for _ in 0..40 {
            vp.process_gesture(PanZoomGesture::zoom(-400.0, Point::new(400.0, 300.0)));
        }
        // 1 / (1 / 49) is 49.00000000000001 in f64.
        assert_eq!(vp.zoom(), 49.0);
        let events = record(&mut vp);
        assert!(!vp.set_max_zoom(49.0));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn disabled_zoom_keeps_the_zoom() {
        let mut vp = viewport();
        vp.set_zoom_enabled(false);
        vp.process_gesture(PanZoomGesture::zoom(-300.0, Point::new(100.0, 100.0)));
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.center(), Point::ORIGIN);
    }

    #[test]
    fn lowering_max_zoom_clamps_with_one_change() {
        let mut vp = viewport();
        vp.set_zoom(8.0);
        let events = record(&mut vp);
        assert!(vp.set_max_zoom(4.0));
        assert_eq!(vp.zoom(), 4.0);
        assert_eq!(changes(&events), [ChangeKind::ZoomLimits]);
    }

    #[test]
    fn raising_min_zoom_lifts_max_zoom() {
        let mut vp = viewport();
        vp.set_max_zoom(2.0);
        vp.set_min_zoom(3.0);
        assert_eq!((vp.min_zoom(), vp.max_zoom(), vp.zoom()), (3.0, 3.0, 3.0));
    }

    #[test]
    fn resize_keeps_center_and_zoom() {
        let mut vp = viewport();
        vp.set_center(Point::new(12.0, 34.0));
        vp.set_zoom(3.0);
        assert!(vp.set_dimensions(Size::new(400.0, 300.0)));
        assert_eq!(vp.center(), Point::new(12.0, 34.0));
        assert_eq!(vp.zoom(), 3.0);
        assert_eq!(vp.origin(), Point::new(-200.0, -150.0));
        assert_eq!(vp.bounds(), Rect::new(-200.0, -150.0, 200.0, 150.0));
    }

    #[test]
    fn pin_setters_emit_specific_notifications() {
        let mut vp = viewport();
        let events = record(&mut vp);
        vp.set_origin_pin(Some(Corner::BottomLeft));
        vp.set_pin_margin(20.0);
        let events = events.borrow();
        assert!(matches!(events[1], ViewportEvent::OriginPinChanged(Some(Corner::BottomLeft))));
        assert!(matches!(events[3], ViewportEvent::PinMarginChanged(m) if m == 20.0));
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn axis_center_follows_the_pin() {
        let mut vp = viewport();
        vp.set_center(Point::new(1.0, 2.0));
        assert_eq!(vp.axis_center(), Point::new(1.0, 2.0));
        vp.set_zoom(2.0);
        vp.set_origin_pin(Some(Corner::BottomRight));
        assert_eq!(vp.axis_center(), Point::new(-195.0, 145.0));
        assert_eq!(vp.axis_zoom(), 0.5);
    }

    #[test]
    fn set_view_flips_y_and_clears_the_gesture() {
        let mut vp = viewport();
        vp.set_deltas(Vec2::new(1.0, 1.0));
        vp.set_anchor(Point::new(9.0, 9.0));
        vp.set_view(Point::new(30.0, 40.0));
        assert_eq!(vp.center(), Point::new(30.0, -40.0));
        assert_eq!(vp.deltas(), Vec2::ZERO);
        assert_eq!(vp.anchor(), Point::ORIGIN);
    }

    #[test]
    fn touch_is_throttled() {
        let mut vp = viewport();
        assert!(vp.touch(1_000));
        assert!(!vp.touch(1_050));
        assert!(!vp.touch(1_099));
        assert!(vp.touch(1_100));
        assert_eq!(vp.last_update(), Some(1_100));
    }

    #[test]
    fn ready_is_emitted_once() {
        let mut vp = viewport();
        let events = record(&mut vp);
        assert!(vp.mark_ready());
        assert!(!vp.mark_ready());
        assert_eq!(*events.borrow(), [ViewportEvent::Ready]);
        assert!(vp.is_ready());
    }

    #[test]
    fn non_finite_inputs_are_ignored_and_reported() {
        let mut vp = viewport();
        let log = Rc::new(RefCell::new(DiagnosticLog::new()));
        struct Shared(Rc<RefCell<DiagnosticLog>>);
        impl DiagnosticSink for Shared {
            fn report(&mut self, diagnostic: Diagnostic) {
                self.0.borrow_mut().report(diagnostic);
            }
        }
        vp.set_diagnostics(Some(Box::new(Shared(log.clone()))));
        assert!(!vp.set_zoom(f64::NAN));
        assert!(!vp.process_gesture(PanZoomGesture::pan(Vec2::new(f64::INFINITY, 0.0))));
        assert!(!vp.set_center(Point::new(f64::NAN, 0.0)));
        assert_eq!(log.borrow().entries().len(), 3);
        assert_eq!(vp.revision(), 0);
    }

    #[test]
    fn unobserve_stops_notifications() {
        let mut vp = viewport();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let id = vp.observe(move |_| *c.borrow_mut() += 1);
        vp.set_mode(Mode::Grab);
        assert!(vp.unobserve(id));
        vp.set_mode(Mode::Select);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(vp.observer_count(), 0);
    }
}
