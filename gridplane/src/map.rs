// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use gridplane_axis::{Axis, Diagnostic, DiagnosticSink, Orientation};
use gridplane_grid::{GridFrame, GridRenderer, TextMeasurer};
use gridplane_view::{
    Corner, Mode, ObserverId, PanZoomGesture, SettleQueue, SettleReason, ViewportConfig,
    ViewportEvent, ViewportState,
};
use kurbo::{Point, Rect, Size};

/// Configuration for a [`GridMap`].
#[derive(Clone, Debug)]
pub struct MapConfig {
    /// Initial viewport.
    pub viewport: ViewportConfig,
    /// The horizontal axis.
    pub x_axis: Axis,
    /// The vertical axis.
    pub y_axis: Axis,
    /// Whether [`GridMap::render_into`] draws the grid.
    pub show_grid: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            x_axis: Axis::horizontal(),
            y_axis: Axis::vertical(),
            show_grid: true,
        }
    }
}

impl MapConfig {
    /// Sets the initial viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportConfig) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets both axes.
    #[must_use]
    pub fn with_axes(mut self, x_axis: Axis, y_axis: Axis) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    /// Sets whether the grid is drawn.
    #[must_use]
    pub fn with_show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }
}

/// Pointer cursor the host should show over the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Plain pointer.
    #[default]
    Pointer,
    /// A drag would pan.
    Grab,
}

/// A coordinate-plane map: one viewport driving two axes.
///
/// Every transition that changes the viewport recomputes the [`GridFrame`]
/// right away. Zooming to a value, resetting, fitting, re-centering and
/// resizing also queue a settle pass, which the host runs on its next tick
/// with [`GridMap::run_settle`]. The first settle pass marks the map ready.
pub struct GridMap {
    viewport: ViewportState,
    x_axis: Axis,
    y_axis: Axis,
    show_grid: bool,
    frame: GridFrame,
    settle: SettleQueue,
    clock_ms: u64,
    updates: u64,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl fmt::Debug for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridMap")
            .field("viewport", &self.viewport)
            .field("x_axis", &self.x_axis)
            .field("y_axis", &self.y_axis)
            .field("show_grid", &self.show_grid)
            .field("frame", &self.frame)
            .field("settle", &self.settle)
            .field("clock_ms", &self.clock_ms)
            .field("updates", &self.updates)
            .finish_non_exhaustive()
    }
}

impl Default for GridMap {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

impl GridMap {
    /// Creates a map, computes its first frame and queues the initial settle
    /// pass.
    #[must_use]
    pub fn new(config: MapConfig) -> Self {
        let viewport = ViewportState::new(config.viewport);
        let frame = GridFrame::compute(&config.x_axis, &config.y_axis, viewport.size());
        let mut map = Self {
            viewport,
            x_axis: config.x_axis,
            y_axis: config.y_axis,
            show_grid: config.show_grid,
            frame,
            settle: SettleQueue::new(),
            clock_ms: 0,
            updates: 0,
            diagnostics: default_sink(),
        };
        #[cfg(feature = "tracing")]
        map.viewport
            .set_diagnostics(Some(Box::new(gridplane_axis::TracingDiagnostics)));
        map.update();
        map.settle.schedule(SettleReason::Initial);
        map
    }

    /// Routes problems found while computing frames to `sink`.
    ///
    /// Viewport problems go to the sink set with
    /// [`ViewportState::set_diagnostics`].
    pub fn set_diagnostics(&mut self, sink: Box<dyn DiagnosticSink>) {
        self.diagnostics = sink;
    }

    /// Sets the host clock used for update timestamps.
    pub fn set_clock(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
    }

    // --- Queries ---

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// The viewport, for changes the map does not wrap.
    ///
    /// Call [`GridMap::update`] afterwards to bring the frame up to date.
    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    /// The axis with the given orientation.
    #[must_use]
    pub fn axis(&self, orientation: Orientation) -> &Axis {
        match orientation {
            Orientation::Horizontal => &self.x_axis,
            Orientation::Vertical => &self.y_axis,
        }
    }

    /// The most recently computed frame.
    #[must_use]
    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }

    /// Number of frames computed so far.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Pending settle passes.
    #[must_use]
    pub fn settle_queue(&self) -> &SettleQueue {
        &self.settle
    }

    /// Whether the grid is drawn.
    #[must_use]
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Pixel position where the two axis lines cross.
    #[must_use]
    pub fn origin_pixel(&self) -> Point {
        self.frame.origin_pixel()
    }

    /// Value coordinates under a canvas pixel.
    #[must_use]
    pub fn pixel_to_value(&self, pixel: Point) -> Point {
        let x = &self.frame.x;
        let y = &self.frame.y;
        let xr = x.plot_rect();
        let yr = y.plot_rect();
        let x_extent = x.plot_extent();
        let y_extent = y.plot_extent();
        Point::new(
            x.value_at((pixel.x - xr.x0) / x_extent.width),
            y.value_at((pixel.y - yr.y0) / y_extent.height),
        )
    }

    /// Pixel-space rectangle of the viewport, centered on the canvas origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.viewport.bounds()
    }

    /// The cursor matching the current interaction.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.viewport.is_panning() {
            Cursor::Grab
        } else {
            Cursor::Pointer
        }
    }

    // --- Observers ---

    /// Registers a viewport observer.
    pub fn observe(&mut self, observer: impl FnMut(&ViewportEvent) + 'static) -> ObserverId {
        self.viewport.observe(observer)
    }

    /// Removes a viewport observer.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.viewport.unobserve(id)
    }

    // --- Transitions ---

    /// Recomputes the frame from the viewport and axes.
    ///
    /// The axes follow the viewport's (possibly pinned) center and zoom. The
    /// update time is recorded subject to the viewport's throttle.
    pub fn update(&mut self) -> &GridFrame {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "gridplane_update",
            revision = self.viewport.revision(),
            update = self.updates
        );
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        let center = self.viewport.axis_center();
        let zoom = self.viewport.axis_zoom();
        self.x_axis.set_offset(center.x);
        self.x_axis.set_zoom(zoom);
        self.y_axis.set_offset(center.y);
        self.y_axis.set_zoom(zoom);
        self.frame = GridFrame::compute_with_diagnostics(
            &self.x_axis,
            &self.y_axis,
            self.viewport.size(),
            &mut *self.diagnostics,
        );
        self.updates += 1;
        self.viewport.touch(self.clock_ms);
        &self.frame
    }

    /// Applies a pan/zoom gesture.
    pub fn panzoom(&mut self, gesture: PanZoomGesture) -> bool {
        self.apply(|vp| vp.process_gesture(gesture))
    }

    /// Zooms to `zoom` around the canvas center and queues a settle pass.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let changed = self.viewport.set_zoom(zoom);
        self.settled(SettleReason::ZoomTo);
        changed
    }

    /// Recomputes the canvas origin and queues a settle pass.
    pub fn reset(&mut self) -> bool {
        let changed = self.viewport.reset_view();
        self.settled(SettleReason::Reset);
        changed
    }

    /// Centers on `bounds`, given in value units, and zooms so that it fits
    /// inside the canvas less `padding` pixels on every side.
    ///
    /// The zoom is clamped into the viewport's zoom limits. Empty or
    /// non-finite bounds are ignored.
    pub fn fit_bounds(&mut self, bounds: Rect, padding: f64) -> bool {
        if !(bounds.is_finite() && bounds.width() > 0.0 && bounds.height() > 0.0) {
            self.diagnostics
                .report(Diagnostic::NonFiniteInput { what: "fit bounds" });
            return false;
        }
        let padding = if padding.is_finite() {
            padding.max(0.0)
        } else {
            0.0
        };
        let size = self.viewport.size();
        let available = Size::new(
            (size.width - 2.0 * padding).max(1.0),
            (size.height - 2.0 * padding).max(1.0),
        );
        let zoom = (available.width / bounds.width()).min(available.height / bounds.height());

        let mut changed = self.viewport.set_center(bounds.center());
        changed |= self.viewport.set_zoom(zoom);
        changed |= self.viewport.reset_view();
        self.settled(SettleReason::FitBounds);
        changed
    }

    /// Resizes the canvas and queues a settle pass.
    pub fn resize(&mut self, size: Size) -> bool {
        let changed = self.viewport.set_dimensions(size);
        self.settled(SettleReason::Resize);
        changed
    }

    /// Centers on a `y`-down view point and queues a settle pass.
    pub fn set_view(&mut self, view: Point) -> bool {
        let changed = self.viewport.set_view(view);
        self.settled(SettleReason::SetView);
        changed
    }

    /// Pins the value origin to `corner`, or unpins it.
    pub fn set_origin_pin(&mut self, corner: Option<Corner>) -> bool {
        self.apply(|vp| vp.set_origin_pin(corner))
    }

    /// Sets the pin margin in pixels.
    pub fn set_pin_margin(&mut self, margin: f64) -> bool {
        self.apply(|vp| vp.set_pin_margin(margin))
    }

    /// Sets whether zoom follows the gesture anchor.
    pub fn set_zoom_over_mouse(&mut self, zoom_over_mouse: bool) -> bool {
        self.apply(|vp| vp.set_zoom_over_mouse(zoom_over_mouse))
    }

    /// Sets the interaction mode.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        self.apply(|vp| vp.set_mode(mode))
    }

    /// Sets the smallest allowed zoom.
    pub fn set_min_zoom(&mut self, min_zoom: f64) -> bool {
        self.apply(|vp| vp.set_min_zoom(min_zoom))
    }

    /// Sets the largest allowed zoom.
    pub fn set_max_zoom(&mut self, max_zoom: f64) -> bool {
        self.apply(|vp| vp.set_max_zoom(max_zoom))
    }

    /// Enables or disables gesture zoom.
    pub fn set_zoom_enabled(&mut self, enabled: bool) -> bool {
        self.apply(|vp| vp.set_zoom_enabled(enabled))
    }

    /// Enables or disables gesture pan.
    pub fn set_pan_enabled(&mut self, enabled: bool) -> bool {
        self.apply(|vp| vp.set_pan_enabled(enabled))
    }

    /// Replaces the axis with the same orientation and recomputes the frame.
    ///
    /// The new axis's offset and zoom are overwritten by the viewport.
    pub fn set_axis(&mut self, axis: Axis) {
        match axis.orientation() {
            Orientation::Horizontal => self.x_axis = axis,
            Orientation::Vertical => self.y_axis = axis,
        }
        self.update();
    }

    /// Sets whether the grid is drawn.
    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.show_grid = show_grid;
    }

    // --- Settling and drawing ---

    /// Runs every queued settle pass at `now_ms`.
    ///
    /// Each pass recomputes the frame once. The first pass ever run emits
    /// [`ViewportEvent::Ready`]. Returns the number of passes run.
    pub fn run_settle(&mut self, now_ms: u64) -> usize {
        self.clock_ms = now_ms;
        let mut passes = 0;
        while let Some(reason) = self.settle.pop() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "gridplane", ?reason, "settle pass");
            #[cfg(not(feature = "tracing"))]
            let _ = reason;
            self.update();
            self.viewport.mark_ready();
            passes += 1;
        }
        passes
    }

    /// Draws the current frame into `renderer`.
    ///
    /// With the grid hidden the renderer still sees an empty frame.
    pub fn render_into(&self, renderer: &mut dyn GridRenderer, measurer: &dyn TextMeasurer) {
        if self.show_grid {
            self.frame.render_into(renderer, measurer);
        } else {
            renderer.begin_frame(self.frame.shape());
            renderer.end_frame();
        }
    }

    fn apply(&mut self, transition: impl FnOnce(&mut ViewportState) -> bool) -> bool {
        let changed = transition(&mut self.viewport);
        if changed {
            self.update();
        }
        changed
    }

    fn settled(&mut self, reason: SettleReason) {
        self.update();
        self.settle.schedule(reason);
    }
}

#[cfg(feature = "tracing")]
fn default_sink() -> Box<dyn DiagnosticSink> {
    Box::new(gridplane_axis::TracingDiagnostics)
}

#[cfg(not(feature = "tracing"))]
fn default_sink() -> Box<dyn DiagnosticSink> {
    Box::new(gridplane_axis::NoDiagnostics)
}
