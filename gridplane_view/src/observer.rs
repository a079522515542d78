// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use crate::{Corner, Mode};

/// Most maps have one or two observers; keep them inline.
const INLINE_OBSERVERS: usize = 2;

/// What kind of transition produced a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// [`set_zoom`](crate::ViewportState::set_zoom).
    Zoom,
    /// [`process_gesture`](crate::ViewportState::process_gesture).
    PanZoom,
    /// [`set_dimensions`](crate::ViewportState::set_dimensions).
    Dimensions,
    /// [`set_mode`](crate::ViewportState::set_mode).
    Mode,
    /// [`set_origin_pin`](crate::ViewportState::set_origin_pin).
    OriginPin,
    /// [`set_pin_margin`](crate::ViewportState::set_pin_margin).
    PinMargin,
    /// [`set_min_zoom`](crate::ViewportState::set_min_zoom) or
    /// [`set_max_zoom`](crate::ViewportState::set_max_zoom).
    ZoomLimits,
    /// [`set_center`](crate::ViewportState::set_center).
    Center,
    /// [`set_view`](crate::ViewportState::set_view).
    View,
    /// [`reset_view`](crate::ViewportState::reset_view).
    ResetView,
    /// [`set_zoom_over_mouse`](crate::ViewportState::set_zoom_over_mouse).
    ZoomOverMouse,
    /// [`set_zoom_enabled`](crate::ViewportState::set_zoom_enabled).
    ZoomEnabled,
    /// [`set_pan_enabled`](crate::ViewportState::set_pan_enabled).
    PanEnabled,
    /// [`set_deltas`](crate::ViewportState::set_deltas).
    Deltas,
    /// [`set_anchor`](crate::ViewportState::set_anchor).
    Anchor,
}

/// Plain copy of every observable viewport field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSnapshot {
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
    /// Canvas origin, `-size / 2`.
    pub origin: Point,
    /// Interaction mode.
    pub mode: Mode,
    /// Pinned corner.
    pub origin_pin: Option<Corner>,
    /// Pin margin in pixels.
    pub pin_margin: f64,
    /// Zoom follows the gesture anchor.
    pub zoom_over_mouse: bool,
    /// Gestures may zoom.
    pub zoom_enabled: bool,
    /// Gestures may pan.
    pub pan_enabled: bool,
    /// Pan delta of the last gesture.
    pub deltas: Vec2,
    /// Anchor of the last gesture.
    pub anchor: Point,
    /// The last gesture used the alternate button.
    pub is_right: bool,
    /// Revision counter.
    pub revision: u64,
}

/// A committed change with the state on either side of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportChange {
    /// Which transition ran.
    pub kind: ChangeKind,
    /// State before the transition.
    pub previous: ViewportSnapshot,
    /// State after the transition.
    pub next: ViewportSnapshot,
}

/// A viewport notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// Any observable field changed.
    Changed(ViewportChange),
    /// The pinned corner changed; follows the matching `Changed`.
    OriginPinChanged(Option<Corner>),
    /// The pin margin changed; follows the matching `Changed`.
    PinMarginChanged(f64),
    /// The first settle pass completed. Emitted once.
    Ready,
}

/// Handle returned by [`ViewportState::observe`](crate::ViewportState::observe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&ViewportEvent)>;

/// Registered observers, called in registration order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    entries: SmallVec<[(ObserverId, Observer); INLINE_OBSERVERS]>,
    next_id: u64,
}

impl ObserverRegistry {
    pub(crate) fn insert(&mut self, observer: Observer) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let Some(index) = self.entries.iter().position(|(k, _)| *k == id) else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, event: &ViewportEvent) {
        for (_, observer) in &mut self.entries {
            observer(event);
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn observers_run_in_order_until_removed() {
        let hits = Rc::new(Cell::new(0_u32));
        let mut registry = ObserverRegistry::default();
        let first = {
            let hits = hits.clone();
            registry.insert(Box::new(move |_| hits.set(hits.get() + 1)))
        };
        let second = {
            let hits = hits.clone();
            registry.insert(Box::new(move |_| hits.set(hits.get() * 10)))
        };
        assert_ne!(first, second);

        registry.emit(&ViewportEvent::Ready);
        assert_eq!(hits.get(), 10);

        assert!(registry.remove(second));
        assert!(!registry.remove(second));
        registry.emit(&ViewportEvent::Ready);
        assert_eq!(hits.get(), 11);
        assert_eq!(registry.len(), 1);
    }
}
