// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label measurement.
//!
//! Label clamping needs the size of each label. Shaping belongs to the
//! renderer, so the grid engine only depends on this small trait.

use kurbo::Size;

/// Measures a single line of label text.
pub trait TextMeasurer {
    /// Size of `text` set at `font_size` pixels.
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Estimates text extents from the character count.
///
/// Assumes an average glyph advance of `0.6em` and a line height of `1em`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let width = 0.6 * font_size * text.chars().count() as f64;
        Size::new(width, font_size)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        (**self).measure(text, font_size)
    }
}
