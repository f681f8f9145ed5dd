// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_imaging --heading-base-level=0

//! Thicket Imaging: the paint surface Thicket renders into.
//!
//! This crate defines [`PaintBackend`], a small, plain-old-data friendly
//! drawing contract, and [`record::Recorder`], a backend that captures every
//! call as a [`PaintOp`] value so render passes can be asserted on in tests
//! without a real drawing surface.
//!
//! The contract is deliberately close to an immediate-mode 2D canvas:
//! scoped save/restore of the current transform, translate/rotate, filled and
//! stroked rectangles, circles, and paths, and text with font, alignment, and
//! baseline settings. Colors are passed per call; there is no retained paint
//! state beyond the transform stack.
//!
//! Concrete backends (a web canvas context, a CPU rasterizer, a GPU scene
//! builder) implement [`PaintBackend`] and live in their own crates; the core
//! only calls these operations from inside a node's render pass.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod record;

use alloc::borrow::Cow;

use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Color;
use peniko::color::palette;

/// Horizontal text alignment relative to the text origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Origin is the left edge of the text run.
    #[default]
    Left,
    /// Origin is the horizontal center of the text run.
    Center,
    /// Origin is the right edge of the text run.
    Right,
}

/// Vertical text baseline relative to the text origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Origin sits on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// Origin is the top of the em box.
    Top,
    /// Origin is the vertical middle of the em box.
    Middle,
}

/// Font, alignment, and color settings for a text draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family name.
    pub family: Cow<'static, str>,
    /// Font size in surface units.
    pub size: f64,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Text color.
    pub color: Color,
}

impl TextStyle {
    /// A style with the given size and color and default family/alignment.
    #[must_use]
    pub fn sized(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            ..Self::default()
        }
    }

    /// Sets the horizontal alignment.
    #[must_use]
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Sets the vertical baseline.
    #[must_use]
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: Cow::Borrowed("sans-serif"),
            size: 16.0,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            color: palette::css::BLACK,
        }
    }
}

/// A 2D paint surface.
///
/// Implementations maintain a transform stack ([`save`](Self::save) /
/// [`restore`](Self::restore) scope [`translate`](Self::translate) and
/// [`rotate`](Self::rotate)); draw calls paint in the current transformed
/// frame. Every `save` must be matched by a `restore` before the pass ends.
pub trait PaintBackend {
    /// Clears the entire surface.
    fn clear(&mut self);

    /// Pushes the current transform.
    fn save(&mut self);

    /// Pops back to the most recently saved transform.
    fn restore(&mut self);

    /// Translates the current frame.
    fn translate(&mut self, offset: Vec2);

    /// Rotates the current frame by `radians` around its origin.
    fn rotate(&mut self, radians: f64);

    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Strokes a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64);

    /// Fills a path.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Strokes a path.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Draws a run of text at `origin`, optionally constrained to
    /// `max_width`.
    fn fill_text(&mut self, text: &str, origin: Point, style: &TextStyle, max_width: Option<f64>);
}
