// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording [`PaintBackend`] for tests and debugging.
//!
//! [`Recorder`] captures every call as a [`PaintOp`] value, in call order, and
//! tracks save/restore balance. Tests drive a render pass against it and then
//! assert on the recorded sequence: what was painted, in what order, and under
//! which transforms.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Color;

use crate::{PaintBackend, TextStyle};

/// One recorded paint call.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// [`PaintBackend::clear`].
    Clear,
    /// [`PaintBackend::save`].
    Save,
    /// [`PaintBackend::restore`].
    Restore,
    /// [`PaintBackend::translate`].
    Translate(Vec2),
    /// [`PaintBackend::rotate`].
    Rotate(f64),
    /// [`PaintBackend::fill_rect`].
    FillRect {
        /// Rectangle in the current frame.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`PaintBackend::stroke_rect`].
    StrokeRect {
        /// Rectangle in the current frame.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`PaintBackend::fill_circle`].
    FillCircle {
        /// Center in the current frame.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// [`PaintBackend::stroke_circle`].
    StrokeCircle {
        /// Center in the current frame.
        center: Point,
        /// Radius.
        radius: f64,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`PaintBackend::fill_path`].
    FillPath {
        /// The path in the current frame.
        path: BezPath,
        /// Fill color.
        color: Color,
    },
    /// [`PaintBackend::stroke_path`].
    StrokePath {
        /// The path in the current frame.
        path: BezPath,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`PaintBackend::fill_text`].
    FillText {
        /// The text run.
        text: String,
        /// Origin in the current frame.
        origin: Point,
        /// Font/alignment/color settings.
        style: TextStyle,
        /// Optional width constraint.
        max_width: Option<f64>,
    },
}

/// Records paint calls for later assertion.
///
/// ```
/// use kurbo::{Rect, Vec2};
/// use peniko::color::palette;
/// use thicket_imaging::PaintBackend;
/// use thicket_imaging::record::{PaintOp, Recorder};
///
/// let mut recorder = Recorder::new();
/// recorder.save();
/// recorder.translate(Vec2::new(5.0, 5.0));
/// recorder.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), palette::css::RED);
/// recorder.restore();
///
/// assert_eq!(recorder.ops.len(), 4);
/// assert!(recorder.save_restore_balanced());
/// assert!(matches!(recorder.ops[2], PaintOp::FillRect { .. }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// Recorded calls, in call order.
    pub ops: Vec<PaintOp>,
    depth: u32,
    underflowed: bool,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if every `save` was matched by a `restore` and no
    /// `restore` ran on an empty stack.
    #[must_use]
    pub fn save_restore_balanced(&self) -> bool {
        self.depth == 0 && !self.underflowed
    }

    /// Number of currently unmatched `save`s.
    #[must_use]
    pub fn open_saves(&self) -> u32 {
        self.depth
    }

    /// Indices of ops matching `predicate`, in call order.
    pub fn positions<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(&PaintOp) -> bool,
    {
        self.ops
            .iter()
            .enumerate()
            .filter_map(|(i, op)| predicate(op).then_some(i))
            .collect()
    }
}

impl PaintBackend for Recorder {
    fn clear(&mut self) {
        self.ops.push(PaintOp::Clear);
    }

    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            self.underflowed = true;
        } else {
            self.depth -= 1;
        }
        self.ops.push(PaintOp::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(PaintOp::Translate(offset));
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(PaintOp::Rotate(radians));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokeRect { rect, color, width });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(PaintOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.ops.push(PaintOp::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokePath {
            path: path.clone(),
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, style: &TextStyle, max_width: Option<f64>) {
        self.ops.push(PaintOp::FillText {
            text: text.to_string(),
            origin,
            style: style.clone(),
            max_width,
        });
    }
}
