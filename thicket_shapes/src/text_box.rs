// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text display box with optional in-place editing.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use peniko::color::palette;
use thicket_imaging::{PaintBackend, TextBaseline, TextStyle};
use thicket_scene::{NodeId, NodeSpec, Scene};
use thicket_surface::{
    KeyInput, Notice, NoticeKind, NoticeOutcome, Shape, paint_box, with_node_frame,
};

/// A box of text with a caret-based editing mode.
///
/// Clicking an editable box toggles its editing session on the surface, which
/// then routes key input here. Key handling stays minimal: printable
/// insertion, backspace, and caret movement. The caret is a `char` offset, so
/// multi-byte text edits stay on character boundaries.
pub struct TextBox {
    text: String,
    text_color: Color,
    editable: bool,
    editing: bool,
    /// Caret position as a `char` offset into `text`.
    cursor: usize,
}

impl TextBox {
    /// A read-only text box with the caret parked at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            text_color: palette::css::BLACK,
            editable: false,
            editing: false,
            cursor,
        }
    }

    /// Makes the box editable: clicks toggle an editing session.
    #[must_use]
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// The node spec text boxes conventionally use: white, not draggable.
    pub fn spec(origin: impl Into<Point>, size: impl Into<Size>) -> NodeSpec {
        NodeSpec::new(origin, size).with_color(palette::css::WHITE)
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` while this box renders a caret.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Byte offset of the caret's `char` offset.
    fn byte_cursor(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// The text with the caret glyph spliced in while editing.
    fn display_text(&self) -> String {
        if self.editing {
            let at = self.byte_cursor();
            let mut shown = String::with_capacity(self.text.len() + 1);
            shown.push_str(&self.text[..at]);
            shown.push('|');
            shown.push_str(&self.text[at..]);
            shown
        } else {
            self.text.clone()
        }
    }
}

impl Shape for TextBox {
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        paint_box(scene, id, target);
        with_node_frame(scene, id, target, |target, local| {
            let style = TextStyle::sized(16.0, self.text_color).baseline(TextBaseline::Top);
            target.fill_text(
                &self.display_text(),
                Point::new(local.x0 + 5.0, local.y0 + 5.0),
                &style,
                Some(local.width() - 10.0),
            );
            if self.editable {
                // Edit affordance along the right edge.
                target.fill_rect(
                    Rect::new(local.x1 - 20.0, local.y0, local.x1, local.y1),
                    Color::from_rgba8(0, 0, 0, 25),
                );
                target.fill_text(
                    "\u{270e}",
                    Point::new(local.x1 - 15.0, local.y0 + 5.0),
                    &style,
                    None,
                );
            }
        });
    }

    fn notified(&mut self, _scene: &mut Scene, _id: NodeId, notice: &Notice) -> NoticeOutcome {
        if notice.kind == NoticeKind::Click && self.editable {
            self.editing = !self.editing;
            NoticeOutcome::ToggleEditing
        } else {
            NoticeOutcome::None
        }
    }

    fn editing_ended(&mut self, _scene: &mut Scene, _id: NodeId) {
        self.editing = false;
    }

    fn key_input(&mut self, _scene: &mut Scene, _id: NodeId, key: &KeyInput) {
        match key {
            KeyInput::Character(c) => {
                let at = self.byte_cursor();
                self.text.insert(at, *c);
                self.cursor += 1;
            }
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_cursor();
                    self.text.remove(at);
                }
            }
            KeyInput::ArrowLeft => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyInput::ArrowRight => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
            }
        }
    }
}

impl fmt::Debug for TextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBox")
            .field("text", &self.text)
            .field("editable", &self.editable)
            .field("editing", &self.editing)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
