// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events delivered to a surface.
//!
//! Events carry client-space coordinates; the surface derives surface-local
//! positions by subtracting its own origin. Touch events map onto the pointer
//! variants, honoring only the first touch point (single-pointer model).

use kurbo::Point;
use thicket_scene::NodeId;

/// A pointer sample in client space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position in client coordinates.
    pub client: Point,
}

impl PointerInput {
    /// A sample at the given client position.
    #[must_use]
    pub fn at(client: impl Into<Point>) -> Self {
        Self {
            client: client.into(),
        }
    }
}

/// A key press routed to the active editing target.
///
/// Deliberately minimal: printable insertion, backspace, and caret movement.
/// IME, selection, and clipboard are host concerns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable character.
    Character(char),
    /// Delete before the caret.
    Backspace,
    /// Move the caret left.
    ArrowLeft,
    /// Move the caret right.
    ArrowRight,
}

/// A raw input event, as delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse-down / touch-start.
    PointerDown(PointerInput),
    /// Mouse-move / touch-move.
    PointerMove(PointerInput),
    /// Mouse-up / touch-end.
    PointerUp(PointerInput),
    /// Click (press and release on the same surface).
    Click(PointerInput),
    /// Key press for the active editing session.
    Key(KeyInput),
}

impl InputEvent {
    /// Maps a touch-start to [`InputEvent::PointerDown`] using the first
    /// touch point. `None` when the touch list is empty.
    #[must_use]
    pub fn touch_start(touches: &[Point]) -> Option<Self> {
        touches.first().map(|&p| Self::PointerDown(PointerInput { client: p }))
    }

    /// Maps a touch-move to [`InputEvent::PointerMove`] using the first
    /// touch point. `None` when the touch list is empty.
    #[must_use]
    pub fn touch_move(touches: &[Point]) -> Option<Self> {
        touches.first().map(|&p| Self::PointerMove(PointerInput { client: p }))
    }

    /// Maps a touch-end to [`InputEvent::PointerUp`].
    ///
    /// The release position is irrelevant: a drag session ends
    /// unconditionally wherever the pointer is, so an empty remaining-touch
    /// list is fine.
    #[must_use]
    pub fn touch_end(remaining: &[Point]) -> Self {
        let client = remaining.first().copied().unwrap_or(Point::ZERO);
        Self::PointerUp(PointerInput { client })
    }
}

/// What a dispatch did, reported back to the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dispatched {
    /// The node the event routed to, if any.
    pub target: Option<NodeId>,
    /// `true` when the host should suppress default browser/global behavior
    /// (scrolling, text selection) for this event, in particular for every
    /// move of an active drag.
    pub suppress_default: bool,
}
