// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state: capture a grab offset at press time and derive node
//! positions from later pointer positions.
//!
//! ## Usage
//!
//! 1) On a qualifying press, call [`DragState::start`] with the pressed
//!    target, the pointer position, and the target's absolute position.
//! 2) On each move event, call [`DragState::position_for`] to get the node
//!    position that keeps the original grab offset.
//! 3) End the session with [`DragState::end`]; a pointer release ends it
//!    unconditionally, wherever the pointer is.
//!
//! A session that never sees its release stays active until [`DragState::end`]
//! is called; recovery policy (blur, timeout) belongs to the owner.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use thicket_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Press at (50, 50) on a node whose absolute position is (40, 40).
//! drag.start(7_u32, Point::new(50.0, 50.0), Point::new(40.0, 40.0));
//! assert!(drag.is_dragging());
//!
//! // Move to (70, 70): the node position preserves the (10, 10) grab offset.
//! let (target, pos) = drag.position_for(Point::new(70.0, 70.0)).unwrap();
//! assert_eq!(target, 7);
//! assert_eq!(pos, Point::new(60.0, 60.0));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one drag session: idle, or dragging a target with a captured grab
/// offset.
///
/// `K` is the application's node key type.
#[derive(Debug, Clone, Copy)]
pub struct DragState<K> {
    session: Option<Session<K>>,
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        Self { session: None }
    }
}

#[derive(Debug, Clone, Copy)]
struct Session<K> {
    target: K,
    /// Pointer position minus the target's absolute position at press time.
    grab: Vec2,
}

impl<K: Copy + PartialEq> DragState<K> {
    /// Starts a session for `target`, capturing the grab offset
    /// `pointer - target_position` at the instant of the press.
    ///
    /// Overwrites any previous session.
    pub fn start(&mut self, target: K, pointer: Point, target_position: Point) {
        self.session = Some(Session {
            target,
            grab: pointer - target_position,
        });
    }

    /// While dragging, the target and the node position that keeps the grab
    /// offset for the given pointer position. `None` when idle.
    #[must_use]
    pub fn position_for(&self, pointer: Point) -> Option<(K, Point)> {
        let session = self.session.as_ref()?;
        Some((session.target, pointer - session.grab))
    }

    /// The dragged target, if a session is active.
    #[must_use]
    pub fn target(&self) -> Option<K> {
        self.session.as_ref().map(|session| session.target)
    }

    /// The captured grab offset, if a session is active.
    #[must_use]
    pub fn grab_offset(&self) -> Option<Vec2> {
        self.session.as_ref().map(|session| session.grab)
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` if `target` is the active session's target.
    #[must_use]
    pub fn is_dragging_target(&self, target: K) -> bool {
        self.target() == Some(target)
    }

    /// Ends the session unconditionally and returns to idle.
    pub fn end(&mut self) {
        self.session = None;
    }
}
