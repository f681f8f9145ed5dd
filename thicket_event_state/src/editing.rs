// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive text-editing session state.
//!
//! At most one target edits at a time. The owner (typically a surface) holds
//! this state and routes key events to the active target, instead of each
//! editable widget registering a document-global key listener. That keeps the
//! behavior testable without a real input source and makes "who receives
//! keys" explicit.
//!
//! ```
//! use thicket_event_state::editing::{EditingState, EditingTransition};
//!
//! let mut editing = EditingState::default();
//!
//! assert_eq!(editing.toggle(1_u32), EditingTransition::Began { ended: None });
//! assert!(editing.is_editing(1));
//!
//! // Toggling a different target displaces the first.
//! assert_eq!(editing.toggle(2), EditingTransition::Began { ended: Some(1) });
//!
//! // Toggling the active target ends its session.
//! assert_eq!(editing.toggle(2), EditingTransition::Ended);
//! assert_eq!(editing.target(), None);
//! ```

/// Tracks the single active editing target, if any.
#[derive(Debug, Clone, Copy)]
pub struct EditingState<K> {
    target: Option<K>,
}

impl<K> Default for EditingState<K> {
    fn default() -> Self {
        Self { target: None }
    }
}

/// Result of [`EditingState::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingTransition<K> {
    /// A session began for the toggled target; `ended` is a displaced
    /// previous target, if there was one.
    Began {
        /// The target whose session this toggle displaced.
        ended: Option<K>,
    },
    /// The toggled target was already active; its session ended.
    Ended,
}

impl<K: Copy + PartialEq> EditingState<K> {
    /// Begins a session for `target`, or ends it if `target` is already the
    /// active one.
    pub fn toggle(&mut self, target: K) -> EditingTransition<K> {
        if self.target == Some(target) {
            self.target = None;
            EditingTransition::Ended
        } else {
            let ended = self.target.replace(target);
            EditingTransition::Began { ended }
        }
    }

    /// Ends any active session, returning the displaced target.
    pub fn end(&mut self) -> Option<K> {
        self.target.take()
    }

    /// The active editing target, if any.
    #[must_use]
    pub fn target(&self) -> Option<K> {
        self.target
    }

    /// Returns `true` if `target` is the active editing target.
    #[must_use]
    pub fn is_editing(&self, target: K) -> bool {
        self.target == Some(target)
    }
}
