// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene arena: node identifiers, flags, and initial node data.

use kurbo::{Point, Size};
use peniko::Color;
use peniko::color::palette;

/// Identifier for a node in the scene.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Liveness
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether a `NodeId` still refers
/// to a live node. Stale `NodeId`s never alias a different live node because the generation
/// must match. Geometry operations called with a stale handle are silent no-ops; reads
/// return `None`.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling drag eligibility and offset inheritance.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node may be dragged. Pointer-down on a node without this flag leaves
        /// the drag machinery idle; the event still dispatches for click/press
        /// semantics.
        const DRAGGABLE            = 0b0000_0001;
        /// Node's absolute position includes its ancestors' local coordinates,
        /// and parent moves cascade into this node's stored local position.
        const FOLLOW_PARENT_OFFSET = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::FOLLOW_PARENT_OFFSET
    }
}

/// Initial data for a node: local geometry, paint color, and behavior flags.
///
/// Local position is parent-relative for attached nodes and surface-relative
/// for top-level ones. Sizes must be finite and non-negative; positions must
/// be finite. [`Scene::insert`](crate::Scene::insert) validates both.
#[derive(Clone, Debug)]
pub struct NodeSpec {
    /// Local position of the top-left corner.
    pub origin: Point,
    /// Width and height of the node's box.
    pub size: Size,
    /// Initial rotation in radians. Rendering-only; accumulates via
    /// [`Scene::turn`](crate::Scene::turn).
    pub rotation: f64,
    /// Fill color.
    pub color: Color,
    /// Behavior flags.
    pub flags: NodeFlags,
}

impl NodeSpec {
    /// Creates a spec at the given local position and size, with the default
    /// gray fill and default flags.
    pub fn new(origin: impl Into<Point>, size: impl Into<Size>) -> Self {
        Self {
            origin: origin.into(),
            size: size.into(),
            ..Self::default()
        }
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Replaces the behavior flags wholesale.
    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Marks the node as draggable.
    #[must_use]
    pub fn draggable(mut self) -> Self {
        self.flags |= NodeFlags::DRAGGABLE;
        self
    }

    /// Opts the node out of parent offset inheritance: ancestor positions no
    /// longer contribute to its absolute position, and parent moves no longer
    /// shift it.
    #[must_use]
    pub fn ignoring_parent_offset(mut self) -> Self {
        self.flags -= NodeFlags::FOLLOW_PARENT_OFFSET;
        self
    }
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            size: Size::ZERO,
            rotation: 0.0,
            color: palette::css::GRAY,
            flags: NodeFlags::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_follow_parent_offset() {
        let flags = NodeFlags::default();
        assert!(flags.contains(NodeFlags::FOLLOW_PARENT_OFFSET));
        assert!(!flags.contains(NodeFlags::DRAGGABLE));
    }

    #[test]
    fn spec_builders_compose() {
        let spec = NodeSpec::new((1.0, 2.0), (3.0, 4.0))
            .draggable()
            .ignoring_parent_offset();
        assert_eq!(spec.origin, Point::new(1.0, 2.0));
        assert_eq!(spec.size, Size::new(3.0, 4.0));
        assert!(spec.flags.contains(NodeFlags::DRAGGABLE));
        assert!(!spec.flags.contains(NodeFlags::FOLLOW_PARENT_OFFSET));
    }
}
