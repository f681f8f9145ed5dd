// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface shape variants implement.

use kurbo::Point;
use thicket_imaging::PaintBackend;
use thicket_scene::{NodeId, Scene, Update};

use crate::input::KeyInput;
use crate::paint;

/// A mouse-event notification delivered to a node (and, for clicks, to its
/// whole subtree).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Notice {
    /// What happened.
    pub kind: NoticeKind,
    /// Pointer position in surface coordinates.
    pub position: Point,
}

/// The kind of a [`Notice`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Pointer-down on the node (delivered to the hit node only).
    Press,
    /// Pointer-up after a press on the node (delivered to the press target
    /// only, wherever the pointer is now).
    Release,
    /// Click. Broadcast to the hit node and then every descendant,
    /// unconditionally — receivers must not assume the position lies inside
    /// their own bounds.
    Click,
}

/// A request a shape hands back from [`Shape::notified`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NoticeOutcome {
    /// Nothing for the surface to do.
    #[default]
    None,
    /// Toggle this node's text-editing session on the surface.
    ToggleEditing,
}

/// How the surface should apply a drag move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragMotion {
    /// Move the node to the grab-preserving position (the default).
    #[default]
    MoveNode,
    /// The shape consumed the motion itself (e.g. a slider updating its
    /// value); the node stays where it is.
    Handled,
}

/// Behavior attached to a scene node.
///
/// Every method has a default, so a variant overrides only what it needs:
/// a plain colored box overrides nothing, a slider overrides `inside_test`
/// and `drag_moved`, a text field overrides `notified` and `key_input`.
///
/// Shapes receive `&mut Scene` in their mutation hooks and may freely update
/// geometry, state, and props; resulting [`Update`] records are delivered
/// after the current dispatch finishes, never reentrantly.
pub trait Shape {
    /// Paints the node.
    ///
    /// The default paints the node's rectangle: translate to the box center,
    /// rotate by the accumulated rotation, fill, outline, restore. Children
    /// are rendered by the surface *after* this returns, outside the rotated
    /// frame: child layout never rotates with the parent.
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        paint::paint_box(scene, id, target);
    }

    /// Hit test in surface coordinates.
    ///
    /// The default is closed axis-aligned containment against the node's
    /// absolute bounds, ignoring rotation.
    fn inside_test(&self, scene: &Scene, id: NodeId, point: Point) -> bool {
        scene.point_inside(id, point)
    }

    /// A [`Notice`] arrived (press/release on the target, or the click
    /// broadcast).
    fn notified(&mut self, _scene: &mut Scene, _id: NodeId, _notice: &Notice) -> NoticeOutcome {
        NoticeOutcome::None
    }

    /// A drag session began on this node.
    fn drag_started(&mut self, _scene: &mut Scene, _id: NodeId, _pointer: Point) {}

    /// The pointer moved during a drag session on this node.
    ///
    /// `pointer` is the raw surface-local pointer position; `to` is the
    /// grab-preserving node position the surface is about to apply.
    fn drag_moved(
        &mut self,
        _scene: &mut Scene,
        _id: NodeId,
        _pointer: Point,
        _to: Point,
    ) -> DragMotion {
        DragMotion::MoveNode
    }

    /// The drag session on this node ended.
    fn drag_ended(&mut self, _scene: &mut Scene, _id: NodeId) {}

    /// A key press arrived while this node holds the editing session.
    fn key_input(&mut self, _scene: &mut Scene, _id: NodeId, _key: &KeyInput) {}

    /// The surface ended this node's editing session (usually because another
    /// node began one).
    fn editing_ended(&mut self, _scene: &mut Scene, _id: NodeId) {}

    /// The node was inserted into the scene.
    fn mounted(&mut self, _scene: &mut Scene, _id: NodeId) {}

    /// A drained mutation record for this node.
    fn updated(&mut self, _scene: &mut Scene, _id: NodeId, _update: &Update) {}

    /// The node is being removed; its handle is already stale.
    fn unmounting(&mut self, _scene: &mut Scene, _id: NodeId) {}
}

/// The no-override shape: a plain colored, outlined rectangle.
#[derive(Copy, Clone, Debug, Default)]
pub struct BoxShape;

impl Shape for BoxShape {}
