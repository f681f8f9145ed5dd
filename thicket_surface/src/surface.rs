// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface: top-level node list, dispatch, and the render pass.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;
use thicket_event_state::drag::DragState;
use thicket_event_state::editing::{EditingState, EditingTransition};
use thicket_imaging::PaintBackend;
use thicket_scene::{AttachError, GeometryError, NodeId, NodeSpec, Scene, UpdateKind};

use crate::input::{Dispatched, InputEvent, KeyInput, PointerInput};
use crate::paint;
use crate::shape::{DragMotion, Notice, NoticeKind, NoticeOutcome, Shape};

/// Owner of the scene, the top-level node list, and all interaction state.
///
/// Everything runs synchronously on the caller's thread: a dispatch or a
/// render runs to completion before the next one starts, and events are
/// processed strictly in delivery order. There is exactly one drag session
/// and one editing session per surface.
pub struct Surface {
    scene: Scene,
    shapes: HashMap<NodeId, Box<dyn Shape>>,
    /// Top-level nodes; insertion order is back-to-front paint order.
    roots: Vec<NodeId>,
    /// Client-space origin of the surface, subtracted from incoming pointer
    /// positions.
    origin: Point,
    /// The node hit by the last pointer-down, until the matching pointer-up.
    /// Mirrors the drag machinery but is kept even for non-draggable nodes,
    /// for click/press semantics.
    candidate: Option<NodeId>,
    drag: DragState<NodeId>,
    editing: EditingState<NodeId>,
}

impl Surface {
    /// Creates an empty surface with its origin at the client origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            shapes: HashMap::new(),
            roots: Vec::new(),
            origin: Point::ZERO,
            candidate: None,
            drag: DragState::default(),
            editing: EditingState::default(),
        }
    }

    /// Creates an empty surface whose element sits at `origin` in client
    /// space.
    #[must_use]
    pub fn with_origin(origin: impl Into<Point>) -> Self {
        let mut surface = Self::new();
        surface.origin = origin.into();
        surface
    }

    /// Updates the surface's client-space origin (e.g. after the host element
    /// moved).
    pub fn set_origin(&mut self, origin: impl Into<Point>) {
        self.origin = origin.into();
    }

    /// Read access to the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene for direct geometry/state operations.
    ///
    /// Records queue up as usual; call [`Surface::flush_updates`] (or let the
    /// next dispatch do it) to deliver the hooks.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Inserts a node with the given shape behavior. The shape's `mounted`
    /// hook fires before this returns.
    pub fn spawn(
        &mut self,
        spec: NodeSpec,
        shape: Box<dyn Shape>,
    ) -> Result<NodeId, GeometryError> {
        let id = self.scene.insert(spec)?;
        self.shapes.insert(id, shape);
        self.flush_updates();
        Ok(id)
    }

    /// Inserts a node with no shape override: it hit-tests by its box and
    /// paints as a plain outlined rectangle.
    pub fn spawn_default(&mut self, spec: NodeSpec) -> Result<NodeId, GeometryError> {
        let id = self.scene.insert(spec)?;
        self.flush_updates();
        Ok(id)
    }

    /// Appends `id` to the top-level list (in front of existing roots).
    ///
    /// Returns `false` for a stale handle, an attached child, or a node that
    /// is already a root.
    pub fn add_root(&mut self, id: NodeId) -> bool {
        if !self.scene.is_alive(id)
            || self.scene.parent(id).is_some()
            || self.roots.contains(&id)
        {
            return false;
        }
        self.roots.push(id);
        true
    }

    /// The top-level nodes, back to front.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Attaches `child` under `parent` (see [`Scene::attach`]) and drops the
    /// child from the top-level list if it was there.
    pub fn adopt(&mut self, parent: NodeId, child: NodeId) -> Result<(), AttachError> {
        self.scene.attach(parent, child)?;
        self.roots.retain(|&root| root != child);
        Ok(())
    }

    /// Removes `id` and its subtree from the surface and the scene.
    ///
    /// `unmounting` hooks fire (node first, then descendants), their shapes
    /// are dropped, and any drag/editing session referencing a removed node
    /// is cleared.
    pub fn remove(&mut self, id: NodeId) {
        self.scene.remove(id);
        self.flush_updates();
    }

    /// Resolves which node a surface-local point falls on.
    ///
    /// Scans **top-level** nodes only, from last-added (frontmost) to
    /// first-added, and returns the first whose `inside_test` holds. Children
    /// are reachable only through the click broadcast, not through selection.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        for &id in self.roots.iter().rev() {
            let inside = match self.shapes.get(&id) {
                Some(shape) => shape.inside_test(&self.scene, id, point),
                None => self.scene.point_inside(id, point),
            };
            if inside {
                return Some(id);
            }
        }
        None
    }

    /// The node currently being dragged, if any.
    #[must_use]
    pub fn drag_target(&self) -> Option<NodeId> {
        self.drag.target()
    }

    /// The node currently editing, if any.
    #[must_use]
    pub fn editing_target(&self) -> Option<NodeId> {
        self.editing.target()
    }

    /// Ends any active drag session without waiting for a pointer-up.
    ///
    /// A lost pointer-up otherwise leaves the session stuck; this is the
    /// explicit escape hatch for host policies like cancel-on-blur.
    pub fn cancel_drag(&mut self) {
        if let Some(id) = self.drag.target() {
            if let Some(shape) = self.shapes.get_mut(&id) {
                shape.drag_ended(&mut self.scene, id);
            }
        }
        self.drag.end();
        self.candidate = None;
        self.flush_updates();
    }

    /// Routes one input event, then delivers drained update records to the
    /// owning shapes' hooks.
    pub fn dispatch(&mut self, event: InputEvent) -> Dispatched {
        let outcome = match event {
            InputEvent::PointerDown(pointer) => self.on_pointer_down(pointer),
            InputEvent::PointerMove(pointer) => self.on_pointer_move(pointer),
            InputEvent::PointerUp(pointer) => self.on_pointer_up(pointer),
            InputEvent::Click(pointer) => self.on_click(pointer),
            InputEvent::Key(key) => self.on_key(&key),
        };
        self.flush_updates();
        outcome
    }

    fn to_local(&self, client: Point) -> Point {
        client - self.origin.to_vec2()
    }

    fn on_pointer_down(&mut self, pointer: PointerInput) -> Dispatched {
        let local = self.to_local(pointer.client);
        let hit = self.hit_test(local);
        self.candidate = hit;
        if let Some(id) = hit {
            // Capture the grab offset at the instant of the press; only
            // draggable nodes start a session, but the press itself is still
            // delivered for click/press semantics.
            if self.scene.is_draggable(id) {
                if let Some(abs) = self.scene.absolute_position(id) {
                    self.drag.start(id, local, abs);
                    if let Some(shape) = self.shapes.get_mut(&id) {
                        shape.drag_started(&mut self.scene, id, local);
                    }
                }
            }
            self.notify_one(
                id,
                Notice {
                    kind: NoticeKind::Press,
                    position: local,
                },
            );
        }
        Dispatched {
            target: hit,
            suppress_default: hit.is_some(),
        }
    }

    fn on_pointer_move(&mut self, pointer: PointerInput) -> Dispatched {
        let local = self.to_local(pointer.client);
        let Some((id, to)) = self.drag.position_for(local) else {
            return Dispatched::default();
        };
        let motion = match self.shapes.get_mut(&id) {
            Some(shape) => shape.drag_moved(&mut self.scene, id, local, to),
            None => DragMotion::MoveNode,
        };
        if motion == DragMotion::MoveNode {
            self.scene.move_to(id, to);
        }
        Dispatched {
            target: Some(id),
            suppress_default: true,
        }
    }

    fn on_pointer_up(&mut self, pointer: PointerInput) -> Dispatched {
        let local = self.to_local(pointer.client);
        let released = self.candidate.take();
        if let Some(id) = released {
            if self.drag.is_dragging_target(id) {
                if let Some(shape) = self.shapes.get_mut(&id) {
                    shape.drag_ended(&mut self.scene, id);
                }
            }
            self.notify_one(
                id,
                Notice {
                    kind: NoticeKind::Release,
                    position: local,
                },
            );
        }
        // Unconditional, wherever the pointer is now.
        self.drag.end();
        Dispatched {
            target: released,
            suppress_default: released.is_some(),
        }
    }

    fn on_click(&mut self, pointer: PointerInput) -> Dispatched {
        let local = self.to_local(pointer.client);
        let hit = self.hit_test(local);
        if let Some(id) = hit {
            // Broadcast: the hit node first, then every descendant in
            // pre-order, with no further hit testing.
            let notice = Notice {
                kind: NoticeKind::Click,
                position: local,
            };
            for node in self.scene.subtree(id) {
                self.notify_one(node, notice);
            }
        }
        Dispatched {
            target: hit,
            suppress_default: false,
        }
    }

    fn on_key(&mut self, key: &KeyInput) -> Dispatched {
        let Some(id) = self.editing.target() else {
            return Dispatched::default();
        };
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.key_input(&mut self.scene, id, key);
        }
        Dispatched {
            target: Some(id),
            suppress_default: true,
        }
    }

    fn notify_one(&mut self, id: NodeId, notice: Notice) {
        let Some(shape) = self.shapes.get_mut(&id) else {
            return;
        };
        match shape.notified(&mut self.scene, id, &notice) {
            NoticeOutcome::None => {}
            NoticeOutcome::ToggleEditing => self.toggle_editing(id),
        }
    }

    fn toggle_editing(&mut self, id: NodeId) {
        match self.editing.toggle(id) {
            EditingTransition::Began { ended: Some(previous) } => {
                if let Some(shape) = self.shapes.get_mut(&previous) {
                    shape.editing_ended(&mut self.scene, previous);
                }
            }
            EditingTransition::Began { ended: None } | EditingTransition::Ended => {}
        }
    }

    /// Delivers drained scene records to the owning shapes' lifecycle hooks.
    ///
    /// One drain pass per call: records pushed by the hooks themselves queue
    /// up for the next flush, so hooks never observe a half-delivered batch.
    pub fn flush_updates(&mut self) {
        for update in self.scene.drain_updates() {
            match &update.kind {
                UpdateKind::Mounted => {
                    if let Some(shape) = self.shapes.get_mut(&update.node) {
                        shape.mounted(&mut self.scene, update.node);
                    }
                }
                UpdateKind::Unmounting => {
                    if let Some(mut shape) = self.shapes.remove(&update.node) {
                        shape.unmounting(&mut self.scene, update.node);
                    }
                    self.forget(update.node);
                }
                _ => {
                    if let Some(shape) = self.shapes.get_mut(&update.node) {
                        shape.updated(&mut self.scene, update.node, &update);
                    }
                }
            }
        }
    }

    fn forget(&mut self, id: NodeId) {
        self.roots.retain(|&root| root != id);
        if self.candidate == Some(id) {
            self.candidate = None;
        }
        if self.drag.is_dragging_target(id) {
            self.drag.end();
        }
        if self.editing.is_editing(id) {
            self.editing.end();
        }
    }

    /// Renders one frame: clears the surface, then paints every top-level
    /// node in insertion order (back to front), recursing into children.
    ///
    /// Children derive their own absolute positions from the full
    /// ancestor-offset sum; a parent's rotated frame is restored before its
    /// children paint.
    pub fn render_frame(&self, target: &mut dyn PaintBackend) {
        target.clear();
        for &root in &self.roots {
            self.render_node(root, target);
        }
    }

    fn render_node(&self, id: NodeId, target: &mut dyn PaintBackend) {
        if !self.scene.is_alive(id) {
            return;
        }
        match self.shapes.get(&id) {
            Some(shape) => shape.render(&self.scene, id, target),
            None => paint::paint_box(&self.scene, id, target),
        }
        for &child in self.scene.children(id) {
            self.render_node(child, target);
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("roots", &self.roots)
            .field("nodes", &self.scene.len())
            .field("origin", &self.origin)
            .field("drag_target", &self.drag.target())
            .field("editing_target", &self.editing.target())
            .finish_non_exhaustive()
    }
}
