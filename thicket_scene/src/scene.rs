// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node arena and its mutation operations.

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use peniko::Color;

use crate::error::{AttachError, GeometryError};
use crate::props::{PropMap, PropValue};
use crate::types::{NodeFlags, NodeId, NodeSpec};
use crate::update::{Update, UpdateKind};

#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) origin: Point,
    pub(crate) size: Size,
    pub(crate) rotation: f64,
    pub(crate) color: Color,
    pub(crate) flags: NodeFlags,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) state: PropMap,
    pub(crate) props: PropMap,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<NodeData>,
}

/// Arena of scene nodes.
///
/// The scene owns every node's data and the parent/child relations between
/// them. Parent links are non-owning back-references; a child's lifetime
/// belongs to the scene slot, and membership in a parent's `children`
/// sequence defines unique render/event ownership.
///
/// Mutations record [`Update`]s; see [`Scene::drain_updates`].
#[derive(Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    updates: Vec<Update>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns `true` if no nodes are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `id` still refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.data(id).is_some()
    }

    pub(crate) fn data(&self, id: NodeId) -> Option<&NodeData> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_ref()
    }

    fn data_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_mut()
    }

    /// Inserts a new, detached node and records [`UpdateKind::Mounted`].
    ///
    /// Validates the spec's geometry: positions must be finite, sizes finite
    /// and non-negative.
    pub fn insert(&mut self, spec: NodeSpec) -> Result<NodeId, GeometryError> {
        validate_point(spec.origin)?;
        validate_size(spec.size)?;
        let id = self.alloc(NodeData {
            origin: spec.origin,
            size: spec.size,
            rotation: spec.rotation,
            color: spec.color,
            flags: spec.flags,
            parent: None,
            children: Vec::new(),
            state: PropMap::new(),
            props: PropMap::new(),
        });
        self.updates.push(Update {
            node: id,
            kind: UpdateKind::Mounted,
        });
        Ok(id)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "scenes do not approach u32::MAX slots"
    )]
    fn alloc(&mut self, node: NodeData) -> NodeId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        }
    }

    /// Removes `id` and its whole subtree, recording [`UpdateKind::Unmounting`]
    /// for each removed node (node first, then its descendants).
    ///
    /// No-op on a stale handle.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.detach(id);
        for node in self.subtree(id) {
            self.updates.push(Update {
                node,
                kind: UpdateKind::Unmounting,
            });
            let slot = &mut self.slots[node.idx()];
            slot.node = None;
            self.free.push(node.0);
        }
    }

    /// The node and all of its descendants, in pre-order (node before its
    /// children). Empty for a stale handle.
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.is_alive(id) {
            self.collect_subtree(id, &mut out);
        }
        out
    }

    fn collect_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &child in self.children(id) {
            self.collect_subtree(child, out);
        }
    }

    /// Appends `child` to `parent`'s children sequence.
    ///
    /// Rejects stale handles, a child that already has a parent (detach
    /// first; re-parenting is never automatic), and any assignment that
    /// would make a node its own ancestor.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), AttachError> {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return Err(AttachError::Stale);
        }
        if self.parent(child).is_some() {
            return Err(AttachError::AlreadyAttached);
        }
        let mut cursor = Some(parent);
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(AttachError::WouldCycle);
            }
            cursor = self.parent(ancestor);
        }
        if let Some(node) = self.data_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.data_mut(parent) {
            node.children.push(child);
        }
        Ok(())
    }

    /// Removes `child` from its parent's children sequence, leaving the child
    /// (and its own subtree) alive as a detached tree.
    ///
    /// Geometry operations stay well-defined on detached nodes. No-op if the
    /// child is stale or has no parent.
    pub fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        if let Some(node) = self.data_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.data_mut(child) {
            node.parent = None;
        }
    }

    /// The node's parent, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id)?.parent
    }

    /// The node's children in order. Empty for stale handles.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.data(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Local (parent-relative) position.
    #[must_use]
    pub fn origin(&self, id: NodeId) -> Option<Point> {
        Some(self.data(id)?.origin)
    }

    /// Node size.
    #[must_use]
    pub fn size(&self, id: NodeId) -> Option<Size> {
        Some(self.data(id)?.size)
    }

    /// Accumulated rotation in radians.
    #[must_use]
    pub fn rotation(&self, id: NodeId) -> Option<f64> {
        Some(self.data(id)?.rotation)
    }

    /// Fill color.
    #[must_use]
    pub fn color(&self, id: NodeId) -> Option<Color> {
        Some(self.data(id)?.color)
    }

    /// Sets the fill color. Rendering-only; records nothing.
    pub fn set_color(&mut self, id: NodeId, color: Color) {
        if let Some(node) = self.data_mut(id) {
            node.color = color;
        }
    }

    /// Behavior flags.
    #[must_use]
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        Some(self.data(id)?.flags)
    }

    /// Returns `true` if the node is draggable.
    #[must_use]
    pub fn is_draggable(&self, id: NodeId) -> bool {
        self.flags(id)
            .is_some_and(|flags| flags.contains(NodeFlags::DRAGGABLE))
    }

    /// Returns `true` if the node follows its ancestors' offsets.
    #[must_use]
    pub fn follows_parent_offset(&self, id: NodeId) -> bool {
        self.flags(id)
            .is_some_and(|flags| flags.contains(NodeFlags::FOLLOW_PARENT_OFFSET))
    }

    /// Sets or clears [`NodeFlags::DRAGGABLE`].
    pub fn set_draggable(&mut self, id: NodeId, draggable: bool) {
        if let Some(node) = self.data_mut(id) {
            node.flags.set(NodeFlags::DRAGGABLE, draggable);
        }
    }

    /// Sets or clears [`NodeFlags::FOLLOW_PARENT_OFFSET`].
    pub fn set_follow_parent_offset(&mut self, id: NodeId, follow: bool) {
        if let Some(node) = self.data_mut(id) {
            node.flags.set(NodeFlags::FOLLOW_PARENT_OFFSET, follow);
        }
    }

    /// The node's `state` map.
    #[must_use]
    pub fn state(&self, id: NodeId) -> Option<&PropMap> {
        Some(&self.data(id)?.state)
    }

    /// The node's `props` map.
    #[must_use]
    pub fn props(&self, id: NodeId) -> Option<&PropMap> {
        Some(&self.data(id)?.props)
    }

    /// Sets the local position to `to` and cascades the resulting delta into
    /// every offset-following child's stored local position.
    ///
    /// Children with [`NodeFlags::FOLLOW_PARENT_OFFSET`] unset are left in
    /// place, intentionally decoupling them from parent movement. Each shifted
    /// child records its own [`UpdateKind::Moved`]; this node's record comes
    /// last. No-op on a stale handle.
    pub fn move_to(&mut self, id: NodeId, to: Point) {
        let Some(node) = self.data_mut(id) else {
            return;
        };
        let delta = to - node.origin;
        node.origin = to;
        self.cascade_children(id, delta);
        self.updates.push(Update {
            node: id,
            kind: UpdateKind::Moved,
        });
    }

    /// Shifts the local position by `delta` and cascades the same delta into
    /// offset-following children. No-op on a stale handle.
    pub fn move_by(&mut self, id: NodeId, delta: Vec2) {
        let Some(node) = self.data_mut(id) else {
            return;
        };
        node.origin += delta;
        self.cascade_children(id, delta);
        self.updates.push(Update {
            node: id,
            kind: UpdateKind::Moved,
        });
    }

    fn cascade_children(&mut self, id: NodeId, delta: Vec2) {
        let children: Vec<NodeId> = self.children(id).to_vec();
        for child in children {
            if self.follows_parent_offset(child) {
                self.move_by(child, delta);
            }
        }
    }

    /// Sets the node's size. Never cascades: children are not auto-scaled.
    ///
    /// Validates the size; silently declines on a stale handle.
    pub fn resize(&mut self, id: NodeId, size: Size) -> Result<(), GeometryError> {
        validate_size(size)?;
        let Some(node) = self.data_mut(id) else {
            return Ok(());
        };
        node.size = size;
        self.updates.push(Update {
            node: id,
            kind: UpdateKind::Resized,
        });
        Ok(())
    }

    /// Adds `angle` (radians) to the accumulated rotation.
    ///
    /// Rotation is a rendering transform local to the node's own draw pass: it
    /// never cascades to children, never affects hit geometry, and never
    /// rotates child layout.
    pub fn turn(&mut self, id: NodeId, angle: f64) {
        let Some(node) = self.data_mut(id) else {
            return;
        };
        node.rotation += angle;
        self.updates.push(Update {
            node: id,
            kind: UpdateKind::Turned,
        });
    }

    /// Shallow-merges `entries` into the node's `state` map and records
    /// [`UpdateKind::StateChanged`] with (previous, next) snapshots.
    pub fn set_state<I>(&mut self, id: NodeId, entries: I)
    where
        I: IntoIterator<Item = (&'static str, PropValue)>,
    {
        let Some(node) = self.data_mut(id) else {
            return;
        };
        let previous = node.state.clone();
        node.state.merge(entries);
        let next = node.state.clone();
        self.updates.push(Update {
            node: id,
            kind: UpdateKind::StateChanged { previous, next },
        });
    }

    /// Shallow-merges `entries` into the node's `props` map and records
    /// [`UpdateKind::PropsChanged`] with (previous, next) snapshots.
    pub fn set_props<I>(&mut self, id: NodeId, entries: I)
    where
        I: IntoIterator<Item = (&'static str, PropValue)>,
    {
        let Some(node) = self.data_mut(id) else {
            return;
        };
        let previous = node.props.clone();
        node.props.merge(entries);
        let next = node.props.clone();
        self.updates.push(Update {
            node: id,
            kind: UpdateKind::PropsChanged { previous, next },
        });
    }

    /// Yields and clears the recorded mutations, in record order.
    pub fn drain_updates(&mut self) -> Vec<Update> {
        core::mem::take(&mut self.updates)
    }
}

fn validate_point(point: Point) -> Result<(), GeometryError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite)
    }
}

fn validate_size(size: Size) -> Result<(), GeometryError> {
    if !(size.width.is_finite() && size.height.is_finite()) {
        return Err(GeometryError::NonFinite);
    }
    if size.width < 0.0 || size.height < 0.0 {
        return Err(GeometryError::NegativeSize);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn spec(x: f64, y: f64) -> NodeSpec {
        NodeSpec::new((x, y), (10.0, 10.0))
    }

    #[test]
    fn insert_validates_geometry() {
        let mut scene = Scene::new();
        assert_eq!(
            scene.insert(NodeSpec::new((f64::NAN, 0.0), (1.0, 1.0))),
            Err(GeometryError::NonFinite)
        );
        assert_eq!(
            scene.insert(NodeSpec::new((0.0, 0.0), (-1.0, 1.0))),
            Err(GeometryError::NegativeSize)
        );
        assert_eq!(
            scene.insert(NodeSpec::new((0.0, 0.0), (1.0, f64::INFINITY))),
            Err(GeometryError::NonFinite)
        );
        assert!(scene.insert(spec(0.0, 0.0)).is_ok());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn stale_handles_never_alias_reused_slots() {
        let mut scene = Scene::new();
        let first = scene.insert(spec(0.0, 0.0)).unwrap();
        scene.remove(first);
        let second = scene.insert(spec(5.0, 5.0)).unwrap();

        // Same slot, different generation.
        assert_ne!(first, second);
        assert!(!scene.is_alive(first));
        assert!(scene.is_alive(second));
        assert_eq!(scene.origin(first), None);
    }

    #[test]
    fn geometry_ops_on_stale_handles_silently_decline() {
        let mut scene = Scene::new();
        let id = scene.insert(spec(0.0, 0.0)).unwrap();
        scene.remove(id);
        scene.drain_updates();

        scene.move_to(id, Point::new(9.0, 9.0));
        scene.move_by(id, Vec2::new(1.0, 1.0));
        scene.turn(id, 1.0);
        assert_eq!(scene.resize(id, Size::new(2.0, 2.0)), Ok(()));
        scene.set_state(id, [("k", PropValue::Bool(true))]);

        assert!(scene.drain_updates().is_empty());
    }

    #[test]
    fn attach_rejects_second_parent() {
        let mut scene = Scene::new();
        let a = scene.insert(spec(0.0, 0.0)).unwrap();
        let b = scene.insert(spec(0.0, 0.0)).unwrap();
        let child = scene.insert(spec(0.0, 0.0)).unwrap();

        scene.attach(a, child).unwrap();
        assert_eq!(scene.attach(b, child), Err(AttachError::AlreadyAttached));

        // Explicit detach makes re-parenting legal.
        scene.detach(child);
        assert_eq!(scene.attach(b, child), Ok(()));
        assert_eq!(scene.parent(child), Some(b));
        assert!(scene.children(a).is_empty());
    }

    #[test]
    fn attach_rejects_cycles() {
        let mut scene = Scene::new();
        let a = scene.insert(spec(0.0, 0.0)).unwrap();
        let b = scene.insert(spec(0.0, 0.0)).unwrap();
        let c = scene.insert(spec(0.0, 0.0)).unwrap();
        scene.attach(a, b).unwrap();
        scene.attach(b, c).unwrap();

        assert_eq!(scene.attach(c, a), Err(AttachError::WouldCycle));
        assert_eq!(scene.attach(a, a), Err(AttachError::WouldCycle));
    }

    #[test]
    fn move_to_cascades_into_following_children_only() {
        let mut scene = Scene::new();
        let parent = scene.insert(spec(10.0, 10.0)).unwrap();
        let follower = scene.insert(spec(5.0, 5.0)).unwrap();
        let anchored = scene
            .insert(spec(7.0, 7.0).ignoring_parent_offset())
            .unwrap();
        scene.attach(parent, follower).unwrap();
        scene.attach(parent, anchored).unwrap();

        scene.move_to(parent, Point::new(13.0, 14.0));

        assert_eq!(scene.origin(parent), Some(Point::new(13.0, 14.0)));
        assert_eq!(scene.origin(follower), Some(Point::new(8.0, 9.0)));
        assert_eq!(scene.origin(anchored), Some(Point::new(7.0, 7.0)));
    }

    #[test]
    fn move_cascade_reaches_grandchildren() {
        let mut scene = Scene::new();
        let a = scene.insert(spec(0.0, 0.0)).unwrap();
        let b = scene.insert(spec(1.0, 1.0)).unwrap();
        let c = scene.insert(spec(2.0, 2.0)).unwrap();
        scene.attach(a, b).unwrap();
        scene.attach(b, c).unwrap();

        scene.move_by(a, Vec2::new(3.0, 0.0));

        assert_eq!(scene.origin(b), Some(Point::new(4.0, 1.0)));
        assert_eq!(scene.origin(c), Some(Point::new(5.0, 2.0)));
    }

    #[test]
    fn resize_never_cascades() {
        let mut scene = Scene::new();
        let parent = scene.insert(spec(0.0, 0.0)).unwrap();
        let child = scene.insert(spec(1.0, 1.0)).unwrap();
        scene.attach(parent, child).unwrap();

        scene.resize(parent, Size::new(50.0, 60.0)).unwrap();

        assert_eq!(scene.size(parent), Some(Size::new(50.0, 60.0)));
        assert_eq!(scene.size(child), Some(Size::new(10.0, 10.0)));
        assert_eq!(scene.origin(child), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn idempotent_resize_changes_no_child_geometry() {
        let mut scene = Scene::new();
        let parent = scene.insert(spec(0.0, 0.0)).unwrap();
        let child = scene.insert(spec(1.0, 1.0)).unwrap();
        scene.attach(parent, child).unwrap();
        scene.drain_updates();

        scene.resize(parent, Size::new(10.0, 10.0)).unwrap();

        assert_eq!(scene.size(parent), Some(Size::new(10.0, 10.0)));
        assert_eq!(scene.origin(child), Some(Point::new(1.0, 1.0)));
        // Only the parent's own record; no snapshot payload, no child records.
        let updates = scene.drain_updates();
        assert_eq!(
            updates,
            vec![Update {
                node: parent,
                kind: UpdateKind::Resized
            }]
        );
    }

    #[test]
    fn turn_accumulates_and_stays_local() {
        let mut scene = Scene::new();
        let parent = scene.insert(spec(0.0, 0.0)).unwrap();
        let child = scene.insert(spec(1.0, 1.0)).unwrap();
        scene.attach(parent, child).unwrap();

        scene.turn(parent, 0.5);
        scene.turn(parent, 0.25);

        assert_eq!(scene.rotation(parent), Some(0.75));
        assert_eq!(scene.rotation(child), Some(0.0));
    }

    #[test]
    fn set_state_records_snapshots() {
        let mut scene = Scene::new();
        let id = scene.insert(spec(0.0, 0.0)).unwrap();
        scene.set_state(id, [("armed", PropValue::Bool(true))]);
        scene.drain_updates();

        scene.set_state(id, [("armed", PropValue::Bool(false))]);

        let updates = scene.drain_updates();
        assert_eq!(updates.len(), 1);
        match &updates[0].kind {
            UpdateKind::StateChanged { previous, next } => {
                assert_eq!(previous.get("armed"), Some(&PropValue::Bool(true)));
                assert_eq!(next.get("armed"), Some(&PropValue::Bool(false)));
            }
            other => panic!("expected StateChanged, got {other:?}"),
        }
    }

    #[test]
    fn child_moves_record_before_the_parent_record() {
        let mut scene = Scene::new();
        let parent = scene.insert(spec(0.0, 0.0)).unwrap();
        let child = scene.insert(spec(1.0, 1.0)).unwrap();
        scene.attach(parent, child).unwrap();
        scene.drain_updates();

        scene.move_by(parent, Vec2::new(1.0, 0.0));

        let order: alloc::vec::Vec<NodeId> =
            scene.drain_updates().into_iter().map(|u| u.node).collect();
        assert_eq!(order, vec![child, parent]);
    }

    #[test]
    fn remove_unmounts_the_whole_subtree_in_preorder() {
        let mut scene = Scene::new();
        let root = scene.insert(spec(0.0, 0.0)).unwrap();
        let mid = scene.insert(spec(0.0, 0.0)).unwrap();
        let leaf = scene.insert(spec(0.0, 0.0)).unwrap();
        scene.attach(root, mid).unwrap();
        scene.attach(mid, leaf).unwrap();
        scene.drain_updates();

        scene.remove(root);

        let updates = scene.drain_updates();
        let order: alloc::vec::Vec<NodeId> = updates.iter().map(|u| u.node).collect();
        assert_eq!(order, vec![root, mid, leaf]);
        assert!(
            updates.iter().all(|u| u.kind == UpdateKind::Unmounting),
            "all records should be Unmounting"
        );
        assert!(scene.is_empty());
    }

    #[test]
    fn detached_subtree_keeps_working() {
        let mut scene = Scene::new();
        let parent = scene.insert(spec(10.0, 10.0)).unwrap();
        let child = scene.insert(spec(5.0, 5.0)).unwrap();
        scene.attach(parent, child).unwrap();

        scene.detach(child);
        scene.move_by(child, Vec2::new(1.0, 1.0));

        assert_eq!(scene.parent(child), None);
        assert_eq!(scene.origin(child), Some(Point::new(6.0, 6.0)));
        // Detached from the parent: its moves no longer cascade here.
        scene.move_by(parent, Vec2::new(100.0, 0.0));
        assert_eq!(scene.origin(child), Some(Point::new(6.0, 6.0)));
    }
}
