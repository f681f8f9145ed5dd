// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute-position resolution and the default containment test.

use kurbo::{Point, Rect};

use crate::scene::Scene;
use crate::types::{NodeFlags, NodeId};

impl Scene {
    /// Resolves the node's absolute position from its local position plus the
    /// ancestor chain.
    ///
    /// While this node's [`NodeFlags::FOLLOW_PARENT_OFFSET`] flag is set, each
    /// ancestor contributes its raw *local* coordinates; summing those along
    /// the chain is equivalent to resolving against the parent's absolute
    /// position. With the flag unset the local position is already absolute.
    ///
    /// The result is never cached. Termination relies on the parent chain
    /// being acyclic, which [`Scene::attach`] enforces.
    #[must_use]
    pub fn absolute_position(&self, id: NodeId) -> Option<Point> {
        let node = self.data(id)?;
        let follows = node.flags.contains(NodeFlags::FOLLOW_PARENT_OFFSET);
        let mut abs = node.origin;
        let mut cursor = node.parent;
        while let Some(ancestor_id) = cursor {
            let ancestor = self.data(ancestor_id)?;
            if follows {
                abs += ancestor.origin.to_vec2();
            }
            cursor = ancestor.parent;
        }
        Some(abs)
    }

    /// The node's absolute, axis-aligned bounding box.
    ///
    /// Rotation is deliberately ignored: hit geometry is always the unrotated
    /// box.
    #[must_use]
    pub fn abs_bounds(&self, id: NodeId) -> Option<Rect> {
        let origin = self.absolute_position(id)?;
        let size = self.size(id)?;
        Some(Rect::from_origin_size(origin, size))
    }

    /// Default inside-test: closed axis-aligned containment against
    /// [`Scene::abs_bounds`]. `false` for stale handles.
    #[must_use]
    pub fn point_inside(&self, id: NodeId, point: Point) -> bool {
        match self.abs_bounds(id) {
            Some(bounds) => {
                point.x >= bounds.x0
                    && point.x <= bounds.x1
                    && point.y >= bounds.y0
                    && point.y <= bounds.y1
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeSpec;

    #[test]
    fn following_child_adds_every_ancestor_offset() {
        let mut scene = Scene::new();
        let parent = scene
            .insert(NodeSpec::new((10.0, 10.0), (100.0, 100.0)))
            .unwrap();
        let child = scene.insert(NodeSpec::new((5.0, 5.0), (10.0, 10.0))).unwrap();
        scene.attach(parent, child).unwrap();

        assert_eq!(scene.absolute_position(child), Some(Point::new(15.0, 15.0)));
    }

    #[test]
    fn opted_out_child_keeps_its_local_position() {
        let mut scene = Scene::new();
        let parent = scene
            .insert(NodeSpec::new((10.0, 10.0), (100.0, 100.0)))
            .unwrap();
        let child = scene
            .insert(NodeSpec::new((5.0, 5.0), (10.0, 10.0)).ignoring_parent_offset())
            .unwrap();
        scene.attach(parent, child).unwrap();

        assert_eq!(scene.absolute_position(child), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn nesting_sums_all_ancestor_locals() {
        let mut scene = Scene::new();
        let a = scene.insert(NodeSpec::new((1.0, 2.0), (50.0, 50.0))).unwrap();
        let b = scene.insert(NodeSpec::new((10.0, 20.0), (40.0, 40.0))).unwrap();
        let c = scene.insert(NodeSpec::new((100.0, 200.0), (10.0, 10.0))).unwrap();
        scene.attach(a, b).unwrap();
        scene.attach(b, c).unwrap();

        assert_eq!(
            scene.absolute_position(c),
            Some(Point::new(111.0, 222.0))
        );
    }

    #[test]
    fn moving_an_ancestor_moves_position_reads_without_recompute() {
        let mut scene = Scene::new();
        let parent = scene.insert(NodeSpec::new((0.0, 0.0), (50.0, 50.0))).unwrap();
        let child = scene.insert(NodeSpec::new((5.0, 5.0), (10.0, 10.0))).unwrap();
        scene.attach(parent, child).unwrap();

        scene.move_to(parent, Point::new(30.0, 0.0));

        // The child's local coordinates were cascaded, and the resolver sees
        // the ancestor's new local position; both agree.
        assert_eq!(scene.absolute_position(child), Some(Point::new(65.0, 5.0)));
    }

    #[test]
    fn containment_is_closed_on_all_edges_and_ignores_rotation() {
        let mut scene = Scene::new();
        let id = scene
            .insert(NodeSpec::new((10.0, 10.0), (20.0, 20.0)))
            .unwrap();
        scene.turn(id, 1.2);

        assert!(scene.point_inside(id, Point::new(10.0, 10.0)));
        assert!(scene.point_inside(id, Point::new(30.0, 30.0)));
        assert!(scene.point_inside(id, Point::new(20.0, 15.0)));
        assert!(!scene.point_inside(id, Point::new(30.1, 30.0)));
        assert!(!scene.point_inside(id, Point::new(9.9, 10.0)));
    }

    #[test]
    fn stale_handle_resolves_to_none() {
        let mut scene = Scene::new();
        let id = scene.insert(NodeSpec::new((0.0, 0.0), (1.0, 1.0))).unwrap();
        scene.remove(id);
        assert_eq!(scene.absolute_position(id), None);
        assert!(!scene.point_inside(id, Point::ZERO));
    }
}
