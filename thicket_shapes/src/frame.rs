// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A container rectangle for grouping children.

use kurbo::{Point, Size};
use peniko::color::palette;
use thicket_imaging::PaintBackend;
use thicket_scene::{NodeId, NodeSpec, Scene};
use thicket_surface::{Shape, with_node_frame};

/// A grouping container.
///
/// Paints only its own fill (conventionally fully transparent, see
/// [`Frame::spec`]) with no outline; its children are rendered by the surface
/// after this pass, positioned by the usual ancestor-offset sum. Dragging a
/// draggable frame therefore drags the whole group.
#[derive(Copy, Clone, Debug, Default)]
pub struct Frame;

impl Frame {
    /// The node spec frames conventionally use: a transparent fill.
    pub fn spec(origin: impl Into<Point>, size: impl Into<Size>) -> NodeSpec {
        NodeSpec::new(origin, size).with_color(palette::css::TRANSPARENT)
    }
}

impl Shape for Frame {
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        let Some(color) = scene.color(id) else {
            return;
        };
        with_node_frame(scene, id, target, |target, local| {
            target.fill_rect(local, color);
        });
    }
}
