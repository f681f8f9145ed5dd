// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-only shape variants: circle, triangle, line, and pen.
//!
//! All of them hit-test by the node's box like the default shape; only the
//! paint differs. Each paints in the node's local frame, so accumulated
//! rotation applies to the primitive itself and to nothing else.

use kurbo::{BezPath, Point};
use peniko::color::palette;
use thicket_imaging::PaintBackend;
use thicket_scene::{NodeId, NodeSpec, Scene};
use thicket_surface::{Shape, with_node_frame};

/// A disc inscribed in the node's box, sized by the box width.
#[derive(Copy, Clone, Debug, Default)]
pub struct Circle;

impl Circle {
    /// The node spec for a circle of the given radius: a square box with the
    /// disc inscribed.
    pub fn spec(origin: impl Into<Point>, radius: f64) -> NodeSpec {
        NodeSpec::new(origin, (radius * 2.0, radius * 2.0))
    }
}

impl Shape for Circle {
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        let Some(color) = scene.color(id) else {
            return;
        };
        with_node_frame(scene, id, target, |target, local| {
            let radius = local.width() / 2.0;
            target.fill_circle(Point::ZERO, radius, color);
            target.stroke_circle(Point::ZERO, radius, palette::css::BLACK, 1.0);
        });
    }
}

/// An isoceles triangle filling the node's box, apex up.
#[derive(Copy, Clone, Debug, Default)]
pub struct Triangle;

impl Shape for Triangle {
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        let Some(color) = scene.color(id) else {
            return;
        };
        with_node_frame(scene, id, target, |target, local| {
            let mut path = BezPath::new();
            path.move_to((0.0, local.y0));
            path.line_to((local.x1, local.y1));
            path.line_to((local.x0, local.y1));
            path.close_path();
            target.fill_path(&path, color);
            target.stroke_path(&path, palette::css::BLACK, 1.0);
        });
    }
}

/// A horizontal line across the node's box, stroked at the box height.
#[derive(Copy, Clone, Debug, Default)]
pub struct Line;

impl Shape for Line {
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        let Some(color) = scene.color(id) else {
            return;
        };
        with_node_frame(scene, id, target, |target, local| {
            let mut path = BezPath::new();
            path.move_to((local.x0, 0.0));
            path.line_to((local.x1, 0.0));
            target.stroke_path(&path, color, local.height());
        });
    }
}

/// A narrow vertical bar centered in an outlined box.
#[derive(Copy, Clone, Debug, Default)]
pub struct Pen;

impl Shape for Pen {
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        let Some(color) = scene.color(id) else {
            return;
        };
        with_node_frame(scene, id, target, |target, local| {
            target.fill_rect(kurbo::Rect::new(-5.0, local.y0, 5.0, local.y1), color);
            target.stroke_rect(local, palette::css::BLACK, 1.0);
        });
    }
}
