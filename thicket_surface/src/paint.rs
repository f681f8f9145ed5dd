// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default box renderer and the local-frame helper shapes build on.

use kurbo::{Rect, Vec2};
use peniko::color::palette;
use thicket_imaging::PaintBackend;
use thicket_scene::{NodeId, Scene};

/// Runs `f` inside the node's local drawing frame.
///
/// Establishes the transform every shape paints in: save, translate to the
/// center of the node's absolute box, rotate by the node's accumulated
/// rotation; then calls `f` with the box rectangle centered on the origin;
/// then restores. Stale handles paint nothing.
///
/// Children are *not* painted here — the surface renders them after the
/// parent's frame is restored, so a parent's rotation never rotates child
/// layout.
pub fn with_node_frame<F>(scene: &Scene, id: NodeId, target: &mut dyn PaintBackend, f: F)
where
    F: FnOnce(&mut dyn PaintBackend, Rect),
{
    let Some(origin) = scene.absolute_position(id) else {
        return;
    };
    let Some(size) = scene.size(id) else {
        return;
    };
    let rotation = scene.rotation(id).unwrap_or(0.0);

    target.save();
    target.translate(origin.to_vec2() + Vec2::new(size.width / 2.0, size.height / 2.0));
    target.rotate(rotation);
    let local = Rect::new(
        -size.width / 2.0,
        -size.height / 2.0,
        size.width / 2.0,
        size.height / 2.0,
    );
    f(target, local);
    target.restore();
}

/// Paints the node as a filled rectangle with a black outline — the default
/// rendering for nodes without a shape override.
pub fn paint_box(scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
    let Some(color) = scene.color(id) else {
        return;
    };
    with_node_frame(scene, id, target, |target, local| {
        target.fill_rect(local, color);
        target.stroke_rect(local, palette::css::BLACK, 1.0);
    });
}
