// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontal slider whose handle is the only draggable region.

use alloc::boxed::Box;
use alloc::format;
use core::fmt;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use thicket_imaging::{PaintBackend, TextAlign, TextStyle};
use thicket_scene::{NodeId, NodeSpec, Scene};
use thicket_surface::{DragMotion, Shape, with_node_frame};

const TRACK: Color = Color::from_rgb8(0xdd, 0xdd, 0xdd);
const HANDLE: Color = Color::from_rgb8(0x4c, 0xaf, 0x50);
const HANDLE_EDGE: Color = Color::from_rgb8(0x45, 0xa0, 0x49);
const CAPTION: Color = Color::from_rgb8(0x33, 0x33, 0x33);
const LIGHT_GRAY: Color = Color::from_rgb8(211, 211, 211);

/// A value slider.
///
/// Two overrides carry the behavior: the hit region narrows to the handle's
/// bounding box, so presses on the bare track select nothing; and drag motion
/// is consumed to update the value — the node itself never moves.
pub struct Slider {
    min: f64,
    max: f64,
    value: f64,
    handle_size: f64,
    on_change: Option<Box<dyn FnMut(f64)>>,
}

impl Slider {
    /// A slider over `min..=max` starting at `value` (clamped into range).
    #[must_use]
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        Self {
            min,
            max,
            value: value.clamp(min, max),
            handle_size: 20.0,
            on_change: None,
        }
    }

    /// Sets the handle diameter.
    #[must_use]
    pub fn with_handle_size(mut self, handle_size: f64) -> Self {
        self.handle_size = handle_size;
        self
    }

    /// Sets the value-change handler, called on every drag move.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// The node spec sliders conventionally use. Draggable, because the drag
    /// session is what feeds the value; the `drag_moved` override keeps the
    /// node itself in place.
    pub fn spec(origin: impl Into<Point>, size: impl Into<Size>) -> NodeSpec {
        NodeSpec::new(origin, size).with_color(LIGHT_GRAY).draggable()
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position of the value within the range, in `0.0..=1.0`.
    fn ratio(&self) -> f64 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    /// Absolute bounding box of the handle.
    fn handle_bounds(&self, scene: &Scene, id: NodeId) -> Option<Rect> {
        let bounds = scene.abs_bounds(id)?;
        let x = bounds.x0 + self.ratio() * (bounds.width() - self.handle_size);
        Some(Rect::new(x, bounds.y0, x + self.handle_size, bounds.y1))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "slider captions show small in-range values"
)]
fn caption(value: f64) -> i64 {
    if value >= 0.0 {
        (value + 0.5) as i64
    } else {
        (value - 0.5) as i64
    }
}

impl Shape for Slider {
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        let Some(size) = scene.size(id) else {
            return;
        };
        with_node_frame(scene, id, target, |target, local| {
            target.fill_rect(Rect::new(local.x0, -2.0, local.x1, 2.0), TRACK);

            let handle_x = self.ratio() * (size.width - self.handle_size) + local.x0;
            let center = Point::new(handle_x + self.handle_size / 2.0, 0.0);
            target.fill_circle(center, self.handle_size / 2.0, HANDLE);
            target.stroke_circle(center, self.handle_size / 2.0, HANDLE_EDGE, 2.0);

            let style = TextStyle::sized(12.0, CAPTION).align(TextAlign::Center);
            target.fill_text(
                &format!("{}", caption(self.value)),
                Point::new(center.x, size.height / 2.0 + 15.0),
                &style,
                None,
            );
        });
    }

    fn inside_test(&self, scene: &Scene, id: NodeId, point: Point) -> bool {
        match self.handle_bounds(scene, id) {
            Some(handle) => {
                point.x >= handle.x0
                    && point.x <= handle.x1
                    && point.y >= handle.y0
                    && point.y <= handle.y1
            }
            None => false,
        }
    }

    fn drag_moved(
        &mut self,
        scene: &mut Scene,
        id: NodeId,
        pointer: Point,
        _to: Point,
    ) -> DragMotion {
        if let Some(bounds) = scene.abs_bounds(id) {
            if bounds.width() > 0.0 {
                let ratio = (pointer.x - bounds.x0) / bounds.width();
                self.value = (self.min + ratio * (self.max - self.min)).clamp(self.min, self.max);
                if let Some(handler) = self.on_change.as_mut() {
                    handler(self.value);
                }
            }
        }
        DragMotion::Handled
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("handle_size", &self.handle_size)
            .finish_non_exhaustive()
    }
}
