// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A labeled push button.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use kurbo::{Point, Size};
use peniko::Color;
use peniko::color::palette;
use thicket_imaging::{PaintBackend, TextAlign, TextBaseline, TextStyle};
use thicket_scene::{NodeId, NodeSpec, Scene};
use thicket_surface::{Notice, NoticeKind, NoticeOutcome, Shape, with_node_frame};

/// A push button with press-armed click handling.
///
/// The press (pointer-down on the button) arms it; the following release or
/// click fires the handler only if the button is still armed *and* the
/// pointer is still inside its bounds. Either way the release disarms it, so
/// dragging off a pressed button cancels the click.
pub struct Button {
    label: String,
    pressed: bool,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    /// A button with the given label and no handler.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pressed: false,
            on_click: None,
        }
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// The node spec buttons conventionally use: light gray, not draggable.
    pub fn spec(origin: impl Into<Point>, size: impl Into<Size>) -> NodeSpec {
        NodeSpec::new(origin, size).with_color(LIGHT_GRAY)
    }

    /// Returns `true` while the button is armed by a press.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

const LIGHT_GRAY: Color = Color::from_rgb8(211, 211, 211);

/// The pressed fill: the node color with its components scaled down.
fn darkened(color: Color) -> Color {
    let [r, g, b, a] = color.components;
    Color::new([r * 0.8, g * 0.8, b * 0.8, a])
}

impl Shape for Button {
    fn render(&self, scene: &Scene, id: NodeId, target: &mut dyn PaintBackend) {
        let Some(color) = scene.color(id) else {
            return;
        };
        let fill = if self.pressed { darkened(color) } else { color };
        with_node_frame(scene, id, target, |target, local| {
            target.fill_rect(local, fill);
            target.stroke_rect(local, palette::css::BLACK, 1.0);
            let style = TextStyle::sized(16.0, palette::css::BLACK)
                .align(TextAlign::Center)
                .baseline(TextBaseline::Middle);
            target.fill_text(&self.label, Point::ZERO, &style, None);
        });
    }

    fn notified(&mut self, scene: &mut Scene, id: NodeId, notice: &Notice) -> NoticeOutcome {
        match notice.kind {
            NoticeKind::Press => {
                self.pressed = true;
            }
            NoticeKind::Release | NoticeKind::Click => {
                if self.pressed && scene.point_inside(id, notice.position) {
                    if let Some(handler) = self.on_click.as_mut() {
                        handler();
                    }
                }
                self.pressed = false;
            }
        }
        NoticeOutcome::None
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("pressed", &self.pressed)
            .field("has_handler", &self.on_click.is_some())
            .finish_non_exhaustive()
    }
}
