// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape variant behavior driven through a live surface.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Point;
use peniko::Color;
use thicket_imaging::record::{PaintOp, Recorder};
use thicket_shapes::primitives::{Circle, Line, Triangle};
use thicket_shapes::{Button, Frame, Slider, TextBox};
use thicket_surface::{InputEvent, KeyInput, PointerInput, Surface};

fn down(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown(PointerInput::at((x, y)))
}

fn mv(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove(PointerInput::at((x, y)))
}

fn up(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerUp(PointerInput::at((x, y)))
}

fn click(x: f64, y: f64) -> InputEvent {
    InputEvent::Click(PointerInput::at((x, y)))
}

fn key(k: KeyInput) -> InputEvent {
    InputEvent::Key(k)
}

fn texts(recorder: &Recorder) -> Vec<String> {
    recorder
        .ops
        .iter()
        .filter_map(|op| match op {
            PaintOp::FillText { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn slider_hit_region_is_only_the_handle() {
    let mut surface = Surface::new();
    let slider = surface
        .spawn(
            Slider::spec((0.0, 0.0), (120.0, 20.0)),
            Box::new(Slider::new(0.0, 100.0, 50.0)),
        )
        .unwrap();
    surface.add_root(slider);

    // Handle spans x in 50..=70 at value 50.
    assert_eq!(surface.hit_test(Point::new(60.0, 10.0)), Some(slider));
    assert_eq!(surface.hit_test(Point::new(50.0, 0.0)), Some(slider));
    // Inside the track but off the handle: no hit at all.
    assert_eq!(surface.hit_test(Point::new(10.0, 10.0)), None);
    assert_eq!(surface.hit_test(Point::new(100.0, 10.0)), None);
}

#[test]
fn slider_drag_updates_the_value_and_never_moves_the_node() {
    let seen: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut surface = Surface::new();
    let slider = surface
        .spawn(
            Slider::spec((0.0, 0.0), (120.0, 20.0)),
            Box::new(
                Slider::new(0.0, 100.0, 50.0).on_change(move |v| sink.borrow_mut().push(v)),
            ),
        )
        .unwrap();
    surface.add_root(slider);

    surface.dispatch(down(60.0, 10.0));
    assert_eq!(surface.drag_target(), Some(slider));

    surface.dispatch(mv(90.0, 10.0));
    surface.dispatch(mv(500.0, 10.0));
    surface.dispatch(mv(-100.0, 10.0));
    surface.dispatch(up(-100.0, 10.0));

    assert_eq!(*seen.borrow(), vec![75.0, 100.0, 0.0]);
    assert_eq!(
        surface.scene().origin(slider),
        Some(Point::new(0.0, 0.0)),
        "the slider node must stay put while its value changes"
    );
    assert_eq!(surface.drag_target(), None);
}

#[test]
fn button_fires_only_when_released_inside() {
    let fired = Rc::new(Cell::new(0_u32));
    let sink = Rc::clone(&fired);

    let mut surface = Surface::new();
    let button = surface
        .spawn(
            Button::spec((0.0, 0.0), (40.0, 20.0)),
            Box::new(Button::new("ok").on_click(move || sink.set(sink.get() + 1))),
        )
        .unwrap();
    surface.add_root(button);

    // Press and release inside: one click.
    surface.dispatch(down(10.0, 10.0));
    surface.dispatch(up(10.0, 10.0));
    assert_eq!(fired.get(), 1);

    // The browser click that follows the release must not double-fire.
    surface.dispatch(click(10.0, 10.0));
    assert_eq!(fired.get(), 1);

    // Press inside, drag off, release outside: disarmed, no fire.
    surface.dispatch(down(10.0, 10.0));
    surface.dispatch(up(200.0, 200.0));
    assert_eq!(fired.get(), 1);
}

#[test]
fn button_darkens_its_fill_while_pressed() {
    let mut surface = Surface::new();
    let button = surface
        .spawn(
            Button::spec((0.0, 0.0), (40.0, 20.0)),
            Box::new(Button::new("go")),
        )
        .unwrap();
    surface.add_root(button);

    let first_fill = |surface: &Surface| {
        let mut recorder = Recorder::new();
        surface.render_frame(&mut recorder);
        recorder
            .ops
            .iter()
            .find_map(|op| match op {
                PaintOp::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .unwrap()
    };

    let idle = first_fill(&surface);
    let base = surface.scene().color(button).unwrap();
    assert_eq!(idle, base);

    surface.dispatch(down(10.0, 10.0));
    let pressed = first_fill(&surface);
    let [r, g, b, a] = base.components;
    assert_eq!(pressed, Color::new([r * 0.8, g * 0.8, b * 0.8, a]));

    surface.dispatch(up(10.0, 10.0));
    assert_eq!(first_fill(&surface), base);
}

#[test]
fn text_box_edits_through_the_surface_editing_session() {
    let mut surface = Surface::new();
    let field = surface
        .spawn(
            TextBox::spec((0.0, 0.0), (100.0, 24.0)),
            Box::new(TextBox::new("").editable()),
        )
        .unwrap();
    surface.add_root(field);

    // Keys go nowhere until a click begins the session.
    surface.dispatch(key(KeyInput::Character('x')));
    assert_eq!(surface.editing_target(), None);

    surface.dispatch(click(5.0, 5.0));
    assert_eq!(surface.editing_target(), Some(field));

    surface.dispatch(key(KeyInput::Character('a')));
    surface.dispatch(key(KeyInput::Character('b')));
    surface.dispatch(key(KeyInput::ArrowLeft));
    surface.dispatch(key(KeyInput::Character('c')));

    let mut recorder = Recorder::new();
    surface.render_frame(&mut recorder);
    // Caret sits after the inserted character: "ac|b".
    assert!(texts(&recorder).iter().any(|t| t == "ac|b"));

    surface.dispatch(key(KeyInput::Backspace));
    let mut recorder = Recorder::new();
    surface.render_frame(&mut recorder);
    assert!(texts(&recorder).iter().any(|t| t == "a|b"));

    // A second click ends the session; the caret disappears.
    surface.dispatch(click(5.0, 5.0));
    assert_eq!(surface.editing_target(), None);
    let mut recorder = Recorder::new();
    surface.render_frame(&mut recorder);
    assert!(texts(&recorder).iter().any(|t| t == "ab"));
}

#[test]
fn non_editable_text_box_ignores_clicks() {
    let mut surface = Surface::new();
    let field = surface
        .spawn(
            TextBox::spec((0.0, 0.0), (100.0, 24.0)),
            Box::new(TextBox::new("fixed")),
        )
        .unwrap();
    surface.add_root(field);

    surface.dispatch(click(5.0, 5.0));

    assert_eq!(surface.editing_target(), None);
    surface.dispatch(key(KeyInput::Character('!')));
    let mut recorder = Recorder::new();
    surface.render_frame(&mut recorder);
    assert!(texts(&recorder).iter().any(|t| t == "fixed"));
}

#[test]
fn clicking_a_second_field_displaces_the_first_session() {
    let mut surface = Surface::new();
    let first = surface
        .spawn(
            TextBox::spec((0.0, 0.0), (50.0, 20.0)),
            Box::new(TextBox::new("one").editable()),
        )
        .unwrap();
    let second = surface
        .spawn(
            TextBox::spec((60.0, 0.0), (50.0, 20.0)),
            Box::new(TextBox::new("two").editable()),
        )
        .unwrap();
    surface.add_root(first);
    surface.add_root(second);

    surface.dispatch(click(5.0, 5.0));
    assert_eq!(surface.editing_target(), Some(first));

    surface.dispatch(click(65.0, 5.0));
    assert_eq!(surface.editing_target(), Some(second));

    // Keys reach only the second field now.
    surface.dispatch(key(KeyInput::Character('!')));
    let mut recorder = Recorder::new();
    surface.render_frame(&mut recorder);
    let shown = texts(&recorder);
    assert!(
        shown.iter().any(|t| t == "one"),
        "the displaced field should render without a caret"
    );
    assert!(shown.iter().any(|t| t == "two!|"));
}

#[test]
fn dragging_a_frame_drags_the_group() {
    let mut surface = Surface::new();
    let frame = surface
        .spawn(
            Frame::spec((10.0, 10.0), (100.0, 100.0)).draggable(),
            Box::new(Frame),
        )
        .unwrap();
    let dot = surface
        .spawn(Circle::spec((5.0, 5.0), 4.0), Box::new(Circle))
        .unwrap();
    surface.add_root(frame);
    surface.adopt(frame, dot).unwrap();

    surface.dispatch(down(20.0, 20.0));
    surface.dispatch(mv(40.0, 30.0));
    surface.dispatch(up(40.0, 30.0));

    assert_eq!(surface.scene().origin(frame), Some(Point::new(30.0, 20.0)));
    assert_eq!(surface.scene().origin(dot), Some(Point::new(25.0, 15.0)));
}

#[test]
fn frame_paints_fill_without_an_outline() {
    let mut surface = Surface::new();
    let frame = surface
        .spawn(Frame::spec((0.0, 0.0), (50.0, 50.0)), Box::new(Frame))
        .unwrap();
    surface.add_root(frame);

    let mut recorder = Recorder::new();
    surface.render_frame(&mut recorder);

    assert_eq!(
        recorder
            .positions(|op| matches!(op, PaintOp::StrokeRect { .. }))
            .len(),
        0
    );
    assert_eq!(
        recorder
            .positions(|op| matches!(op, PaintOp::FillRect { .. }))
            .len(),
        1
    );
}

#[test]
fn primitives_paint_their_own_geometry() {
    let mut surface = Surface::new();
    let circle = surface
        .spawn(Circle::spec((0.0, 0.0), 5.0), Box::new(Circle))
        .unwrap();
    let tri = surface
        .spawn(
            thicket_scene::NodeSpec::new((20.0, 0.0), (8.0, 6.0)),
            Box::new(Triangle),
        )
        .unwrap();
    let line = surface
        .spawn(
            thicket_scene::NodeSpec::new((40.0, 0.0), (30.0, 3.0)),
            Box::new(Line),
        )
        .unwrap();
    surface.add_root(circle);
    surface.add_root(tri);
    surface.add_root(line);

    let mut recorder = Recorder::new();
    surface.render_frame(&mut recorder);

    assert!(recorder.ops.iter().any(|op| matches!(
        op,
        PaintOp::FillCircle { center, radius, .. }
            if *center == Point::ZERO && *radius == 5.0
    )));
    assert!(
        recorder
            .ops
            .iter()
            .any(|op| matches!(op, PaintOp::FillPath { .. }))
    );
    assert!(recorder.ops.iter().any(|op| matches!(
        op,
        PaintOp::StrokePath { width, .. } if *width == 3.0
    )));
}
