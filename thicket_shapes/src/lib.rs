// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_shapes --heading-base-level=0

//! Thicket Shapes: interactive shape variants built on the Thicket core.
//!
//! Each variant implements [`thicket_surface::Shape`] and overrides only what
//! it needs:
//!
//! - [`Button`]: press-armed click handling with a darkened pressed fill and
//!   a centered label.
//! - [`Slider`]: narrows its hit region to the handle disc and consumes drag
//!   motion to update its value instead of moving the node.
//! - [`TextBox`]: renders text with a caret while editing; toggles the
//!   surface editing session on click and handles minimal key input.
//! - [`Frame`]: a (possibly transparent) container rectangle whose children
//!   the surface renders after it.
//! - [`primitives`]: [`Circle`](primitives::Circle),
//!   [`Triangle`](primitives::Triangle), [`Line`](primitives::Line), and
//!   [`Pen`](primitives::Pen) — render-only variants of the plain box.
//!
//! Variants keep their own interaction state (pressed, value, caret); node
//! geometry, color, and flags live in the scene as usual. Helpers like
//! [`Slider::spec`] build the matching [`NodeSpec`](thicket_scene::NodeSpec)
//! so call sites stay short.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
mod frame;
pub mod primitives;
mod slider;
mod text_box;

pub use button::Button;
pub use frame::Frame;
pub use slider::Slider;
pub use text_box::TextBox;
