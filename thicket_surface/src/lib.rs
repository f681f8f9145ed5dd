// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_surface --heading-base-level=0

//! Thicket Surface: the owner of the top-level node list and the
//! dispatch/render loop.
//!
//! A [`Surface`] ties the other Thicket crates together:
//!
//! - it owns the [`thicket_scene::Scene`] arena and an ordered list of
//!   top-level nodes (insertion order is back-to-front paint order;
//!   hit testing scans the reverse, frontmost first);
//! - it routes [`InputEvent`]s: pointer-down selects a drag candidate by hit
//!   test, pointer-move feeds the single active
//!   [`thicket_event_state::drag::DragState`] session, pointer-up ends it
//!   unconditionally, and click delivers a [`Notice`] to the hit node and
//!   then to its entire subtree;
//! - it drives the frame render: clear, then every top-level node
//!   back-to-front, recursing into children;
//! - it delivers lifecycle hooks (`mounted`/`updated`/`unmounting`) to
//!   [`Shape`]s from drained scene updates, after a dispatch finishes, never
//!   reentrantly inside one.
//!
//! ## Hit testing scope
//!
//! Pointer-down and click selection consider **top-level nodes only**; a
//! child becomes reachable through the click broadcast into the hit node's
//! subtree, not through its own hit test. This asymmetry is deliberate and
//! load-bearing for drag semantics (dragging a container drags the whole
//! group).
//!
//! ## Shapes
//!
//! [`Shape`] is the capability interface variants implement: `render`, an
//! overridable `inside_test` (a slider narrows its hit region to its handle),
//! drag hooks, click notification, key input while editing, and the lifecycle
//! hooks, all as overridable defaults. Nodes spawned without a shape paint as
//! plain outlined rectangles.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod input;
mod paint;
mod shape;
mod surface;

pub use input::{Dispatched, InputEvent, KeyInput, PointerInput};
pub use paint::{paint_box, with_node_frame};
pub use shape::{BoxShape, DragMotion, Notice, NoticeKind, NoticeOutcome, Shape};
pub use surface::Surface;
