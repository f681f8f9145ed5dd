// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_scene --heading-base-level=0

//! Thicket Scene: a retained-mode scene graph arena for interactive 2D shapes.
//!
//! This crate holds the data model that the rest of Thicket routes input into
//! and renders from: a generational arena of positioned, sized, rotatable
//! rectangles with parent/child relations, selective offset inheritance, and
//! small per-node key/value stores.
//!
//! - Positions are parent-relative; absolute positions are always recomputed
//!   from the ancestor chain and never cached, so moving an ancestor implicitly
//!   moves every offset-following descendant for position reads.
//! - Moves *do* explicitly cascade: [`Scene::move_to`] and [`Scene::move_by`]
//!   shift the stored local coordinates of every child whose
//!   [`NodeFlags::FOLLOW_PARENT_OFFSET`] flag is set, and leave opted-out
//!   children untouched.
//! - Rotation accumulates via [`Scene::turn`] and is a rendering transform
//!   only: it never affects hit geometry or child layout.
//! - Every mutation appends an [`Update`] record to a per-scene queue drained
//!   with [`Scene::drain_updates`], so lifecycle hooks can run *after* a
//!   dispatch or render pass instead of reentrantly inside it.
//!
//! ## API overview
//!
//! - [`Scene`]: the arena. Insert with [`Scene::insert`], relate with
//!   [`Scene::attach`]/[`Scene::detach`], destroy with [`Scene::remove`].
//! - [`NodeId`]: generational handle; stale handles never alias a live node,
//!   and geometry operations on them silently decline.
//! - [`NodeSpec`]: initial geometry and paint data for a node.
//! - [`NodeFlags`]: `DRAGGABLE` and `FOLLOW_PARENT_OFFSET` behavior flags.
//! - [`PropMap`]/[`PropValue`]: sorted inline key/value stores backing the
//!   per-node `state` and `props` maps.
//! - [`Update`]/[`UpdateKind`]: the drained mutation records.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use thicket_scene::{NodeSpec, Scene};
//!
//! let mut scene = Scene::new();
//! let parent = scene.insert(NodeSpec::new((10.0, 10.0), (100.0, 80.0))).unwrap();
//! let child = scene.insert(NodeSpec::new((5.0, 5.0), (20.0, 20.0))).unwrap();
//! scene.attach(parent, child).unwrap();
//!
//! // Child follows the parent's offset by default.
//! assert_eq!(scene.absolute_position(child), Some(Point::new(15.0, 15.0)));
//!
//! // Moving the parent cascades into the child's stored local coordinates.
//! scene.move_by(parent, (2.0, 0.0).into());
//! assert_eq!(scene.origin(child), Some(Point::new(7.0, 5.0)));
//! assert_eq!(scene.size(parent), Some(Size::new(100.0, 80.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coords;
mod error;
mod props;
mod scene;
mod types;
mod update;

pub use error::{AttachError, GeometryError};
pub use props::{PropMap, PropValue};
pub use scene::Scene;
pub use types::{NodeFlags, NodeId, NodeSpec};
pub use update::{Update, UpdateKind};
