// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_event_state --heading-base-level=0

//! Thicket Event State: interaction session state machines.
//!
//! This crate provides small, focused state machines for interactions that
//! require stateful tracking across multiple events:
//!
//! - [`drag`]: a single-target drag session that captures the pointer-to-node
//!   grab offset at press time and translates later pointer positions into
//!   node positions.
//! - [`editing`]: an exclusive text-editing session that replaces
//!   document-global key listeners with explicit, owner-held state.
//!
//! ## Design
//!
//! Each machine is minimal, stateful but simple, and generic over the
//! application's node/widget key type. Neither assumes a particular event
//! system or scene graph: callers feed in pre-computed information (pointer
//! positions in surface coordinates, the pressed node's absolute position)
//! and read back transitions or derived positions.
//!
//! A surface owns exactly one of each, which is what makes "at most one node
//! dragging at a time" and "at most one node editing at a time" structural
//! rather than conventions.

#![no_std]

pub mod drag;
pub mod editing;
