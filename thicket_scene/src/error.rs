// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for scene construction and tree mutation.

use core::fmt;

/// Rejected node geometry.
///
/// Construction and [`Scene::resize`](crate::Scene::resize) validate their
/// inputs; everything else in the scene assumes geometry is well-formed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A coordinate or size component was NaN or infinite.
    NonFinite,
    /// A width or height was negative.
    NegativeSize,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "geometry contains a non-finite value"),
            Self::NegativeSize => write!(f, "size components must be non-negative"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Rejected parent/child attachment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttachError {
    /// Parent or child handle no longer refers to a live node.
    Stale,
    /// The child already has a parent. A node appears in exactly one `children`
    /// sequence at a time; callers must [`detach`](crate::Scene::detach) first.
    AlreadyAttached,
    /// The attachment would make a node its own ancestor. Cycles are rejected
    /// here so the parent chain stays acyclic for every later walk.
    WouldCycle,
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stale => write!(f, "parent or child node is no longer alive"),
            Self::AlreadyAttached => write!(f, "child is already attached to a parent"),
            Self::WouldCycle => write!(f, "attachment would create a cycle"),
        }
    }
}

impl core::error::Error for AttachError {}
