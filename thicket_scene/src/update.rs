// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutation records drained from the scene.
//!
//! Every scene mutation appends a record instead of invoking callbacks
//! reentrantly. Owners drain the queue between dispatch/render passes with
//! [`Scene::drain_updates`](crate::Scene::drain_updates) and deliver lifecycle
//! hooks from the drained records, so hooks never run while an iteration over
//! the live node sequences is in progress.

use crate::props::PropMap;
use crate::types::NodeId;

/// One recorded mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// The node the mutation applied to.
    pub node: NodeId,
    /// What changed.
    pub kind: UpdateKind,
}

/// The kind of a recorded mutation.
///
/// Pure geometry changes carry no payload; map changes carry full
/// (previous, next) snapshots of the map that changed.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateKind {
    /// Node was inserted into the scene.
    Mounted,
    /// Local position changed (`move_to`/`move_by`). Shifted children record
    /// their own `Moved` independently.
    Moved,
    /// Size changed.
    Resized,
    /// Accumulated rotation changed.
    Turned,
    /// The `state` map was shallow-merged.
    StateChanged {
        /// The map before the merge.
        previous: PropMap,
        /// The map after the merge.
        next: PropMap,
    },
    /// The `props` map was shallow-merged.
    PropsChanged {
        /// The map before the merge.
        previous: PropMap,
        /// The map after the merge.
        next: PropMap,
    },
    /// Node is being removed from the scene. Its handle is already stale by
    /// the time the record is drained.
    Unmounting,
}
