// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small per-node key/value stores.
//!
//! Each node carries two of these: a `state` map for internal bookkeeping and
//! a `props` map for externally supplied values. Both are expected to stay
//! small, so storage is a sorted vector with binary search rather than a hash
//! map:
//!
//! - Better cache locality (contiguous memory)
//! - Lower memory overhead (no hash buckets)
//! - O(log n) lookup, which is fast for typical entry counts
//! - Inline storage for small maps via `SmallVec`

use alloc::string::String;
use smallvec::SmallVec;

/// Default inline capacity for map entries.
///
/// Most nodes have only a handful of entries set, so this avoids heap
/// allocation in the common case.
const INLINE_ENTRIES: usize = 8;

/// A value stored in a node's `state` or `props` map.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A sorted key/value map with inline storage for small entry counts.
///
/// Mutations go through [`PropMap::set`] and [`PropMap::merge`]; the latter is
/// the shallow-merge used by `set_state`/`set_props`, which snapshot the map
/// before and after so observers can diff.
///
/// # Example
///
/// ```
/// use thicket_scene::PropMap;
///
/// let mut map = PropMap::new();
/// map.set("count", 2_i64.into());
/// map.set("label", "two".into());
/// assert_eq!(map.get("count"), Some(&2_i64.into()));
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropMap {
    /// Entries sorted by key for binary search lookup.
    entries: SmallVec<[(&'static str, PropValue); INLINE_ENTRIES]>,
}

impl PropMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .binary_search_by(|(k, _)| (*k).cmp(key))
            .ok()
            .map(|i| &self.entries[i].1)
    }

    /// Returns `true` if `key` has a value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key` to `value`, returning `true` if the stored value changed.
    pub fn set(&mut self, key: &'static str, value: PropValue) -> bool {
        match self.entries.binary_search_by(|(k, _)| (*k).cmp(key)) {
            Ok(i) => {
                if self.entries[i].1 == value {
                    false
                } else {
                    self.entries[i].1 = value;
                    true
                }
            }
            Err(i) => {
                self.entries.insert(i, (key, value));
                true
            }
        }
    }

    /// Shallow-merges `entries` into the map, returning `true` if anything changed.
    pub fn merge<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (&'static str, PropValue)>,
    {
        let mut changed = false;
        for (key, value) in entries {
            changed |= self.set(key, value);
        }
        changed
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Number of entries set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
