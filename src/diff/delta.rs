//! Structural delta: the differences found between two values.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::path::DeltaPath;

/// An old/new value pair at one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueChange {
    /// Value in the first document
    pub old_value: Value,
    /// Value in the second document
    pub new_value: Value,
}

impl ValueChange {
    /// Create a change from two snapshots.
    pub fn new(old_value: Value, new_value: Value) -> Self {
        Self {
            old_value,
            new_value,
        }
    }
}

/// What happened at one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Same kind of value, different content
    ValueChanged,
    /// Value appeared or disappeared (null on one side)
    TypeChanged,
    /// Sequence element present only in the second document
    ItemAdded,
    /// Sequence element present only in the first document
    ItemRemoved,
}

/// Nested description of the differences between two structures.
///
/// Every entry is keyed by the [`DeltaPath`] it occurred at; paths are
/// ordered numerically by index, then by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuralDelta {
    /// Leaf values that differ
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub values_changed: BTreeMap<DeltaPath, ValueChange>,

    /// Optional values set on one side and unset on the other
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub type_changes: BTreeMap<DeltaPath, ValueChange>,

    /// Sequence elements only in the second value
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub iterable_item_added: BTreeMap<DeltaPath, Value>,

    /// Sequence elements only in the first value
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub iterable_item_removed: BTreeMap<DeltaPath, Value>,
}

impl StructuralDelta {
    /// Create an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no differences were recorded.
    pub fn is_empty(&self) -> bool {
        self.values_changed.is_empty()
            && self.type_changes.is_empty()
            && self.iterable_item_added.is_empty()
            && self.iterable_item_removed.is_empty()
    }

    /// Total number of recorded differences.
    pub fn len(&self) -> usize {
        self.values_changed.len()
            + self.type_changes.len()
            + self.iterable_item_added.len()
            + self.iterable_item_removed.len()
    }

    /// Record a changed leaf value.
    pub fn record_value_change(&mut self, path: DeltaPath, change: ValueChange) {
        self.values_changed.insert(path, change);
    }

    /// Record a null/value transition.
    pub fn record_type_change(&mut self, path: DeltaPath, change: ValueChange) {
        self.type_changes.insert(path, change);
    }

    /// Record an element only present in the second sequence.
    pub fn record_added(&mut self, path: DeltaPath, value: Value) {
        self.iterable_item_added.insert(path, value);
    }

    /// Record an element only present in the first sequence.
    pub fn record_removed(&mut self, path: DeltaPath, value: Value) {
        self.iterable_item_removed.insert(path, value);
    }

    /// Number of sequence elements removed.
    pub fn removed_count(&self) -> usize {
        self.iterable_item_removed.len()
    }

    /// Number of sequence elements added.
    pub fn added_count(&self) -> usize {
        self.iterable_item_added.len()
    }

    /// Look up the change recorded at a path, whatever its kind.
    pub fn kind_at(&self, path: &DeltaPath) -> Option<ChangeKind> {
        if self.values_changed.contains_key(path) {
            Some(ChangeKind::ValueChanged)
        } else if self.type_changes.contains_key(path) {
            Some(ChangeKind::TypeChanged)
        } else if self.iterable_item_added.contains_key(path) {
            Some(ChangeKind::ItemAdded)
        } else if self.iterable_item_removed.contains_key(path) {
            Some(ChangeKind::ItemRemoved)
        } else {
            None
        }
    }

    /// All recorded paths with their kind, in path order within each group.
    pub fn entries(&self) -> impl Iterator<Item = (&DeltaPath, ChangeKind)> {
        self.values_changed
            .keys()
            .map(|p| (p, ChangeKind::ValueChanged))
            .chain(self.type_changes.keys().map(|p| (p, ChangeKind::TypeChanged)))
            .chain(self.iterable_item_added.keys().map(|p| (p, ChangeKind::ItemAdded)))
            .chain(
                self.iterable_item_removed
                    .keys()
                    .map(|p| (p, ChangeKind::ItemRemoved)),
            )
    }
}
