//! Order-sensitive structural diff.
//!
//! Sequences are compared position by position: element `N` of the old
//! value against element `N` of the new one, with the tail of the longer
//! sequence reported as additions or removals. Every occurrence is its own
//! position, so repeated values are never collapsed. Records recurse field
//! by field, and each difference lands in a [`StructuralDelta`] under the
//! [`DeltaPath`] where it was found.
//!
//! # Example
//!
//! ```
//! use docdiff::diff::diff;
//!
//! let old = vec!["Intro".to_string(), "Body".to_string()];
//! let new = vec!["Body".to_string(), "Intro".to_string()];
//!
//! let delta = diff(&old, &new);
//! assert_eq!(delta.values_changed.len(), 2);
//! ```

mod delta;
mod path;

pub use delta::{ChangeKind, StructuralDelta, ValueChange};
pub use path::{DeltaPath, PathSegment};

use serde::Serialize;
use serde_json::Value;

use crate::model::Alignment;

/// A value that can be compared structurally against another of its type.
pub trait Diff {
    /// Record the differences between `self` (old) and `other` (new) into
    /// `delta`, addressing them relative to `path`.
    ///
    /// `path` must be left as it was found.
    fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta);
}

/// Compare two values and return their structural delta.
pub fn diff<T: Diff + ?Sized>(old: &T, new: &T) -> StructuralDelta {
    let mut delta = StructuralDelta::new();
    let mut path = DeltaPath::root();
    old.diff_at(new, &mut path, &mut delta);
    log::trace!("Structural diff recorded {} differences", delta.len());
    delta
}

/// JSON snapshot of a value for the delta report.
pub fn snapshot<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Recurse into the named fields of two records.
macro_rules! diff_fields {
    ($old:expr, $new:expr, $path:expr, $delta:expr; $($field:ident),+ $(,)?) => {
        $(
            $path.push($crate::diff::PathSegment::Field(stringify!($field)));
            $crate::diff::Diff::diff_at(&$old.$field, &$new.$field, $path, $delta);
            $path.pop();
        )+
    };
}
pub(crate) use diff_fields;

macro_rules! leaf_diff {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Diff for $ty {
                fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
                    if self != other {
                        delta.record_value_change(
                            path.clone(),
                            ValueChange::new(snapshot(self), snapshot(other)),
                        );
                    }
                }
            }
        )+
    };
}

leaf_diff!(bool, str, String, u8, u16, u32, u64, usize, i32, i64, Alignment);

macro_rules! float_diff {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Diff for $ty {
                fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
                    let both_nan = self.is_nan() && other.is_nan();
                    if self != other && !both_nan {
                        delta.record_value_change(
                            path.clone(),
                            ValueChange::new(snapshot(self), snapshot(other)),
                        );
                    }
                }
            }
        )+
    };
}

float_diff!(f32, f64);

impl<T: Diff + Serialize> Diff for Option<T> {
    fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
        match (self, other) {
            (Some(old), Some(new)) => old.diff_at(new, path, delta),
            (None, None) => {}
            _ => delta.record_type_change(
                path.clone(),
                ValueChange::new(snapshot(self), snapshot(other)),
            ),
        }
    }
}

impl<T: Diff + Serialize> Diff for [T] {
    fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
        let common = self.len().min(other.len());

        for (index, (old, new)) in self.iter().zip(other.iter()).enumerate() {
            path.push(PathSegment::Index(index));
            old.diff_at(new, path, delta);
            path.pop();
        }

        for (index, item) in other.iter().enumerate().skip(common) {
            delta.record_added(path.index(index), snapshot(item));
        }
        for (index, item) in self.iter().enumerate().skip(common) {
            delta.record_removed(path.index(index), snapshot(item));
        }
    }
}

impl<T: Diff + Serialize> Diff for Vec<T> {
    fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
        self.as_slice().diff_at(other.as_slice(), path, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Entry {
        text: String,
        bold: bool,
        size: Option<f32>,
    }

    impl Diff for Entry {
        fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
            diff_fields!(self, other, path, delta; text, bold, size);
        }
    }

    fn entry(text: &str, bold: bool) -> Entry {
        Entry {
            text: text.to_string(),
            bold,
            size: None,
        }
    }

    #[test]
    fn test_identical_is_empty() {
        let a = vec![entry("a", false), entry("b", true)];
        assert!(diff(&a, &a.clone()).is_empty());
    }

    #[test]
    fn test_field_level_change() {
        let delta = diff(&vec![entry("Hello", false)], &vec![entry("Hello", true)]);
        assert_eq!(delta.len(), 1);

        let change = &delta.values_changed[&DeltaPath::root().index(0).field_path("bold")];
        assert_eq!(change.old_value, json!(false));
        assert_eq!(change.new_value, json!(true));
    }

    #[test]
    fn test_reorder_is_reported() {
        let delta = diff(
            &vec![entry("one", false), entry("two", false)],
            &vec![entry("two", false), entry("one", false)],
        );
        assert_eq!(delta.values_changed.len(), 2);
        assert!(delta
            .values_changed
            .contains_key(&DeltaPath::root().index(0).field_path("text")));
        assert!(delta
            .values_changed
            .contains_key(&DeltaPath::root().index(1).field_path("text")));
    }

    #[test]
    fn test_repeated_value_removal_counts_once() {
        let delta = diff(&vec![entry("P", false), entry("P", false)], &vec![entry("P", false)]);
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.removed_count(), 1);
        assert!(delta
            .iterable_item_removed
            .contains_key(&DeltaPath::root().index(1)));
    }

    #[test]
    fn test_longer_new_sequence_reports_additions() {
        let delta = diff(&Vec::<Entry>::new(), &vec![entry("x", false), entry("y", false)]);
        assert_eq!(delta.added_count(), 2);
        assert_eq!(
            delta.iterable_item_added[&DeltaPath::root().index(1)],
            json!({"text": "y", "bold": false, "size": null})
        );
    }

    #[test]
    fn test_option_transition_is_type_change() {
        let mut a = entry("x", false);
        let mut b = a.clone();
        b.size = Some(12.0);

        let delta = diff(&a, &b);
        assert_eq!(delta.type_changes.len(), 1);
        assert!(delta.values_changed.is_empty());

        a.size = Some(11.0);
        let delta = diff(&a, &b);
        assert_eq!(delta.values_changed.len(), 1);
    }

    #[test]
    fn test_nested_sequences() {
        let old = vec![vec!["a".to_string(), "b".to_string()]];
        let new = vec![vec!["a".to_string(), "c".to_string(), "d".to_string()]];

        let delta = diff(&old, &new);
        let changed: Vec<_> = delta.values_changed.keys().map(|p| p.to_string()).collect();
        let added: Vec<_> = delta.iterable_item_added.keys().map(|p| p.to_string()).collect();
        assert_eq!(changed, vec!["[0][1]"]);
        assert_eq!(added, vec!["[0][2]"]);
    }

    #[test]
    fn test_nan_sizes_compare_equal() {
        let mut a = entry("x", false);
        a.size = Some(f32::NAN);
        assert!(diff(&a, &a.clone()).is_empty());
    }
}
