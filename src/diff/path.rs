//! Addresses into a compared structure.

use serde::{Serialize, Serializer};
use std::fmt;

/// One step into a nested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// Position in a sequence
    Index(usize),
    /// Named field of a record
    Field(&'static str),
}

/// Chain of segments from the root of a compared value, e.g. `[0].bold`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeltaPath {
    segments: Vec<PathSegment>,
}

impl DeltaPath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from segments.
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Segments from the root.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Last segment, `None` at the root.
    pub fn last(&self) -> Option<PathSegment> {
        self.segments.last().copied()
    }

    /// Field name of the last segment, if it is a field.
    pub fn field(&self) -> Option<&'static str> {
        match self.last() {
            Some(PathSegment::Field(name)) => Some(name),
            _ => None,
        }
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    /// Return a child path with one more index segment.
    pub fn index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push(PathSegment::Index(index));
        path
    }

    /// Return a child path with one more field segment.
    pub fn field_path(&self, name: &'static str) -> Self {
        let mut path = self.clone();
        path.push(PathSegment::Field(name));
        path
    }
}

impl fmt::Display for DeltaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
            }
        }
        Ok(())
    }
}

impl Serialize for DeltaPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
