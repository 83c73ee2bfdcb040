//! Deep structural comparison of two canonical trees.
//!
//! The walk collects every divergence rather than stopping at the first.
//! A divergence carries the root-to-leaf path plus the value found on each
//! side; `None` marks a side where the path is absent. Sequence order is
//! significant: reordered activities register as value divergences at their
//! positions, never as a permutation-reduced diff.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

use crate::normalize::CanonicalTree;

/// One step through a canonical tree, root to leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A map key.
    Key(String),
    /// A position within an ordered sequence.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// One point of structural difference between two canonical trees.
#[derive(Clone, Debug, PartialEq)]
pub struct Divergence {
    /// Path segments in root-to-leaf order.
    pub path: Vec<PathSegment>,
    /// Value at `path` in the left (first-named) tree, if present.
    pub left: Option<Value>,
    /// Value at `path` in the right (second-named) tree, if present.
    pub right: Option<Value>,
}

/// The result of comparing two canonical trees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeDiff {
    /// The ordered list of divergences between the left and right trees.
    pub divergences: Vec<Divergence>,
}

impl TreeDiff {
    /// Create an empty tree diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the trees are structurally equal.
    pub fn is_empty(&self) -> bool {
        self.divergences.is_empty()
    }

    /// Number of divergences.
    pub fn len(&self) -> usize {
        self.divergences.len()
    }
}

/// Compare two canonical trees and collect every divergence.
///
/// Keys iterate in sorted order at every level, so the divergence order
/// (and the report's `[i/N]` numbering) is stable across runs.
pub fn diff_trees(left: &CanonicalTree, right: &CanonicalTree) -> TreeDiff {
    let mut divergences = Vec::new();
    let mut path = Vec::new();

    let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
    for key in keys {
        path.push(PathSegment::Key(key.clone()));
        diff_entry(&mut path, left.get(key), right.get(key), &mut divergences);
        path.pop();
    }

    TreeDiff { divergences }
}

fn diff_entry(
    path: &mut Vec<PathSegment>,
    left: Option<&Value>,
    right: Option<&Value>,
    out: &mut Vec<Divergence>,
) {
    match (left, right) {
        (Some(l), Some(r)) => diff_value(path, l, r, out),
        (Some(l), None) => out.push(Divergence {
            path: path.clone(),
            left: Some(l.clone()),
            right: None,
        }),
        (None, Some(r)) => out.push(Divergence {
            path: path.clone(),
            left: None,
            right: Some(r.clone()),
        }),
        (None, None) => {}
    }
}

fn diff_value(path: &mut Vec<PathSegment>, left: &Value, right: &Value, out: &mut Vec<Divergence>) {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            let keys: BTreeSet<&String> = l.keys().chain(r.keys()).collect();
            for key in keys {
                path.push(PathSegment::Key(key.clone()));
                diff_entry(path, l.get(key), r.get(key), out);
                path.pop();
            }
        }
        (Value::Array(l), Value::Array(r)) => {
            for i in 0..l.len().max(r.len()) {
                path.push(PathSegment::Index(i));
                diff_entry(path, l.get(i), r.get(i), out);
                path.pop();
            }
        }
        // Differing primitives, or containers of different kinds, surface as
        // a single divergence carrying both values.
        (l, r) => {
            if l != r {
                out.push(Divergence {
                    path: path.clone(),
                    left: Some(l.clone()),
                    right: Some(r.clone()),
                });
            }
        }
    }
}
