//! Structural diff engine for pipeline definitions.
//!
//! Normalizes fetched definitions into canonical comparable trees, then
//! walks two trees with a deep-equality comparison that collects every point
//! of divergence as a structured record.
//!
//! # Key Types
//!
//! - [`CanonicalTree`] -- Exclusion-filtered map form of one definition
//! - [`TreeDiff`] / [`Divergence`] / [`PathSegment`] -- The comparison result
//!
//! Divergence order is deterministic: keys iterate in sorted order at every
//! level and sequences element by element.

pub mod differ;
pub mod error;
pub mod normalize;

pub use differ::{diff_trees, Divergence, PathSegment, TreeDiff};
pub use error::{DiffError, DiffResult};
pub use normalize::{normalize, CanonicalTree, DEFAULT_EXCLUDED_KEYS};
