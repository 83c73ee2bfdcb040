//! Shared domain types for the pipemon data-factory monitor.
//!
//! # Key Types
//!
//! - [`PipelineDefinition`] -- One fetched pipeline definition, kept as an
//!   opaque JSON snapshot
//! - [`PipelineRun`] / [`RunStatus`] -- Run-history records and their status

pub mod pipeline;
pub mod run;

pub use pipeline::PipelineDefinition;
pub use run::{PipelineRun, RunStatus};
