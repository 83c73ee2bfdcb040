//! Terminal rendering for the pipemon monitor.
//!
//! Every renderer returns a `String`; only the CLI binary writes to the
//! terminal. Colors follow one convention throughout: the first-named
//! pipeline is yellow, the second cyan, success green, failure red.
//!
//! # Key Pieces
//!
//! - [`format_divergence`] / [`DiffBlock`] -- One divergence as an indented
//!   breadcrumb block
//! - [`render_compare_report`] -- The full bordered compare report
//! - [`summarize_runs`] / [`render_run_summary`] -- Per-pipeline run counts
//! - [`summarize_pipelines`] / [`render_pipeline_summary`] -- Per-folder
//!   pipeline structure counts
//! - [`render_timeseries`] -- Duration bars for one pipeline's runs

pub mod banner;
pub mod compare;
pub mod format;
pub mod pipelines;
pub mod summary;
pub mod timeseries;

pub use banner::{banner, REPORT_WIDTH};
pub use compare::render_compare_report;
pub use format::{format_divergence, DiffBlock, NOISE_KEYS};
pub use pipelines::{render_pipeline_summary, summarize_pipelines, PipelineSummary};
pub use summary::{render_run_summary, summarize_runs, RunSummary};
pub use timeseries::render_timeseries;
