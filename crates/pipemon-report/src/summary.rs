//! Per-pipeline aggregation of run history and its table rendering.

use std::collections::BTreeMap;

use colored::{Color, Colorize};
use pipemon_types::{PipelineRun, RunStatus};

use crate::banner::{banner, REPORT_WIDTH};

/// Aggregated run counts for one pipeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub pipeline_name: String,
    pub success: u32,
    pub failed: u32,
    pub in_progress: u32,
    pub runtime_total_min: f64,
}

impl RunSummary {
    /// Average runtime in minutes over terminal runs. In-flight runs carry
    /// no meaningful duration and are excluded.
    pub fn runtime_avg_min(&self) -> f64 {
        let terminal = self.success + self.failed;
        if terminal == 0 {
            0.0
        } else {
            self.runtime_total_min / f64::from(terminal)
        }
    }
}

/// Aggregate raw runs per pipeline, keeping only pipelines whose name
/// contains `name_filter` (empty filter keeps everything).
pub fn summarize_runs(runs: &[PipelineRun], name_filter: &str) -> BTreeMap<String, RunSummary> {
    let mut summaries: BTreeMap<String, RunSummary> = BTreeMap::new();

    for run in runs {
        if !name_filter.is_empty() && !run.pipeline_name.contains(name_filter) {
            continue;
        }
        let entry = summaries
            .entry(run.pipeline_name.clone())
            .or_insert_with(|| RunSummary {
                pipeline_name: run.pipeline_name.clone(),
                ..RunSummary::default()
            });

        match run.status {
            RunStatus::Succeeded => entry.success += 1,
            RunStatus::Failed => entry.failed += 1,
            RunStatus::InProgress => entry.in_progress += 1,
            _ => {}
        }
        entry.runtime_total_min += run.duration_ms as f64 / 60_000.0;
    }

    summaries
}

/// Render the bordered run-summary table.
pub fn render_run_summary(summaries: &BTreeMap<String, RunSummary>) -> String {
    let header = banner("SUMMARIZE", REPORT_WIDTH, Color::BrightCyan, '=', true);
    let footer = banner("", REPORT_WIDTH, Color::BrightCyan, '=', true);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&header);
    out.push('\n');

    if summaries.is_empty() {
        out.push_str("No pipeline runs found\n");
        out.push_str(&footer);
        out.push('\n');
        return out;
    }

    let columns = format!(
        "{:<34} {:>8} {:>8} {:>12} {:>14}",
        "Pipeline", "Success", "Failed", "In Progress", "Avg Runtime (min)",
    );
    out.push_str(&format!("{}\n", columns.underline()));

    for summary in summaries.values() {
        // Pad before colorizing so escape codes don't skew the column width.
        let name = format!("{:<34}", summary.pipeline_name);
        out.push_str(&format!(
            "{} {:>8} {:>8} {:>12} {:>14.2}\n",
            name.yellow(),
            summary.success,
            summary.failed,
            summary.in_progress,
            summary.runtime_avg_min(),
        ));
    }

    out.push_str(&footer);
    out.push('\n');
    out
}
