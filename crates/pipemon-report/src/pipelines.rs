//! Per-folder aggregation of pipeline structure and its table rendering.

use std::collections::BTreeMap;

use colored::{Color, Colorize};
use pipemon_types::PipelineDefinition;
use serde_json::Value;

use crate::banner::{banner, REPORT_WIDTH};

/// Folder name used for pipelines that carry no folder annotation.
pub const ROOT_FOLDER: &str = "root";

/// Aggregated structure counts for one folder of pipelines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipelineSummary {
    pub factory_name: String,
    pub folder: String,
    pub pipelines: u32,
    pub activities: u32,
    pub copy_activities: u32,
    pub databricks_activities: u32,
}

/// Aggregate pipeline definitions per folder, counting activities and the
/// Copy / DatabricksNotebook breakdowns within each.
pub fn summarize_pipelines(
    factory_name: &str,
    pipelines: &[PipelineDefinition],
) -> BTreeMap<String, PipelineSummary> {
    let mut summaries: BTreeMap<String, PipelineSummary> = BTreeMap::new();

    for pipeline in pipelines {
        let folder = pipeline
            .body
            .pointer("/properties/folder/name")
            .and_then(Value::as_str)
            .unwrap_or(ROOT_FOLDER);

        let entry = summaries
            .entry(folder.to_string())
            .or_insert_with(|| PipelineSummary {
                factory_name: factory_name.to_string(),
                folder: folder.to_string(),
                ..PipelineSummary::default()
            });
        entry.pipelines += 1;

        let activities = pipeline
            .body
            .pointer("/properties/activities")
            .and_then(Value::as_array);
        for activity in activities.into_iter().flatten() {
            entry.activities += 1;
            match activity.get("type").and_then(Value::as_str) {
                Some("Copy") => entry.copy_activities += 1,
                Some("DatabricksNotebook") => entry.databricks_activities += 1,
                _ => {}
            }
        }
    }

    summaries
}

/// Render the bordered pipeline-structure table.
pub fn render_pipeline_summary(summaries: &BTreeMap<String, PipelineSummary>) -> String {
    let header = banner("SUMMARIZE", REPORT_WIDTH, Color::Blue, '=', true);
    let footer = banner("", REPORT_WIDTH, Color::Blue, '=', true);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&header);
    out.push('\n');

    if summaries.is_empty() {
        out.push_str("No pipelines found\n");
        out.push_str(&footer);
        out.push('\n');
        return out;
    }

    let columns = format!(
        "{:<20} {:<20} {:>9} {:>10} {:>6} {:>10}",
        "Factory", "Folder", "Pipelines", "Activities", "Copy", "Databricks",
    );
    out.push_str(&format!("{}\n", columns.underline()));

    for summary in summaries.values() {
        // Pad before colorizing so escape codes don't skew the column width.
        let factory = format!("{:<20}", summary.factory_name);
        out.push_str(&format!(
            "{} {:<20} {:>9} {:>10} {:>6} {:>10}\n",
            factory.yellow(),
            summary.folder,
            summary.pipelines,
            summary.activities,
            summary.copy_activities,
            summary.databricks_activities,
        ));
    }

    out.push_str(&footer);
    out.push('\n');
    out
}
