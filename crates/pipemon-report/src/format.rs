//! Divergence formatting: structured record to human-readable block.
//!
//! A reviewer cares about where in the definition two pipelines differ, not
//! about the structural scaffolding every definition shares. Index markers
//! and noise keys are elided from the breadcrumb, but never from divergence
//! detection itself.

use colored::Colorize;
use pipemon_diff::{Divergence, PathSegment};
use serde_json::Value;

/// Path segment names treated as structural scaffolding and hidden from
/// breadcrumbs. Matching is by substring.
pub const NOISE_KEYS: &[&str] = &["properties", "activities", "slice"];

/// One divergence rendered for the report: indented breadcrumb lines plus
/// a final value line.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffBlock {
    pub breadcrumbs: Vec<String>,
    pub value_line: String,
}

/// Render one divergence into a breadcrumb block.
///
/// Retained segments indent 2 spaces per ordinal among retained segments.
/// The value line reads `left != right`, left belonging to the first-named
/// pipeline (yellow) and right to the second (cyan); a one-sided divergence
/// renders the present value alone with a note naming the side it is
/// missing from.
pub fn format_divergence(divergence: &Divergence, noise_keys: &[&str]) -> DiffBlock {
    let retained: Vec<&str> = divergence
        .path
        .iter()
        .filter_map(|segment| match segment {
            PathSegment::Index(_) => None,
            PathSegment::Key(key) => {
                if noise_keys.iter().any(|noise| key.contains(noise)) {
                    None
                } else {
                    Some(key.as_str())
                }
            }
        })
        .collect();

    let breadcrumbs = retained
        .iter()
        .enumerate()
        .map(|(depth, key)| format!("{}{}", "  ".repeat(depth), key))
        .collect();

    let indent = "  ".repeat(retained.len());
    let value_line = match (&divergence.left, &divergence.right) {
        (Some(left), Some(right)) => format!(
            "{indent}{} != {}",
            render_value(left).yellow(),
            render_value(right).cyan(),
        ),
        (Some(left), None) => format!(
            "{indent}{} {}",
            render_value(left).yellow(),
            "(missing in second pipeline)".dimmed(),
        ),
        (None, Some(right)) => format!(
            "{indent}{} {}",
            render_value(right).cyan(),
            "(missing in first pipeline)".dimmed(),
        ),
        // The differ never emits a divergence with no value on either side.
        (None, None) => indent,
    };

    DiffBlock {
        breadcrumbs,
        value_line,
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn divergence(path: Vec<PathSegment>, left: Option<Value>, right: Option<Value>) -> Divergence {
        Divergence { path, left, right }
    }

    fn key(name: &str) -> PathSegment {
        PathSegment::Key(name.to_string())
    }

    #[test]
    fn noise_keys_and_indices_are_elided() {
        colored::control::set_override(false);
        let d = divergence(
            vec![
                key("properties"),
                key("activities"),
                PathSegment::Index(0),
                key("type"),
            ],
            Some(json!("Copy")),
            Some(json!("DatabricksNotebook")),
        );

        let block = format_divergence(&d, NOISE_KEYS);
        assert_eq!(block.breadcrumbs, vec!["type"]);
        assert_eq!(block.value_line, "  Copy != DatabricksNotebook");
    }

    #[test]
    fn retained_segments_indent_by_ordinal() {
        colored::control::set_override(false);
        let d = divergence(
            vec![key("parameters"), key("retries"), key("default")],
            Some(json!(3)),
            Some(json!(5)),
        );

        let block = format_divergence(&d, NOISE_KEYS);
        assert_eq!(block.breadcrumbs, vec!["parameters", "  retries", "    default"]);
        assert!(block.value_line.starts_with("      "));
    }

    #[test]
    fn noise_matching_is_by_substring() {
        colored::control::set_override(false);
        let d = divergence(
            vec![key("typeProperties"), key("path")],
            Some(json!("a")),
            Some(json!("b")),
        );

        // Matching is case-sensitive: "typeProperties" survives.
        let block = format_divergence(&d, NOISE_KEYS);
        assert_eq!(block.breadcrumbs, vec!["typeProperties", "  path"]);

        let d = divergence(vec![key("sliceIdentifier")], Some(json!(1)), Some(json!(2)));
        let block = format_divergence(&d, NOISE_KEYS);
        assert!(block.breadcrumbs.is_empty());
    }

    #[test]
    fn one_sided_divergence_names_the_missing_side() {
        colored::control::set_override(false);
        let d = divergence(vec![key("folder")], Some(json!("etl")), None);
        let block = format_divergence(&d, NOISE_KEYS);
        assert_eq!(block.value_line, "  etl (missing in second pipeline)");

        let d = divergence(vec![key("folder")], None, Some(json!("etl")));
        let block = format_divergence(&d, NOISE_KEYS);
        assert_eq!(block.value_line, "  etl (missing in first pipeline)");
    }

    #[test]
    fn non_string_values_render_as_json() {
        colored::control::set_override(false);
        let d = divergence(
            vec![key("concurrency")],
            Some(json!(1)),
            Some(json!({"max": 4})),
        );
        let block = format_divergence(&d, NOISE_KEYS);
        assert_eq!(block.value_line, "  1 != {\"max\":4}");
    }

    #[test]
    fn fully_elided_path_still_renders_a_value_line() {
        colored::control::set_override(false);
        let d = divergence(
            vec![key("properties"), key("activities"), PathSegment::Index(1)],
            Some(json!({"type": "Wait"})),
            None,
        );
        let block = format_divergence(&d, NOISE_KEYS);
        assert!(block.breadcrumbs.is_empty());
        assert!(block.value_line.contains("Wait"));
    }
}
