//! The bordered compare report.

use colored::{Color, Colorize};
use pipemon_diff::TreeDiff;

use crate::banner::{banner, REPORT_WIDTH};
use crate::format::{format_divergence, NOISE_KEYS};

/// Assemble the full compare report for two pipelines.
///
/// Header banner, pass/fail status line, then either a single
/// "No differences found" line or one `[i/N]` block per divergence, and the
/// footer banner. Blocks appear in the differ's deterministic order.
pub fn render_compare_report(diff: &TreeDiff, name1: &str, name2: &str) -> String {
    let header = banner("COMPARE", REPORT_WIDTH, Color::Blue, '=', true);
    let footer = banner("", REPORT_WIDTH, Color::White, '=', true);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&header);
    out.push('\n');

    let mark = if diff.is_empty() {
        "\u{2714}".green().to_string()
    } else {
        "\u{2718}".red().to_string()
    };
    out.push_str(&format!(
        "[ {mark} ] {} | {}\n",
        name1.yellow(),
        name2.cyan()
    ));

    if diff.is_empty() {
        out.push_str(&format!("{}\n", "No differences found".green()));
        out.push_str(&footer);
        out.push('\n');
        return out;
    }

    let total = diff.len();
    let announcement = if total == 1 {
        "1 difference found".to_string()
    } else {
        format!("{total} differences found")
    };
    out.push_str(&format!("\n{}\n", announcement.red()));

    for (i, divergence) in diff.divergences.iter().enumerate() {
        let block = format_divergence(divergence, NOISE_KEYS);
        let sub_header = banner(
            &format!("[{}/{}]", i + 1, total),
            REPORT_WIDTH,
            Color::White,
            '-',
            false,
        );
        out.push_str(&sub_header);
        out.push('\n');
        for line in &block.breadcrumbs {
            out.push_str(line);
            out.push('\n');
        }
        out.push(':');
        out.push_str(&block.value_line);
        out.push_str("\n\n");
    }

    out.push_str(&footer);
    out.push('\n');
    out
}
