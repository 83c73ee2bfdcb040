//! Time-series rendering: one duration bar per run.

use colored::{Color, Colorize};
use pipemon_types::{PipelineRun, RunStatus};

use crate::banner::{banner, REPORT_WIDTH};

const BAR_CHAR: char = '\u{25A4}';
const MAX_BAR_LEN: usize = 40;
const MIN_BAR_LEN: usize = MAX_BAR_LEN / 20;

/// Render run durations for one pipeline as a bar per run.
///
/// Runs render in start-time order. Bar length scales linearly between the
/// fastest and slowest run in the window; bar color reflects the run
/// outcome, and each line carries the percent change against the previous
/// run's duration.
pub fn render_timeseries(name: &str, runs: &[PipelineRun]) -> String {
    let header = banner("ANALYZE", REPORT_WIDTH, Color::Blue, '=', true);
    let footer = banner("", REPORT_WIDTH, Color::White, '=', true);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    if runs.is_empty() {
        out.push_str(&format!("No runs found matching {name}\n"));
        out.push_str(&footer);
        out.push('\n');
        return out;
    }

    let mut ordered: Vec<&PipelineRun> = runs.iter().collect();
    ordered.sort_by_key(|run| run.run_start);

    let min = ordered.iter().map(|r| r.duration_ms).min().unwrap_or(0);
    let max = ordered.iter().map(|r| r.duration_ms).max().unwrap_or(0);
    let span = (max - min).max(1);

    out.push_str(&format!("{}\n\n", name.underline()));

    let mut previous: Option<i64> = None;
    for run in &ordered {
        let scaled =
            ((run.duration_ms - min) as f64 / span as f64 * MAX_BAR_LEN as f64) as usize;
        let bar_len = scaled.clamp(MIN_BAR_LEN, MAX_BAR_LEN);
        let bar = BAR_CHAR.to_string().repeat(bar_len);
        let bar = match run.status {
            RunStatus::Succeeded => bar.green().to_string(),
            RunStatus::Failed => bar.red().to_string(),
            RunStatus::Cancelled => bar.yellow().to_string(),
            _ => bar,
        };

        let start = run.run_start.format("%Y-%m-%d %H:%M:%S");
        let duration = format_duration(run.duration_ms);
        let pct = percent_change(previous, run.duration_ms);

        out.push_str(&format!("{start} {bar} {duration} {pct}\n"));
        previous = Some(run.duration_ms);
    }

    out.push_str(&footer);
    out.push('\n');
    out
}

fn percent_change(previous: Option<i64>, current: i64) -> String {
    let Some(previous) = previous.filter(|p| *p > 0) else {
        return "0.00%".to_string();
    };

    let diff = (current - previous) as f64 / previous as f64 * 100.0;
    if diff > 0.0 {
        format!("\u{2191} {:.2}%", diff).red().to_string()
    } else if diff < 0.0 {
        format!("\u{2193} {:.2}%", diff.abs()).green().to_string()
    } else {
        "0.00%".to_string()
    }
}

fn format_duration(ms: i64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
