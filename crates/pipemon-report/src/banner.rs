//! Fixed-width banner lines shared by every report.

use colored::{Color, Colorize};

/// Visual width of every bordered report, in columns.
pub const REPORT_WIDTH: usize = 80;

/// Build one banner line.
///
/// An empty title yields a bare spacer run (the footer form). A non-empty
/// title is set off by single spaces and either centered between spacer
/// runs or left-aligned with the spacer filling the remainder.
pub fn banner(title: &str, width: usize, color: Color, spacer: char, centered: bool) -> String {
    if title.is_empty() {
        return spacer.to_string().repeat(width);
    }

    let title_len = title.chars().count();
    let colored_title = title.color(color);

    if centered {
        let mut start = (width.saturating_sub(title_len) / 2).saturating_sub(1);
        let end = start;
        if start * 2 < width.saturating_sub(title_len) {
            start += 1;
        }
        format!(
            "{} {} {}",
            spacer.to_string().repeat(start),
            colored_title,
            spacer.to_string().repeat(end),
        )
    } else {
        let fill = width.saturating_sub(title_len + 1);
        format!("{} {}", colored_title, spacer.to_string().repeat(fill))
    }
}
