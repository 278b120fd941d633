//! Terminal number-line rendering
//!
//! The presentation side of the tool: one render function, parameterized by
//! `ViewMode`, draws a titled ASCII axis with candidate markers (`o`), the
//! target marker (`*`) and a legend naming each plotted fraction.

use crate::types::{Candidate, ViewBounds, ViewMode};

/// Axis width in character cells when no config overrides it.
pub const DEFAULT_AXIS_WIDTH: usize = 64;
/// Narrower than this and markers start colliding on trivial inputs.
pub const MIN_AXIS_WIDTH: usize = 16;

/// Render one number-line view as a multi-line string.
///
/// The bounds must come from `compute_view_extents` over the same values, so
/// every marker lands inside the axis. When a candidate and the target share
/// a cell, the target marker wins.
pub fn render_number_line(
    candidates: &[Candidate],
    target: &Candidate,
    bounds: ViewBounds,
    mode: ViewMode,
    axis_width: usize,
) -> String {
    let width = axis_width.max(MIN_AXIS_WIDTH);
    let mut cells = vec!['-'; width];

    for candidate in candidates {
        cells[marker_column(candidate.value.to_f64(), bounds, width)] = 'o';
    }
    // target last, so it stays visible on a shared cell
    cells[marker_column(target.value.to_f64(), bounds, width)] = '*';

    let mut out = String::new();
    out.push_str(mode.title());
    out.push('\n');

    out.push('|');
    out.extend(cells);
    out.push('|');
    out.push('\n');

    out.push_str(&bounds_row(bounds, width + 2));
    out.push('\n');

    for candidate in candidates {
        out.push_str(&format!(
            "  o {} = {:.6}\n",
            candidate.label,
            candidate.value.to_f64()
        ));
    }
    out.push_str(&format!(
        "  * {} = {:.6} (target)\n",
        target.label,
        target.value.to_f64()
    ));

    out
}

/// Map a value into a column on an axis of `width` cells.
fn marker_column(value: f64, bounds: ViewBounds, width: usize) -> usize {
    let t = (value - bounds.min) / bounds.span();
    let col = (t * (width - 1) as f64).round() as isize;
    col.clamp(0, width as isize - 1) as usize
}

/// Bounds line under the axis: min left-aligned, max right-aligned.
fn bounds_row(bounds: ViewBounds, total_width: usize) -> String {
    let min_text = format!("{:.4}", bounds.min);
    let max_text = format!("{:.4}", bounds.max);
    let gap = total_width.saturating_sub(min_text.len() + max_text.len());
    format!("{}{}{}", min_text, " ".repeat(gap.max(1)), max_text)
}
