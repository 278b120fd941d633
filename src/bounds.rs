//! View-bounds calculation
//!
//! Derives the axis bounds for the two number-line renderings from the set
//! of plotted values. One calculation produces both variants; the render
//! path picks one by `ViewMode` instead of duplicating itself.

use crate::types::{ViewBounds, ViewMode};

/// Padding margin added on each side of the data.
pub const DEFAULT_PADDING: f64 = 0.05;
/// Minimum total width of the fixed-width view.
pub const DEFAULT_MIN_WIDTH: f64 = 1.0;

/// Bounds for both view modes, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewExtents {
    /// At least `min_width` wide, centered on the data midpoint.
    pub fixed: ViewBounds,
    /// Tightly wraps the data plus padding.
    pub auto: ViewBounds,
}

impl ViewExtents {
    pub fn for_mode(&self, mode: ViewMode) -> ViewBounds {
        match mode {
            ViewMode::FixedWidth => self.fixed,
            ViewMode::AutoFit => self.auto,
        }
    }
}

/// Compute both view bounds for a non-empty set of plotted values.
///
/// `auto` spans `[min - padding, max + padding]`; `fixed` widens that span
/// to at least `min_width`, centered on the data midpoint. Even a single
/// distinct value yields an `auto` span of `2 * padding`, so the bounds are
/// always a proper interval.
pub fn compute_view_extents(values: &[f64], padding: f64, min_width: f64) -> ViewExtents {
    debug_assert!(!values.is_empty(), "bounds need at least one value");

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }

    let auto = ViewBounds {
        min: lo - padding,
        max: hi + padding,
    };

    let view_width = auto.span().max(min_width);
    let center = (auto.min + auto.max) / 2.0;
    let fixed = ViewBounds {
        min: center - view_width / 2.0,
        max: center + view_width / 2.0,
    };

    ViewExtents { fixed, auto }
}
