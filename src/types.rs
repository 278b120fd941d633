//! Type definitions for fraction distance evaluation
//!
//! This module defines the value types shared by the parser, the distance
//! evaluator and the view-bounds calculator. All of them are immutable once
//! constructed; every user submission builds a fresh set.

use std::cmp::Ordering;
use std::fmt;

/// An exact rational number kept in lowest terms.
///
/// The denominator is always positive; the sign lives on the numerator.
/// Conversion to floating point happens only at the distance/plot boundary,
/// so equality and ordering stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Build a rational from a numerator and denominator, reducing to lowest
    /// terms and normalizing the sign onto the numerator.
    ///
    /// Returns `None` for a zero denominator, or when sign normalization
    /// would overflow (`i64::MIN` components).
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let (mut n, mut d) = (numerator, denominator);
        if d < 0 {
            n = n.checked_neg()?;
            d = d.checked_neg()?;
        }
        let g = gcd(n.unsigned_abs(), d.unsigned_abs());
        if g > 1 {
            n /= g as i64;
            d /= g as i64;
        }
        Some(Rational {
            numerator: n,
            denominator: d,
        })
    }

    /// A whole number as a rational (denominator 1).
    pub fn from_integer(value: i64) -> Self {
        Rational {
            numerator: value,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Double-precision approximation. Only the distance computation and the
    /// plot coordinates go through this.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Cross-multiplication in `i128`, so comparison never rounds.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Rational {
    /// Canonical reduced form: `2/3`, or just `3` for whole numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// A parsed fraction together with the canonical label used on the plot.
///
/// The label is the reduced rational representation, not the raw input text
/// (`"4/6"` is labeled `2/3`). List order is preserved by the caller; it
/// matters for tie-break and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: Rational,
    pub label: String,
}

impl Candidate {
    pub fn new(value: Rational) -> Self {
        Candidate {
            label: value.to_string(),
            value,
        }
    }
}

/// Numeric axis bounds for one number-line rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub min: f64,
    pub max: f64,
}

impl ViewBounds {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Selector for the single parameterized render path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Total span is at least a minimum constant, centered on the data.
    FixedWidth,
    /// Span tightly wraps the plotted data plus the padding margin.
    AutoFit,
}

impl ViewMode {
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::FixedWidth => "Fixed-width view",
            ViewMode::AutoFit => "Auto-fit view",
        }
    }
}
