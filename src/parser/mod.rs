//! Fraction parsing module
//!
//! This module turns the raw user-entered strings into exact rational values.
//! `parse_fraction` handles a single literal; `parse_candidate_list` handles
//! the comma-separated candidate field.

mod fraction;
mod input;

pub use fraction::{ParseFractionError, parse_fraction};
pub use input::parse_candidate_list;
