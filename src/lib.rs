pub mod bounds;
pub mod config;
pub mod distance;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;

// re-export the main API
pub use bounds::{DEFAULT_MIN_WIDTH, DEFAULT_PADDING, ViewExtents, compute_view_extents};
pub use distance::{ComparisonReport, Evaluation, evaluate};
pub use error::EvaluationError;
pub use parser::{ParseFractionError, parse_candidate_list, parse_fraction};
pub use render::render_number_line;
pub use types::{Candidate, Rational, ViewBounds, ViewMode};

/// One full evaluation from the two raw input strings.
///
/// Parses the target (hard failure) and the candidate list (lossy, per
/// token), then evaluates distances. Both error conditions fire before any
/// distance or plot computation.
pub fn compare(target: &str, candidates: &str) -> Result<ComparisonReport, EvaluationError> {
    let target_value = parse_fraction(target).map_err(EvaluationError::TargetParse)?;

    let candidates = parse_candidate_list(candidates);
    if candidates.is_empty() {
        return Err(EvaluationError::NoValidCandidates);
    }

    let evaluation = evaluate(&target_value, &candidates);
    Ok(ComparisonReport {
        target: Candidate::new(target_value),
        candidates,
        evaluation,
    })
}

#[cfg(test)]
mod tests;
