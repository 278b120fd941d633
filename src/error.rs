//! Error taxonomy for one evaluation pass
//!
//! Both variants are detected at the parse boundary, before any distance or
//! plot computation runs. Individual malformed candidate tokens are not an
//! error; they are silently dropped by `parse_candidate_list`.

use thiserror::Error;

use crate::parser::ParseFractionError;

/// A blocking error for the whole submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The target field does not parse as a fraction.
    #[error("invalid target fraction ({0}); example: 2/5")]
    TargetParse(ParseFractionError),
    /// Zero candidate tokens survived parsing.
    #[error("no valid candidate fractions detected")]
    NoValidCandidates,
}
