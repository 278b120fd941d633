use log::debug;

use crate::parser::fraction::parse_fraction;
use crate::types::Candidate;

/// Parse the comma-separated candidate field into an ordered candidate list.
///
/// Each token is trimmed and parsed independently; tokens that fail to parse
/// are dropped without surfacing an error to the user (the target field, by
/// contrast, fails hard). An empty result is the caller's signal to report
/// that no valid candidates were detected.
pub fn parse_candidate_list(s: &str) -> Vec<Candidate> {
    s.split(',')
        .filter_map(|token| match parse_fraction(token) {
            Ok(value) => Some(Candidate::new(value)),
            Err(err) => {
                debug!("dropping candidate token '{}': {}", token.trim(), err);
                None
            }
        })
        .collect()
}
