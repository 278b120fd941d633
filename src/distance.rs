//! Distance evaluation
//!
//! Computes absolute double-precision distances from each candidate to the
//! target and picks the closest one. The rationals stay exact up to this
//! point; this is the only place they are converted to `f64`.

use log::debug;

use crate::types::{Candidate, Rational};

/// Result of one evaluation pass over the candidate list.
///
/// `distances` has exactly one entry per input candidate, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Index of the closest candidate; first index wins on an exact tie.
    pub closest_index: usize,
    pub distances: Vec<f64>,
}

impl Evaluation {
    pub fn closest_distance(&self) -> f64 {
        self.distances[self.closest_index]
    }
}

/// Evaluate the distance from every candidate to the target and identify the
/// closest one (stable argmin: ties keep the earliest index).
///
/// The caller guarantees `candidates` is non-empty; empty input is an error
/// condition handled at the parse boundary.
pub fn evaluate(target: &Rational, candidates: &[Candidate]) -> Evaluation {
    debug_assert!(
        !candidates.is_empty(),
        "empty candidate lists are rejected upstream"
    );

    let target_value = target.to_f64();
    let distances: Vec<f64> = candidates
        .iter()
        .map(|c| (c.value.to_f64() - target_value).abs())
        .collect();

    let mut closest_index = 0;
    for (i, d) in distances.iter().enumerate().skip(1) {
        if *d < distances[closest_index] {
            closest_index = i;
        }
    }

    debug!(
        "target {} -> closest {} (distance {:.6})",
        target, candidates[closest_index].label, distances[closest_index]
    );

    Evaluation {
        closest_index,
        distances,
    }
}

/// Everything one submission produces: the parsed target, the surviving
/// candidates in input order, and the evaluation over them.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub target: Candidate,
    pub candidates: Vec<Candidate>,
    pub evaluation: Evaluation,
}

impl ComparisonReport {
    pub fn closest(&self) -> &Candidate {
        &self.candidates[self.evaluation.closest_index]
    }

    /// All plotted values: the candidates plus the target. Feed these to the
    /// view-bounds calculator so both markers always fit on the axis.
    pub fn plotted_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.candidates.iter().map(|c| c.value.to_f64()).collect();
        values.push(self.target.value.to_f64());
        values
    }
}
