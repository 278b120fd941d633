use fraction_distance::{
    DEFAULT_MIN_WIDTH, DEFAULT_PADDING, EvaluationError, compare, compute_view_extents,
};

#[test]
fn closest_of_three_estimates() {
    // |3/8 - 2/5| = 0.025, the smallest of the three
    let report = compare("2/5", "1/3, 3/8, 1/4").unwrap();
    assert_eq!(report.closest().label, "3/8");
    assert!((report.evaluation.closest_distance() - 0.025).abs() < 1e-12);
    assert_eq!(report.evaluation.distances.len(), 3);
}

#[test]
fn exact_tie_goes_to_first_candidate() {
    // 0 and 1 are both exactly 0.5 away from 1/2
    let report = compare("1/2", "0, 1").unwrap();
    assert_eq!(report.evaluation.closest_index, 0);
    assert_eq!(report.closest().label, "0");
}

#[test]
fn unparsable_target_blocks_evaluation() {
    let err = compare("abc", "1/2").unwrap_err();
    assert!(matches!(err, EvaluationError::TargetParse(_)));
}

#[test]
fn all_candidates_dropped_blocks_evaluation() {
    let err = compare("1/2", "xx, yy").unwrap_err();
    assert_eq!(err, EvaluationError::NoValidCandidates);
}

#[test]
fn self_comparison_and_degenerate_bounds() {
    let report = compare("0", "0").unwrap();
    assert_eq!(report.closest().label, "0");
    assert_eq!(format!("{:.6}", report.evaluation.closest_distance()), "0.000000");

    let extents = compute_view_extents(
        &report.plotted_values(),
        DEFAULT_PADDING,
        DEFAULT_MIN_WIDTH,
    );
    assert!((extents.auto.span() - 0.10).abs() < 1e-12);
    assert!((extents.fixed.span() - 1.0).abs() < 1e-12);
}

#[test]
fn plotted_values_cover_target_and_candidates() {
    let report = compare("2/5", "1/3, 3/8, 1/4").unwrap();
    let values = report.plotted_values();
    assert_eq!(values.len(), 4);

    let extents = compute_view_extents(&values, DEFAULT_PADDING, DEFAULT_MIN_WIDTH);
    for v in values {
        assert!(extents.auto.contains(v));
        assert!(extents.fixed.contains(v));
    }
}
