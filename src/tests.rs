use crate::bounds::*;
use crate::parser::*;
use crate::types::*;
use crate::{compare, evaluate};

#[test]
fn test_rational_reduces_on_construction() {
    let r = Rational::new(4, 6).unwrap();
    assert_eq!((r.numerator(), r.denominator()), (2, 3));
    assert_eq!(r, Rational::new(2, 3).unwrap());

    // sign normalizes onto the numerator
    let r = Rational::new(1, -2).unwrap();
    assert_eq!((r.numerator(), r.denominator()), (-1, 2));
    let r = Rational::new(-3, -9).unwrap();
    assert_eq!((r.numerator(), r.denominator()), (1, 3));

    assert_eq!(Rational::new(1, 0), None);
}

#[test]
fn test_rational_display_is_canonical() {
    assert_eq!(Rational::new(4, 6).unwrap().to_string(), "2/3");
    assert_eq!(Rational::new(3, 1).unwrap().to_string(), "3");
    assert_eq!(Rational::new(0, 5).unwrap().to_string(), "0");
    assert_eq!(Rational::new(-2, 4).unwrap().to_string(), "-1/2");
}

#[test]
fn test_rational_ordering_is_exact() {
    let third = Rational::new(1, 3).unwrap();
    let three_eighths = Rational::new(3, 8).unwrap();
    assert!(third < three_eighths);
    assert!(Rational::from_integer(-1) < Rational::new(-1, 2).unwrap());
}

#[test]
fn test_parse_fraction_accepted_forms() {
    assert_eq!(parse_fraction("2/5").unwrap(), Rational::new(2, 5).unwrap());
    assert_eq!(parse_fraction(" 2/5 ").unwrap(), Rational::new(2, 5).unwrap());
    assert_eq!(parse_fraction("-1/3").unwrap(), Rational::new(-1, 3).unwrap());
    assert_eq!(parse_fraction("+1/3").unwrap(), Rational::new(1, 3).unwrap());
    assert_eq!(parse_fraction("7").unwrap(), Rational::from_integer(7));
    assert_eq!(parse_fraction("-4/6").unwrap(), Rational::new(-2, 3).unwrap());
    // ratio against a negative denominator still normalizes
    assert_eq!(parse_fraction("1/-2").unwrap(), Rational::new(-1, 2).unwrap());
}

#[test]
fn test_parse_fraction_decimal_forms() {
    assert_eq!(parse_fraction("0.5").unwrap(), Rational::new(1, 2).unwrap());
    assert_eq!(parse_fraction("-2.25").unwrap(), Rational::new(-9, 4).unwrap());
    assert_eq!(parse_fraction("0.10").unwrap(), Rational::new(1, 10).unwrap());
}

#[test]
fn test_parse_fraction_rejections() {
    assert_eq!(parse_fraction(""), Err(ParseFractionError::Empty));
    assert_eq!(parse_fraction("   "), Err(ParseFractionError::Empty));
    assert_eq!(parse_fraction("1/0"), Err(ParseFractionError::ZeroDenominator));
    assert_eq!(parse_fraction("-3/0"), Err(ParseFractionError::ZeroDenominator));
    assert_eq!(
        parse_fraction("abc"),
        Err(ParseFractionError::Malformed("abc".to_string()))
    );
    assert_eq!(
        parse_fraction("1/2x"),
        Err(ParseFractionError::Malformed("1/2x".to_string()))
    );
    // no whitespace inside the literal
    assert_eq!(
        parse_fraction("2 / 5"),
        Err(ParseFractionError::Malformed("2 / 5".to_string()))
    );
    assert_eq!(
        parse_fraction("1/2/3"),
        Err(ParseFractionError::Malformed("1/2/3".to_string()))
    );
    assert_eq!(
        parse_fraction("2.5/3"),
        Err(ParseFractionError::Malformed("2.5/3".to_string()))
    );
    // 19 fractional digits overflow the exact power-of-ten scale
    assert!(matches!(
        parse_fraction("0.1234567890123456789012345"),
        Err(ParseFractionError::Malformed(_))
    ));
}

#[test]
fn test_candidate_list_drops_bad_tokens_silently() {
    let candidates = parse_candidate_list("1/3, oops, 3/8,, 1/4");
    let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["1/3", "3/8", "1/4"]);

    assert!(parse_candidate_list("").is_empty());
    assert!(parse_candidate_list("xx, yy").is_empty());
}

#[test]
fn test_candidate_labels_are_reduced() {
    let candidates = parse_candidate_list("4/6, 10/4");
    assert_eq!(candidates[0].label, "2/3");
    assert_eq!(candidates[1].label, "5/2");
}

#[test]
fn test_evaluate_picks_minimum_distance() {
    let target = Rational::new(2, 5).unwrap();
    let candidates = parse_candidate_list("1/3, 3/8, 1/4");
    let evaluation = evaluate(&target, &candidates);

    assert_eq!(evaluation.closest_index, 1);
    assert_eq!(evaluation.distances.len(), 3);
    for d in &evaluation.distances {
        assert!(*d >= evaluation.closest_distance());
    }
    assert!((evaluation.closest_distance() - 0.025).abs() < 1e-12);
}

#[test]
fn test_evaluate_tie_break_keeps_first_index() {
    let target = Rational::from_integer(0);
    let candidates = parse_candidate_list("1/2, 1/2");
    assert_eq!(evaluate(&target, &candidates).closest_index, 0);

    // 0 and 1 are both exactly 0.5 away from 1/2
    let target = Rational::new(1, 2).unwrap();
    let candidates = parse_candidate_list("0, 1");
    assert_eq!(evaluate(&target, &candidates).closest_index, 0);
}

#[test]
fn test_evaluate_single_candidate() {
    let target = Rational::from_integer(0);
    let candidates = parse_candidate_list("0");
    let evaluation = evaluate(&target, &candidates);
    assert_eq!(evaluation.closest_index, 0);
    assert_eq!(evaluation.distances, vec![0.0]);
}

#[test]
fn test_bounds_invariants() {
    let values = [0.25, 0.333, 0.375, 0.4];
    let extents = compute_view_extents(&values, DEFAULT_PADDING, DEFAULT_MIN_WIDTH);

    for v in values {
        assert!(extents.auto.contains(v));
        assert!(extents.fixed.contains(v));
    }
    assert!(extents.fixed.span() >= DEFAULT_MIN_WIDTH);
    assert!(extents.auto.span() >= 2.0 * DEFAULT_PADDING);
    assert!(extents.fixed.min <= extents.auto.min);
    assert!(extents.fixed.max >= extents.auto.max);
}

#[test]
fn test_compare_error_paths() {
    assert!(matches!(
        compare("abc", "1/2"),
        Err(crate::EvaluationError::TargetParse(_))
    ));
    assert_eq!(
        compare("1/2", "xx, yy"),
        Err(crate::EvaluationError::NoValidCandidates)
    );
}
