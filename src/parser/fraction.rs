use thiserror::Error;
use winnow::ascii::{dec_int, digit1};
use winnow::combinator::{alt, opt, preceded};
use winnow::error::{ContextError, ErrMode, ParserError};
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

use crate::types::Rational;

/// Why a fraction literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFractionError {
    /// The input was empty after trimming.
    #[error("empty input")]
    Empty,
    /// An explicit denominator of zero.
    #[error("denominator must not be zero")]
    ZeroDenominator,
    /// Anything else: bad syntax, trailing characters, out-of-range digits.
    #[error("not a fraction: '{0}'")]
    Malformed(String),
}

/// `numerator "/" denominator`, or a bare integer (denominator 1).
/// The denominator may still be zero here; `parse_fraction` rejects it
/// with a dedicated error.
fn ratio_components(input: &mut &str) -> ModalResult<(i64, i64)> {
    (dec_int, opt(preceded(literal("/"), dec_int)))
        .map(|(n, d): (i64, Option<i64>)| (n, d.unwrap_or(1)))
        .parse_next(input)
}

/// Decimal literal such as `0.5` or `-2.25`, converted to an exact
/// power-of-ten ratio. Backtracks when the digits do not fit in `i64`.
fn decimal_components(input: &mut &str) -> ModalResult<(i64, i64)> {
    let original_input_state = *input;

    let (sign, int_digits, _, frac_digits): (Option<char>, &str, &str, &str) =
        (opt(one_of(['+', '-'])), digit1, literal("."), digit1).parse_next(input)?;

    match exact_decimal(sign == Some('-'), int_digits, frac_digits) {
        Some(pair) => Ok(pair),
        None => {
            *input = original_input_state;
            Err(ErrMode::Backtrack(ContextError::from_input(
                &original_input_state,
            )))
        }
    }
}

fn exact_decimal(negative: bool, int_digits: &str, frac_digits: &str) -> Option<(i64, i64)> {
    let int_part: i128 = int_digits.parse().ok()?;
    let frac_part: i128 = frac_digits.parse().ok()?;
    let scale = 10_i128.checked_pow(u32::try_from(frac_digits.len()).ok()?)?;

    let mut numerator = int_part.checked_mul(scale)?.checked_add(frac_part)?;
    if negative {
        numerator = -numerator;
    }

    Some((i64::try_from(numerator).ok()?, i64::try_from(scale).ok()?))
}

/// Parse one fraction literal into an exact rational value.
///
/// Surrounding whitespace is trimmed before interpretation. Accepted forms:
/// an optionally signed integer (`7`, `-3`), an integer ratio (`2/5`,
/// `-4/6`), or a decimal (`0.5`). The result is always reduced: `4/6`
/// parses to the same value as `2/3` and displays as `2/3`.
///
/// Pure function; no side effects.
///
/// # Examples
/// ```
/// use fraction_distance::parse_fraction;
///
/// let value = parse_fraction(" 4/6 ").unwrap();
/// assert_eq!(value.to_string(), "2/3");
/// ```
pub fn parse_fraction(s: &str) -> Result<Rational, ParseFractionError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseFractionError::Empty);
    }

    // decimal first: ratio_components would stop at the '.' and leave
    // trailing input, failing the trailing-characters check below
    let mut input = trimmed;
    let (numerator, denominator) = alt((decimal_components, ratio_components))
        .parse_next(&mut input)
        .map_err(|_| ParseFractionError::Malformed(trimmed.to_string()))?;

    if !input.is_empty() {
        return Err(ParseFractionError::Malformed(trimmed.to_string()));
    }

    if denominator == 0 {
        return Err(ParseFractionError::ZeroDenominator);
    }
    Rational::new(numerator, denominator)
        .ok_or_else(|| ParseFractionError::Malformed(trimmed.to_string()))
}
