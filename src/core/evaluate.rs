//! Arithmetic on textual operands.
//!
//! The evaluator never fails. Operands that do not parse produce an empty
//! result, and division by zero yields the IEEE-754 infinity or NaN, which
//! is rendered as text like any other number.

use super::action::Operation;

/// Evaluate `previous <op> current` on textual operands.
///
/// Returns the canonical decimal text of the result, or an empty string
/// when either operand is not a number.
///
/// # Example
///
/// ```rust
/// use tally::core::{evaluate, Operation};
///
/// assert_eq!(evaluate("5", "3", Operation::Add), "8");
/// assert_eq!(evaluate("7", "2", Operation::Divide), "3.5");
/// assert_eq!(evaluate("1", "0", Operation::Divide), "Infinity");
/// assert_eq!(evaluate("-", "3", Operation::Add), "");
/// ```
pub fn evaluate(previous: &str, current: &str, op: Operation) -> String {
    match (parse_operand(previous), parse_operand(current)) {
        (Some(prev), Some(cur)) => canonical_text(op.apply(prev, cur)),
        _ => String::new(),
    }
}

/// Parse operand text as a float.
///
/// Accepts a leading sign and a single decimal point, including the
/// in-progress forms `"3."` and `".5"`. `Infinity` and `-Infinity` parse
/// back to the same value; `NaN` is not a number and yields `None`.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Shortest decimal text that reads back as `value`.
///
/// Integral values carry no fractional part, negative zero is `"0"`, and
/// non-finite values are `Infinity`, `-Infinity` and `NaN`.
pub fn canonical_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
