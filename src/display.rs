//! Display formatting for the presentation side.
//!
//! The engine keeps operands as raw text. This module turns a state into
//! the two lines a calculator screen shows: the previous operand with its
//! pending operation, and the operand being typed.

use crate::core::CalculatorState;
use serde::Serialize;

/// Formatting options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Group the integer part in thousands with `,`
    pub grouping: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { grouping: true }
    }
}

/// The two rendered lines of the calculator screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayLines {
    /// Previous operand followed by the pending operation symbol
    pub previous: String,
    /// Operand being typed, prefixed with `-` while a minus is pending
    pub current: String,
}

impl DisplayLines {
    /// Render `state` with default options.
    ///
    /// ```rust
    /// use tally::core::{Action, CalculatorState, Digit, Operation};
    /// use tally::display::DisplayLines;
    ///
    /// let state = [
    ///     Action::AddDigit(Digit::One),
    ///     Action::AddDigit(Digit::Two),
    ///     Action::AddDigit(Digit::Three),
    ///     Action::AddDigit(Digit::Four),
    ///     Action::ChooseOperation(Operation::Add),
    ///     Action::ChooseOperation(Operation::Subtract),
    /// ]
    /// .into_iter()
    /// .fold(CalculatorState::new(), |s, a| s.apply(a));
    ///
    /// let lines = DisplayLines::render(&state);
    /// assert_eq!(lines.previous, "1,234 +");
    /// assert_eq!(lines.current, "-");
    /// ```
    pub fn render(state: &CalculatorState) -> Self {
        Self::render_with(state, DisplayOptions::default())
    }

    pub fn render_with(state: &CalculatorState, options: DisplayOptions) -> Self {
        let previous = format_operand(state.previous_operand.as_deref(), options);
        let previous = match state.operation {
            Some(op) if previous.is_empty() => op.symbol().to_string(),
            Some(op) => format!("{previous} {}", op.symbol()),
            None => previous,
        };

        let sign = if state.minus_next { "-" } else { "" };
        let current = format!(
            "{sign}{}",
            format_operand(state.current_operand.as_deref(), options)
        );

        Self { previous, current }
    }
}

/// Format one operand for display.
///
/// The integer part is grouped in thousands; the fractional part after the
/// first `.` is appended verbatim. An absent operand formats to nothing.
/// Integer parts that are not plain digits (`"-"`, `"Infinity"`) are
/// shown as they are.
///
/// ```rust
/// use tally::display::{format_operand, DisplayOptions};
///
/// let opts = DisplayOptions::default();
/// assert_eq!(format_operand(Some("1234567.1200"), opts), "1,234,567.1200");
/// assert_eq!(format_operand(Some(".5"), opts), "0.5");
/// assert_eq!(format_operand(None, opts), "");
/// ```
pub fn format_operand(operand: Option<&str>, options: DisplayOptions) -> String {
    let Some(operand) = operand else {
        return String::new();
    };

    match operand.split_once('.') {
        Some((integer, fraction)) => {
            format!("{}.{fraction}", format_integer(integer, options))
        }
        None => format_integer(operand, options),
    }
}

fn format_integer(integer: &str, options: DisplayOptions) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if digits.is_empty() && sign.is_empty() {
        return "0".to_string();
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let trimmed = digits.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    if !options.grouping {
        return format!("{sign}{digits}");
    }

    format!("{sign}{}", group_thousands(digits))
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
