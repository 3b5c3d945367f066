//! Actions that drive the calculator.
//!
//! An [`Action`] carries only the minimal payload for a user intent: a
//! digit or an operation symbol. Parsing from text lives here so that key
//! bindings and configuration files share one vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from turning text into actions
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(String),

    #[error("'{0}' is not an operation (expected one of + - * ÷ /)")]
    InvalidOperation(String),

    #[error("Unknown action '{0}'")]
    UnknownAction(String),
}

/// A single key of the digit pad: `0`..`9` or the decimal point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Point,
}

impl Digit {
    pub const ALL: [Digit; 11] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
        Digit::Point,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Point => '.',
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = ActionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::ALL
            .into_iter()
            .find(|d| d.as_char() == c)
            .ok_or_else(|| ActionError::InvalidDigit(c.to_string()))
    }
}

impl FromStr for Digit {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::try_from(c),
            _ => Err(ActionError::InvalidDigit(s.to_string())),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Binary arithmetic operation pending between two operands.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// Symbol shown on the display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Combine two numbers. Division by zero follows IEEE-754.
    ///
    /// ```rust
    /// use tally::core::Operation;
    ///
    /// assert_eq!(Operation::Subtract.apply(5.0, 3.0), 2.0);
    /// assert!(Operation::Divide.apply(1.0, 0.0).is_infinite());
    /// ```
    pub fn apply(&self, previous: f64, current: f64) -> f64 {
        match self {
            Self::Add => previous + current,
            Self::Subtract => previous - current,
            Self::Multiply => previous * current,
            Self::Divide => previous / current,
        }
    }
}

impl FromStr for Operation {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(ActionError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One discrete user intent.
///
/// # Parsing
///
/// Text forms accepted by [`FromStr`]:
///
/// - a digit or `.`, or `digit:<d>`
/// - an operation symbol (`+ - * ÷ /`), or `op:<symbol>`
/// - `clear`, `delete`, `evaluate` (case-insensitive)
///
/// ```rust
/// use tally::core::{Action, Digit, Operation};
///
/// assert_eq!("7".parse::<Action>().unwrap(), Action::AddDigit(Digit::Seven));
/// assert_eq!("/".parse::<Action>().unwrap(), Action::ChooseOperation(Operation::Divide));
/// assert_eq!("Evaluate".parse::<Action>().unwrap(), Action::Evaluate);
/// assert!("sqrt".parse::<Action>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(digit) = s.strip_prefix("digit:") {
            return digit.parse().map(Action::AddDigit);
        }
        if let Some(op) = s.strip_prefix("op:") {
            return op.parse().map(Action::ChooseOperation);
        }
        if let Ok(digit) = s.parse::<Digit>() {
            return Ok(Action::AddDigit(digit));
        }
        if let Ok(op) = s.parse::<Operation>() {
            return Ok(Action::ChooseOperation(op));
        }

        match s.to_ascii_lowercase().as_str() {
            "clear" => Ok(Action::Clear),
            "delete" => Ok(Action::DeleteDigit),
            "evaluate" => Ok(Action::Evaluate),
            _ => Err(ActionError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit(d) => write!(f, "digit:{d}"),
            Self::ChooseOperation(op) => write!(f, "op:{op}"),
            Self::Clear => f.write_str("clear"),
            Self::DeleteDigit => f.write_str("delete"),
            Self::Evaluate => f.write_str("evaluate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_from_char_accepts_pad_keys() {
        assert_eq!(Digit::try_from('0').unwrap(), Digit::Zero);
        assert_eq!(Digit::try_from('9').unwrap(), Digit::Nine);
        assert_eq!(Digit::try_from('.').unwrap(), Digit::Point);
    }

    #[test]
    fn digit_rejects_other_characters() {
        assert_eq!(
            Digit::try_from('a'),
            Err(ActionError::InvalidDigit("a".to_string()))
        );
        assert!("12".parse::<Digit>().is_err());
        assert!("".parse::<Digit>().is_err());
    }

    #[test]
    fn operation_accepts_slash_for_divide() {
        assert_eq!("/".parse::<Operation>().unwrap(), Operation::Divide);
        assert_eq!("÷".parse::<Operation>().unwrap(), Operation::Divide);
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn operation_rejects_unknown_symbol() {
        assert_eq!(
            "%".parse::<Operation>(),
            Err(ActionError::InvalidOperation("%".to_string()))
        );
    }

    #[test]
    fn action_parses_named_forms() {
        assert_eq!("clear".parse::<Action>().unwrap(), Action::Clear);
        assert_eq!("DELETE".parse::<Action>().unwrap(), Action::DeleteDigit);
        assert_eq!(" evaluate ".parse::<Action>().unwrap(), Action::Evaluate);
        assert_eq!(
            "digit:.".parse::<Action>().unwrap(),
            Action::AddDigit(Digit::Point)
        );
        assert_eq!(
            "op:*".parse::<Action>().unwrap(),
            Action::ChooseOperation(Operation::Multiply)
        );
    }

    #[test]
    fn action_prefix_forms_report_inner_error() {
        assert_eq!(
            "digit:x".parse::<Action>(),
            Err(ActionError::InvalidDigit("x".to_string()))
        );
        assert_eq!(
            "op:^".parse::<Action>(),
            Err(ActionError::InvalidOperation("^".to_string()))
        );
    }

    #[test]
    fn action_display_parses_back() {
        let actions = [
            Action::AddDigit(Digit::Four),
            Action::ChooseOperation(Operation::Divide),
            Action::Clear,
            Action::DeleteDigit,
            Action::Evaluate,
        ];
        for action in actions {
            assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn action_serializes_with_tag() {
        let json = serde_json::to_string(&Action::ChooseOperation(Operation::Add)).unwrap();
        assert_eq!(json, r#"{"type":"choose_operation","payload":"+"}"#);

        let json = serde_json::to_string(&Action::Clear).unwrap();
        assert_eq!(json, r#"{"type":"clear"}"#);
    }
}
