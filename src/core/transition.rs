//! The calculator transition function.
//!
//! One pure function matching exhaustively over [`Action`]. Rejected input
//! (a second decimal point, a redundant leading zero, operating without
//! operands, deleting from nothing) returns a clone of the input state.

use super::action::{Action, Digit, Operation};
use super::evaluate::evaluate;
use super::state::CalculatorState;

/// Produce the state that follows `state` after `action`.
///
/// Total and pure: the input is never modified and every action kind has
/// an explicit rule.
///
/// # Example
///
/// ```rust
/// use tally::core::{transition, Action, CalculatorState, Digit, Operation};
///
/// // (5 + 3) * 2, folded left to right
/// let actions = [
///     Action::AddDigit(Digit::Five),
///     Action::ChooseOperation(Operation::Add),
///     Action::AddDigit(Digit::Three),
///     Action::ChooseOperation(Operation::Multiply),
///     Action::AddDigit(Digit::Two),
///     Action::Evaluate,
/// ];
///
/// let state = actions
///     .into_iter()
///     .fold(CalculatorState::new(), |state, action| transition(&state, action));
///
/// assert_eq!(state.current_operand.as_deref(), Some("16"));
/// ```
pub fn transition(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Clear => clear(state),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    let d = digit.as_char();

    if state.overwrite {
        return CalculatorState {
            current_operand: Some(d.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    if state.minus_next {
        return CalculatorState {
            current_operand: Some(format!("-{d}")),
            minus_next: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");

    if digit == Digit::Zero && current == "0" {
        return state.clone();
    }

    if digit == Digit::Point && current.contains('.') {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(format!("{current}{d}")),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => state.clone(),

        // Unary minus: the next digit starts a negative operand
        (None, Some(_)) if op == Operation::Subtract => CalculatorState {
            minus_next: true,
            ..state.clone()
        },

        (None, Some(_)) => CalculatorState {
            operation: Some(op),
            minus_next: false,
            ..state.clone()
        },

        (Some(current), None) => CalculatorState {
            previous_operand: Some(current.clone()),
            operation: Some(op),
            current_operand: None,
            ..state.clone()
        },

        (Some(current), Some(previous)) => {
            let folded = match state.operation {
                Some(pending) => evaluate(previous, current, pending),
                None => String::new(),
            };
            CalculatorState {
                previous_operand: Some(folded),
                operation: Some(op),
                current_operand: None,
                ..state.clone()
            }
        }
    }
}

// `overwrite` is carried through unchanged.
fn clear(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        current_operand: Some("0".to_string()),
        previous_operand: None,
        operation: None,
        minus_next: false,
        overwrite: state.overwrite,
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some("0".to_string()),
            overwrite: false,
            minus_next: false,
            ..state.clone()
        };
    }

    let Some(current) = state.current_operand.as_deref() else {
        return state.clone();
    };

    if current == "0" {
        return state.clone();
    }

    let mut chars = current.chars();
    chars.next_back();
    let rest = chars.as_str();

    if rest.is_empty() {
        return CalculatorState {
            current_operand: None,
            minus_next: false,
            ..state.clone()
        };
    }

    CalculatorState {
        current_operand: Some(rest.to_string()),
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    let (Some(op), Some(current), Some(previous)) = (
        state.operation,
        state.current_operand.as_deref(),
        state.previous_operand.as_deref(),
    ) else {
        return state.clone();
    };

    CalculatorState {
        current_operand: Some(evaluate(previous, current, op)),
        previous_operand: None,
        operation: None,
        overwrite: true,
        ..state.clone()
    }
}
