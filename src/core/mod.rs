//! Pure calculator core.
//!
//! This module contains everything needed to compute the next calculator
//! state:
//! - The `CalculatorState` value and the `State` trait
//! - The `Action` vocabulary (digits, operations, clear, delete, evaluate)
//! - The `transition` function and the `evaluate` helper
//! - Immutable transition logs
//!
//! Nothing in this module performs I/O or logging.

mod action;
mod evaluate;
mod history;
mod state;
mod transition;

pub use action::{Action, ActionError, Digit, Operation};
pub use evaluate::{canonical_text, evaluate, parse_operand};
pub use history::{StateHistory, StateTransition};
pub use state::{CalculatorState, Phase, State};
pub use transition::transition;
