//! Calculator state and the `State` trait driven by the machine.
//!
//! States are immutable values. Every action produces a brand-new state
//! through [`State::apply`]; nothing ever mutates a state that has been
//! handed out.

use super::action::{Action, Operation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that move through a state machine.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable to detect no-op actions
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for inspection
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Input that drives this state from one value to the next.
    type Action: Clone + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync;

    /// Short phase name for display/logging.
    fn name(&self) -> &str;

    /// Produce the next state for `action`.
    ///
    /// Must be total: rejected input returns a value equal to `self`.
    fn apply(&self, action: &Self::Action) -> Self;
}

/// Running state of a two-operand, single-pending-operation calculator.
///
/// Operands are kept as text so that in-progress input such as `"3."`
/// survives until the next digit arrives.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, CalculatorState, Digit, Operation};
///
/// let state = CalculatorState::new()
///     .apply(Action::AddDigit(Digit::Five))
///     .apply(Action::ChooseOperation(Operation::Add))
///     .apply(Action::AddDigit(Digit::Three))
///     .apply(Action::Evaluate);
///
/// assert_eq!(state.current_operand.as_deref(), Some("8"));
/// assert!(state.overwrite);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand currently being typed
    pub current_operand: Option<String>,
    /// Operand captured before the pending operation was chosen
    pub previous_operand: Option<String>,
    /// Pending operation linking the two operands
    pub operation: Option<Operation>,
    /// The next digit typed is negated
    pub minus_next: bool,
    /// The next digit typed replaces the current operand
    pub overwrite: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Initial state: `current_operand = "0"`, everything else absent.
    pub fn new() -> Self {
        Self {
            current_operand: Some("0".to_string()),
            previous_operand: None,
            operation: None,
            minus_next: false,
            overwrite: false,
        }
    }

    /// Apply one action, returning the next state.
    ///
    /// See [`transition`](super::transition) for the full rule set.
    pub fn apply(&self, action: Action) -> Self {
        super::transition(self, action)
    }

    /// Phase of the calculator, derived from the flags.
    pub fn phase(&self) -> Phase {
        if self.overwrite {
            Phase::Evaluated
        } else if self.operation.is_some() {
            Phase::Pending
        } else {
            Phase::Entering
        }
    }
}

impl State for CalculatorState {
    type Action = Action;

    fn name(&self) -> &str {
        self.phase().as_str()
    }

    fn apply(&self, action: &Action) -> Self {
        super::transition(self, *action)
    }
}

/// Coarse phase of a [`CalculatorState`]. Informational only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first operand (or recovering after a clear)
    Entering,
    /// An operation is waiting for its second operand
    Pending,
    /// A result is shown and the next digit starts a fresh number
    Evaluated,
}

impl Phase {
    /// Phase name as used in logs and the transition log
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Evaluated => "Evaluated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;

    #[test]
    fn initial_state_shows_zero() {
        let state = CalculatorState::new();
        assert_eq!(state.current_operand.as_deref(), Some("0"));
        assert_eq!(state.previous_operand, None);
        assert_eq!(state.operation, None);
        assert!(!state.minus_next);
        assert!(!state.overwrite);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(CalculatorState::default(), CalculatorState::new());
    }

    #[test]
    fn phase_follows_flags() {
        let state = CalculatorState::new();
        assert_eq!(state.phase(), Phase::Entering);
        assert_eq!(state.name(), "Entering");

        let pending = CalculatorState {
            previous_operand: Some("5".to_string()),
            operation: Some(Operation::Add),
            current_operand: None,
            ..CalculatorState::new()
        };
        assert_eq!(pending.name(), "Pending");

        let evaluated = CalculatorState {
            overwrite: true,
            ..CalculatorState::new()
        };
        assert_eq!(evaluated.name(), "Evaluated");
    }

    #[test]
    fn trait_apply_matches_inherent_apply() {
        let state = CalculatorState::new();
        let action = Action::AddDigit(Digit::Seven);
        assert_eq!(State::apply(&state, &action), state.apply(action));
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalculatorState {
            current_operand: Some("3.".to_string()),
            previous_operand: Some("12".to_string()),
            operation: Some(Operation::Divide),
            minus_next: false,
            overwrite: false,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        let state1 = CalculatorState::new();
        let state2 = CalculatorState::new();
        let state3 = state1.apply(Action::AddDigit(Digit::One));

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }
}
