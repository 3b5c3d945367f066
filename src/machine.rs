//! Imperative shell around the pure core.
//!
//! The machine owns the current state value, replaces it with whatever the
//! pure transition returns, logs each step and, unless built with
//! [`StateMachine::without_history`], keeps an immutable transition log.
//! It never alters transition semantics.

use crate::core::{CalculatorState, State, StateHistory, StateTransition};
use chrono::Utc;
use tracing::{debug, trace};

/// Result of dispatching a single action
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// The action produced a different state
    Transitioned(S),

    /// The action was rejected and the state is unchanged
    Ignored,
}

impl<S: State> StepResult<S> {
    /// Whether the action changed the state
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned(_))
    }
}

/// State machine driving a [`State`] with its actions.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, Digit, Operation};
/// use tally::machine::{Calculator, StepResult};
///
/// let mut calc = Calculator::default();
/// calc.dispatch(Action::AddDigit(Digit::Six));
/// calc.dispatch(Action::ChooseOperation(Operation::Divide));
/// calc.dispatch(Action::AddDigit(Digit::Four));
/// calc.dispatch(Action::Evaluate);
///
/// assert_eq!(calc.current_state().current_operand.as_deref(), Some("1.5"));
/// assert_eq!(calc.dispatch(Action::Evaluate), StepResult::Ignored);
/// assert_eq!(calc.history().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State> {
    current: S,
    history: StateHistory<S>,
    record_history: bool,
}

/// Machine over the calculator state.
pub type Calculator = StateMachine<CalculatorState>;

impl Default for StateMachine<CalculatorState> {
    fn default() -> Self {
        Self::new(CalculatorState::new())
    }
}

impl<S: State> StateMachine<S> {
    /// Create a machine in the given initial state that records every
    /// transition
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            history: StateHistory::new(),
            record_history: true,
        }
    }

    /// Create a machine that keeps no transition log.
    ///
    /// Dispatch behaves exactly as with [`StateMachine::new`], but
    /// [`StateMachine::history`] stays empty.
    pub fn without_history(initial: S) -> Self {
        Self {
            record_history: false,
            ..Self::new(initial)
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get transition log (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Apply one action.
    ///
    /// State-changing actions are recorded in the log when recording is
    /// enabled; rejected ones never are.
    pub fn dispatch(&mut self, action: S::Action) -> StepResult<S> {
        let next = self.current.apply(&action);

        if next == self.current {
            trace!(state = self.current.name(), ?action, "action ignored");
            return StepResult::Ignored;
        }

        debug!(
            from = self.current.name(),
            to = next.name(),
            ?action,
            "transition"
        );

        let from = std::mem::replace(&mut self.current, next.clone());
        if self.record_history {
            self.history = self.history.record(StateTransition {
                from,
                to: next.clone(),
                action,
                timestamp: Utc::now(),
            });
        }

        StepResult::Transitioned(next)
    }

    /// Apply a sequence of actions, returning the final state.
    pub fn dispatch_all<I>(&mut self, actions: I) -> &S
    where
        I: IntoIterator<Item = S::Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.current
    }
}
