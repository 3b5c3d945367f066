//! Transition log.
//!
//! An immutable record of the state changes a machine went through, kept
//! for diagnostics. Recording returns a new log; existing logs are never
//! modified.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, CalculatorState, Digit, StateTransition};
/// use chrono::Utc;
///
/// let from = CalculatorState::new();
/// let action = Action::AddDigit(Digit::Four);
/// let to = from.apply(action);
///
/// let transition = StateTransition {
///     from,
///     to,
///     action,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.current_operand.as_deref(), Some("04"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state before the action
    pub from: S,
    /// The state after the action
    pub to: S,
    /// The action that caused the change
    pub action: S::Action,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of state transitions.
///
/// The `record` method returns a new log with the transition appended.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, CalculatorState, Digit, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let start = CalculatorState::new();
/// let action = Action::AddDigit(Digit::Nine);
/// let next = start.apply(action);
///
/// let history = StateHistory::new().record(StateTransition {
///     from: start.clone(),
///     to: next.clone(),
///     action,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&start, &next]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// The receiver is left unchanged.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Actions that changed the state, in order.
    pub fn actions(&self) -> Vec<&S::Action> {
        self.transitions.iter().map(|t| &t.action).collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Recorded transitions, oldest first
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of recorded transitions
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transition has been recorded
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
