//! Tally: a pure functional calculator engine
//!
//! Tally models a basic two-operand calculator as a closed state machine
//! with a "pure core, imperative shell" split. The core is a single pure
//! function from `(state, action)` to the next state; the shell owns the
//! current value, logs, and keeps a transition log.
//!
//! # Core Concepts
//!
//! - **CalculatorState**: Immutable value holding the operands as text, the
//!   pending operation and two entry flags
//! - **Action**: Tagged union of user intents (digit, operation, clear,
//!   delete, evaluate)
//! - **Transition**: Total, pure next-state function; malformed input is a
//!   silent no-op
//! - **Evaluator**: Float arithmetic on operand text that never fails
//!
//! Presentation helpers live outside the core: [`display`] formats the two
//! screen lines, [`keymap`] maps key names to actions, and [`config`] loads
//! both from TOML.
//!
//! # Example
//!
//! ```rust
//! use tally::core::{Action, Digit, Operation};
//! use tally::display::DisplayLines;
//! use tally::machine::Calculator;
//!
//! let mut calc = Calculator::default();
//! calc.dispatch_all([
//!     Action::AddDigit(Digit::Five),
//!     Action::ChooseOperation(Operation::Add),
//!     Action::ChooseOperation(Operation::Subtract),
//!     Action::AddDigit(Digit::Three),
//!     Action::Evaluate,
//! ]);
//!
//! let lines = DisplayLines::render(calc.current_state());
//! assert_eq!(lines.current, "2");
//! assert_eq!(lines.previous, "");
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod keymap;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{transition, Action, CalculatorState, Digit, Operation, State};
pub use machine::{Calculator, StateMachine, StepResult};
