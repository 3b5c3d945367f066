//! Explicit key-to-action mapping.
//!
//! The presentation side translates key names (as reported by a keyboard
//! or typed into a terminal) into [`Action`]s through a [`Keymap`]. The
//! core never sees key names.
//!
//! Custom binding tables are validated with Stillwater's `Validation`, so
//! every bad entry is reported in one pass instead of one at a time.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use stillwater::validation::Validation;
//! use tally::core::{Action, Operation};
//! use tally::keymap::Keymap;
//!
//! let mut bindings = BTreeMap::new();
//! bindings.insert("x".to_string(), "*".to_string());
//! bindings.insert("=".to_string(), "evaluate".to_string());
//!
//! let keymap = match Keymap::default().with_bindings(&bindings) {
//!     Validation::Success(keymap) => keymap,
//!     Validation::Failure(errors) => panic!("{} bad bindings", errors.len()),
//! };
//!
//! assert_eq!(keymap.resolve("x"), Some(Action::ChooseOperation(Operation::Multiply)));
//! assert_eq!(keymap.resolve("Enter"), Some(Action::Evaluate));
//! ```

mod error;

pub use error::BindingError;

use crate::core::{Action, Digit, Operation};
use std::collections::{BTreeMap, HashMap};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Mapping from key name to action.
#[derive(Clone, Debug, PartialEq)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
}

impl Default for Keymap {
    /// Bindings of a standard keyboard: digit keys, `.`, `+ - * /`,
    /// `Enter` to evaluate, `Backspace` to delete, `Delete` to clear.
    fn default() -> Self {
        let mut bindings: HashMap<String, Action> = Digit::ALL
            .into_iter()
            .map(|d| (d.to_string(), Action::AddDigit(d)))
            .collect();

        for (key, op) in [
            ("+", Operation::Add),
            ("-", Operation::Subtract),
            ("*", Operation::Multiply),
            ("/", Operation::Divide),
        ] {
            bindings.insert(key.to_string(), Action::ChooseOperation(op));
        }

        bindings.insert("Enter".to_string(), Action::Evaluate);
        bindings.insert("Backspace".to_string(), Action::DeleteDigit);
        bindings.insert("Delete".to_string(), Action::Clear);

        Self { bindings }
    }
}

impl Keymap {
    /// A keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Action bound to `key`, if any. Key names are matched exactly.
    pub fn resolve(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, replacing any earlier binding.
    pub fn bind(mut self, key: impl Into<String>, action: Action) -> Self {
        self.bindings.insert(key.into(), action);
        self
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no key is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Layer textual bindings (key name -> action text) over this keymap.
    ///
    /// Every binding is checked; on failure all errors are returned.
    pub fn with_bindings(
        self,
        bindings: &BTreeMap<String, String>,
    ) -> Validation<Keymap, NonEmptyVec<BindingError>> {
        let checks: Vec<Validation<(String, Action), NonEmptyVec<BindingError>>> = bindings
            .iter()
            .map(|(key, action)| parse_binding(key, action))
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(parsed) => Validation::success(
                parsed
                    .into_iter()
                    .fold(self, |keymap, (key, action)| keymap.bind(key, action)),
            ),
            Validation::Failure(errors) => Validation::Failure(errors),
        }
    }
}

fn parse_binding(
    key: &str,
    action: &str,
) -> Validation<(String, Action), NonEmptyVec<BindingError>> {
    let key = key.trim();
    if key.is_empty() {
        return Validation::fail(BindingError::EmptyKey {
            action: action.to_string(),
        });
    }

    match action.parse::<Action>() {
        Ok(parsed) => Validation::success((key.to_string(), parsed)),
        Err(source) => Validation::fail(BindingError::InvalidAction {
            key: key.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionError;

    fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn default_keymap_covers_keyboard() {
        let keymap = Keymap::default();

        assert_eq!(keymap.resolve("7"), Some(Action::AddDigit(Digit::Seven)));
        assert_eq!(keymap.resolve("."), Some(Action::AddDigit(Digit::Point)));
        assert_eq!(
            keymap.resolve("/"),
            Some(Action::ChooseOperation(Operation::Divide))
        );
        assert_eq!(keymap.resolve("Enter"), Some(Action::Evaluate));
        assert_eq!(keymap.resolve("Backspace"), Some(Action::DeleteDigit));
        assert_eq!(keymap.resolve("Delete"), Some(Action::Clear));
        assert_eq!(keymap.len(), 18);
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        assert_eq!(Keymap::default().resolve("F1"), None);
        assert_eq!(Keymap::default().resolve("enter"), None);
        assert!(Keymap::empty().is_empty());
    }

    #[test]
    fn bindings_override_defaults() {
        let result = Keymap::default().with_bindings(&table(&[
            ("Delete", "delete"),
            ("Escape", "clear"),
        ]));

        assert!(result.is_success());
        if let Validation::Success(keymap) = result {
            assert_eq!(keymap.resolve("Delete"), Some(Action::DeleteDigit));
            assert_eq!(keymap.resolve("Escape"), Some(Action::Clear));
        }
    }

    #[test]
    fn binding_validation_accumulates_all_errors() {
        let result = Keymap::default().with_bindings(&table(&[
            ("  ", "clear"),
            ("m", "memory"),
            ("p", "op:%"),
            ("ok", "evaluate"),
        ]));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let has_empty = errors
                    .iter()
                    .any(|e| matches!(e, BindingError::EmptyKey { .. }));
                let has_unknown = errors.iter().any(|e| {
                    e == &BindingError::InvalidAction {
                        key: "m".to_string(),
                        source: ActionError::UnknownAction("memory".to_string()),
                    }
                });
                let has_bad_op = errors.iter().any(|e| {
                    e == &BindingError::InvalidAction {
                        key: "p".to_string(),
                        source: ActionError::InvalidOperation("%".to_string()),
                    }
                });

                assert!(has_empty);
                assert!(has_unknown);
                assert!(has_bad_op);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_table_keeps_keymap() {
        let result = Keymap::default().with_bindings(&BTreeMap::new());
        match result {
            Validation::Success(keymap) => assert_eq!(keymap, Keymap::default()),
            Validation::Failure(_) => panic!("Expected success"),
        }
    }
}
