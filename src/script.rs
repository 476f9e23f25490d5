//! Action scripts: batches of untyped actions decoded in one pass.
//!
//! A script is a JSON array in the reference UI's wire shape:
//!
//! ```json
//! [{"type": "OPEN_ACCOUNT", "payload": 500}, {"type": "PAY_LOAN"}]
//! ```
//!
//! Decoding uses stillwater's `Validation` so that every bad entry is
//! reported at once, not just the first.
//!
//! # Example
//!
//! ```rust
//! use bank_reducer::script::ActionScript;
//!
//! let script = ActionScript::from_json(r#"[{"type":"HEIST"},{"type":"DEPOSIT"}]"#).unwrap();
//! let violations = script.violations();
//! assert_eq!(violations.len(), 2);
//! ```

use crate::core::{Action, ActionError, RawAction};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single invalid script entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptViolation {
    /// Zero-based position in the script
    pub index: usize,
    pub error: ActionError,
}

impl fmt::Display for ScriptViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {}: {}", self.index, self.error)
    }
}

/// Errors that can occur when loading or decoding a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to parse action script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Action script has {} invalid entries", .0.len())]
    Invalid(Vec<ScriptViolation>),
}

/// An ordered list of untyped actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionScript {
    entries: Vec<RawAction>,
}

impl ActionScript {
    pub fn new(entries: Vec<RawAction>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn entries(&self) -> &[RawAction] {
        &self.entries
    }

    /// Decode every entry, accumulating ALL violations.
    pub fn validate(&self) -> Validation<Vec<Action>, NonEmptyVec<ScriptViolation>> {
        let checks: Vec<Validation<Action, NonEmptyVec<ScriptViolation>>> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, raw)| match raw.parse() {
                Ok(action) => Validation::success(action),
                Err(error) => Validation::fail(ScriptViolation { index, error }),
            })
            .collect();

        Validation::all_vec(checks)
    }

    /// All violations in script order; empty when the script is valid.
    pub fn violations(&self) -> Vec<ScriptViolation> {
        match self.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    /// The decoded actions, or every violation if any entry is invalid.
    pub fn actions(&self) -> Result<Vec<Action>, ScriptError> {
        match self.validate() {
            Validation::Success(actions) => Ok(actions),
            Validation::Failure(errors) => {
                Err(ScriptError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

impl From<Vec<Action>> for ActionScript {
    fn from(actions: Vec<Action>) -> Self {
        Self::new(actions.into_iter().map(RawAction::from).collect())
    }
}
