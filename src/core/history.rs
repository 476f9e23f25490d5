//! Dispatch history tracking.
//!
//! Provides immutable tracking of every action dispatched to a store and
//! the states it moved between.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;

/// Values that can be stored in a [`StateHistory`] alongside states.
pub trait Recordable: Clone + Debug + Serialize + DeserializeOwned + Send + Sync {}

impl<T> Recordable for T where T: Clone + Debug + Serialize + DeserializeOwned + Send + Sync {}

/// Record of a single dispatch.
///
/// A rejected action is still recorded; its `from` and `to` are equal.
///
/// # Example
///
/// ```rust
/// use bank_reducer::core::{AccountState, Action, StateTransition};
/// use chrono::Utc;
///
/// let record = StateTransition {
///     from: AccountState::initial(),
///     action: Action::OpenAccount { amount: 500 },
///     to: AccountState { balance: 500, loan: 0, is_active: true },
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, A: Recordable> {
    /// The state before the action
    pub from: S,
    /// The action that was dispatched
    pub action: A,
    /// The state after the action
    pub to: S,
    /// When the dispatch happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State, A: Recordable> StateTransition<S, A> {
    /// Whether the action changed the state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of dispatches.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, A: Recordable> {
    transitions: Vec<StateTransition<S, A>>,
}

impl<S: State, A: Recordable> Default for StateHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Recordable> StateHistory<S, A> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, A>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    ///
    /// Owners that keep a single live history use this instead of
    /// [`record`](Self::record), which copies.
    pub fn push(&mut self, transition: StateTransition<S, A>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first `from` state, then
    /// the `to` state of each transition. Rejected dispatches repeat the
    /// previous state.
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

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S, A>] {
        &self.transitions
    }

    /// Dispatches that left the state unchanged.
    pub fn rejected(&self) -> impl Iterator<Item = &StateTransition<S, A>> {
        self.transitions.iter().filter(|t| !t.changed())
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
