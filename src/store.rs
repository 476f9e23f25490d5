//! Store that owns the live state and drives a reducer.
//!
//! The reducer is pure; the store is the imperative shell around it. It holds
//! the single current state, replaces it with each reducer result and keeps
//! a history of every dispatch.

use crate::core::{
    evaluate, AccountReducer, AccountState, Action, ActionError, Outcome, RawAction, Reducer,
    Rejection, State, StateHistory, StateTransition,
};
use crate::script::{ActionScript, ScriptError};
use chrono::Utc;
use std::fmt::Debug;

/// Holder of the current state for a [`Reducer`].
pub struct Store<R: Reducer> {
    initial: R::State,
    current: R::State,
    history: StateHistory<R::State, R::Action>,
}

/// Store for a single bank account.
pub type AccountStore = Store<AccountReducer>;

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            current: initial.clone(),
            initial,
            history: StateHistory::new(),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &R::State {
        &self.current
    }

    /// Get dispatch history (pure)
    pub fn history(&self) -> &StateHistory<R::State, R::Action> {
        &self.history
    }

    /// Apply one action and replace the held state with the result.
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        let from = self.current.clone();
        let to = R::reduce(from.clone(), action.clone());
        trace_dispatch(&from, &to, &action, None);
        self.commit(from, action, to)
    }

    /// Return to the initial state and clear the history.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.history = StateHistory::new();
    }

    fn commit(&mut self, from: R::State, action: R::Action, to: R::State) -> &R::State {
        self.history.push(StateTransition {
            from,
            action,
            to: to.clone(),
            timestamp: Utc::now(),
        });
        self.current = to;
        &self.current
    }
}

impl<R: Reducer> Default for Store<R>
where
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl Store<AccountReducer> {
    /// Apply one action, reporting whether it was rejected and why.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let from = self.current;
        let outcome = evaluate(from, &action);
        let to = outcome.into_state();
        trace_dispatch(&from, &to, &action, outcome.rejection());

        self.commit(from, action, to);
        outcome
    }

    /// Decode and dispatch an untyped action.
    ///
    /// Unrecognized tags leave the state and history untouched.
    pub fn dispatch_raw(&mut self, raw: &RawAction) -> Result<&AccountState, ActionError> {
        let action = raw.parse().inspect_err(|err| {
            tracing::warn!(kind = %raw.kind, error = %err, "refusing invalid action");
        })?;
        self.apply(action);
        Ok(&self.current)
    }

    /// Validate a whole script, then apply it.
    ///
    /// Nothing is applied unless every entry is valid. Returns the state
    /// after each action.
    pub fn run_script(&mut self, script: &ActionScript) -> Result<Vec<AccountState>, ScriptError> {
        let actions = script.actions()?;
        tracing::debug!(count = actions.len(), "running action script");

        let states = actions
            .into_iter()
            .map(|action| self.apply(action).into_state())
            .collect();
        Ok(states)
    }
}

fn trace_dispatch<S: State, A: Debug>(from: &S, to: &S, action: &A, reason: Option<Rejection>) {
    if from == to {
        tracing::info!(
            state = from.name(),
            ?action,
            reason = reason.map(tracing::field::display),
            "action left state unchanged"
        );
    } else {
        tracing::debug!(from = from.name(), to = to.name(), ?action, "state changed");
    }
}
