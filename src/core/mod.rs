//! Core account types and logic.
//!
//! This module contains the pure functional core:
//! - The account state value and the `State` trait
//! - Typed and raw actions
//! - Guard predicates and the transition function
//! - Immutable dispatch history
//!
//! Nothing in this module performs I/O.

mod action;
mod guard;
mod history;
mod reducer;
mod state;

pub use action::{Action, ActionError, RawAction};
pub use action::{CLOSE_ACCOUNT, DEPOSIT, OPEN_ACCOUNT, PAY_LOAN, REQUEST_LOAN, WITHDRAW};
pub use guard::Rejection;
pub use history::{Recordable, StateHistory, StateTransition};
pub use reducer::{evaluate, transition, transition_raw, AccountReducer, Outcome, Reducer};
pub use state::{AccountState, State};
