//! The account state machine.
//!
//! [`transition`] is the whole of the business rules: a pure, total function
//! from the current state and an action to the next state. Rejected actions
//! return the prior state unchanged; [`evaluate`] additionally reports why.

use super::action::{Action, ActionError, RawAction};
use super::guard::{require_active, require_loan_available, require_settled, Rejection};
use super::history::Recordable;
use super::state::{AccountState, State};

/// A pure `(State, Action) -> State` function.
///
/// Implementations must be deterministic and free of side effects.
pub trait Reducer {
    type State: State;
    type Action: Recordable;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// [`Reducer`] for a single bank account.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccountReducer;

impl Reducer for AccountReducer {
    type State = AccountState;
    type Action = Action;

    fn reduce(state: AccountState, action: Action) -> AccountState {
        transition(state, action)
    }
}

/// What an action did to the account.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Applied(AccountState),
    Rejected {
        state: AccountState,
        reason: Rejection,
    },
}

impl Outcome {
    /// The state after the action, whether or not it was applied.
    pub fn into_state(self) -> AccountState {
        match self {
            Self::Applied(state) | Self::Rejected { state, .. } => state,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Applied(_) => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Compute the next state.
///
/// Balance arithmetic wraps on `i64` overflow so the function stays total.
/// It does not saturate: depositing past `i64::MAX` yields a large negative
/// balance, and withdrawing past `i64::MIN` a large positive one.
///
/// # Example
///
/// ```rust
/// use bank_reducer::core::{transition, AccountState, Action};
///
/// let state = transition(AccountState::initial(), Action::OpenAccount { amount: 500 });
/// assert_eq!(state, AccountState { balance: 500, loan: 0, is_active: true });
///
/// // Closing with money still in the account is silently refused.
/// assert_eq!(transition(state, Action::CloseAccount), state);
/// ```
pub fn transition(state: AccountState, action: Action) -> AccountState {
    evaluate(state, &action).into_state()
}

/// Compute the next state and report whether the action was rejected.
pub fn evaluate(state: AccountState, action: &Action) -> Outcome {
    match apply(state, action) {
        Ok(next) => Outcome::Applied(next),
        Err(reason) => Outcome::Rejected { state, reason },
    }
}

/// Decode an untyped action and compute the next state.
///
/// An unrecognized tag is a caller bug and is returned as an error rather
/// than treated as a no-op.
pub fn transition_raw(state: AccountState, raw: &RawAction) -> Result<AccountState, ActionError> {
    let action = raw.parse()?;
    Ok(transition(state, action))
}

fn apply(state: AccountState, action: &Action) -> Result<AccountState, Rejection> {
    require_active(&state, action)?;

    let next = match *action {
        Action::OpenAccount { amount } => AccountState {
            is_active: true,
            balance: amount,
            ..state
        },
        Action::Deposit { amount } => AccountState {
            balance: state.balance.wrapping_add(amount),
            ..state
        },
        Action::Withdraw { amount } => AccountState {
            balance: state.balance.wrapping_sub(amount),
            ..state
        },
        Action::RequestLoan { amount } => {
            require_loan_available(&state, amount)?;
            AccountState {
                loan: amount,
                balance: state.balance.wrapping_add(amount),
                ..state
            }
        }
        Action::PayLoan => AccountState {
            balance: state.balance.wrapping_sub(state.loan),
            loan: 0,
            ..state
        },
        Action::CloseAccount => {
            require_settled(&state)?;
            AccountState::initial()
        }
    };

    Ok(next)
}
