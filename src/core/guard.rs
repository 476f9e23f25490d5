//! Guard predicates for account transitions.
//!
//! Guards are pure checks evaluated before an action takes effect. A failed
//! guard is a domain rejection: the reducer returns the prior state
//! unchanged and reports the [`Rejection`].

use super::action::Action;
use super::state::AccountState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an action left the account unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Only `OpenAccount` is accepted by an inactive account.
    AccountInactive,
    /// A loan is already outstanding.
    LoanOutstanding,
    /// A loan of negative principal was requested.
    NegativeLoan,
    /// Closing requires no loan and a zero balance.
    BalanceNotSettled,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AccountInactive => "account is not active",
            Self::LoanOutstanding => "a loan is already outstanding",
            Self::NegativeLoan => "loan amount must not be negative",
            Self::BalanceNotSettled => "account has an outstanding balance or loan",
        };
        f.write_str(text)
    }
}

/// Every action except `OpenAccount` requires an active account.
pub fn require_active(state: &AccountState, action: &Action) -> Result<(), Rejection> {
    if state.is_active || matches!(action, Action::OpenAccount { .. }) {
        Ok(())
    } else {
        Err(Rejection::AccountInactive)
    }
}

/// At most one loan at a time, and never a negative one.
pub fn require_loan_available(state: &AccountState, amount: i64) -> Result<(), Rejection> {
    if state.loan != 0 {
        return Err(Rejection::LoanOutstanding);
    }
    if amount < 0 {
        return Err(Rejection::NegativeLoan);
    }
    Ok(())
}

pub fn require_settled(state: &AccountState) -> Result<(), Rejection> {
    if state.is_settled() {
        Ok(())
    } else {
        Err(Rejection::BalanceNotSettled)
    }
}
