//! State trait and the account state value.
//!
//! States are plain immutable values. Every transition builds a new value
//! from the old one instead of mutating it in place.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values a [`Reducer`](crate::core::Reducer) operates on.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable so rejections can be detected
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for output
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// A single bank account.
///
/// Serializes with the field names the reference UI uses:
/// `{"balance": 0, "loan": 0, "isActive": false}`.
///
/// # Example
///
/// ```rust
/// use bank_reducer::core::AccountState;
///
/// let closed = AccountState::initial();
/// assert!(!closed.is_active);
/// assert_eq!(closed, AccountState::default());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    /// Current balance. Negative after paying off a loan the balance
    /// could not cover.
    pub balance: i64,
    /// Outstanding loan principal, never negative.
    pub loan: i64,
    /// `false` means the account is closed or was never opened.
    pub is_active: bool,
}

impl AccountState {
    /// The canonical closed/never-opened account.
    pub const fn initial() -> Self {
        Self {
            balance: 0,
            loan: 0,
            is_active: false,
        }
    }

    /// Whether this is exactly the canonical initial value.
    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }

    pub fn has_loan(&self) -> bool {
        self.loan > 0
    }

    /// No loan and a zero balance: the only state an account can be closed from.
    pub fn is_settled(&self) -> bool {
        self.loan == 0 && self.balance == 0
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::initial()
    }
}

impl State for AccountState {
    fn name(&self) -> &str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}
