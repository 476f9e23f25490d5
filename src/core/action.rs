//! Actions that request a change to an account.
//!
//! [`Action`] is the closed, typed form the reducer consumes. [`RawAction`]
//! is the untyped `{type, payload}` record a UI dispatches; decoding it is
//! the only place an unrecognized action tag can appear.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const OPEN_ACCOUNT: &str = "OPEN_ACCOUNT";
pub const DEPOSIT: &str = "DEPOSIT";
pub const WITHDRAW: &str = "WITHDRAW";
pub const REQUEST_LOAN: &str = "REQUEST_LOAN";
pub const PAY_LOAN: &str = "PAY_LOAN";
pub const CLOSE_ACCOUNT: &str = "CLOSE_ACCOUNT";

/// A request to change the account.
///
/// Serializes in the reference UI's wire shape through [`RawAction`], so
/// deserializing an unknown tag fails instead of producing a value.
///
/// # Example
///
/// ```rust
/// use bank_reducer::core::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type":"DEPOSIT","payload":150}"#).unwrap();
/// assert_eq!(action, Action::Deposit { amount: 150 });
///
/// assert!(serde_json::from_str::<Action>(r#"{"type":"ROB_BANK"}"#).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum Action {
    OpenAccount { amount: i64 },
    Deposit { amount: i64 },
    Withdraw { amount: i64 },
    RequestLoan { amount: i64 },
    PayLoan,
    CloseAccount,
}

impl Action {
    /// The wire tag for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenAccount { .. } => OPEN_ACCOUNT,
            Self::Deposit { .. } => DEPOSIT,
            Self::Withdraw { .. } => WITHDRAW,
            Self::RequestLoan { .. } => REQUEST_LOAN,
            Self::PayLoan => PAY_LOAN,
            Self::CloseAccount => CLOSE_ACCOUNT,
        }
    }

    /// The payload amount, if this action carries one.
    pub fn amount(&self) -> Option<i64> {
        match self {
            Self::OpenAccount { amount }
            | Self::Deposit { amount }
            | Self::Withdraw { amount }
            | Self::RequestLoan { amount } => Some(*amount),
            Self::PayLoan | Self::CloseAccount => None,
        }
    }
}

/// Errors raised when an untyped action does not describe a valid [`Action`].
///
/// These are contract violations by the caller, not domain rejections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Invalid action type {kind}")]
    UnknownActionType { kind: String },

    #[error("Action {kind} requires a payload amount")]
    MissingPayload { kind: String },
}

/// An action as dispatched by an untyped caller.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<i64>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, payload: Option<i64>) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Decode into a typed action.
    ///
    /// A payload on `PAY_LOAN` or `CLOSE_ACCOUNT` is ignored.
    pub fn parse(&self) -> Result<Action, ActionError> {
        let amount = || {
            self.payload.ok_or_else(|| ActionError::MissingPayload {
                kind: self.kind.clone(),
            })
        };

        match self.kind.as_str() {
            OPEN_ACCOUNT => Ok(Action::OpenAccount { amount: amount()? }),
            DEPOSIT => Ok(Action::Deposit { amount: amount()? }),
            WITHDRAW => Ok(Action::Withdraw { amount: amount()? }),
            REQUEST_LOAN => Ok(Action::RequestLoan { amount: amount()? }),
            PAY_LOAN => Ok(Action::PayLoan),
            CLOSE_ACCOUNT => Ok(Action::CloseAccount),
            other => Err(ActionError::UnknownActionType {
                kind: other.to_string(),
            }),
        }
    }
}

impl TryFrom<RawAction> for Action {
    type Error = ActionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        RawAction::new(action.kind(), action.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_recognized_tag() {
        let cases = [
            (RawAction::new(OPEN_ACCOUNT, Some(500)), Action::OpenAccount { amount: 500 }),
            (RawAction::new(DEPOSIT, Some(150)), Action::Deposit { amount: 150 }),
            (RawAction::new(WITHDRAW, Some(50)), Action::Withdraw { amount: 50 }),
            (RawAction::new(REQUEST_LOAN, Some(5000)), Action::RequestLoan { amount: 5000 }),
            (RawAction::new(PAY_LOAN, None), Action::PayLoan),
            (RawAction::new(CLOSE_ACCOUNT, None), Action::CloseAccount),
        ];

        for (raw, expected) in cases {
            assert_eq!(raw.parse(), Ok(expected));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result = RawAction::new("ROB_BANK", Some(1_000_000)).parse();
        assert_eq!(
            result,
            Err(ActionError::UnknownActionType {
                kind: "ROB_BANK".to_string()
            })
        );
    }

    #[test]
    fn tags_are_case_sensitive() {
        let result = RawAction::new("deposit", Some(150)).parse();
        assert!(matches!(result, Err(ActionError::UnknownActionType { .. })));
    }

    #[test]
    fn amount_actions_require_payload() {
        let result = RawAction::new(DEPOSIT, None).parse();
        assert_eq!(
            result,
            Err(ActionError::MissingPayload {
                kind: DEPOSIT.to_string()
            })
        );
    }

    #[test]
    fn payload_on_pay_loan_is_ignored() {
        let result = RawAction::new(PAY_LOAN, Some(10)).parse();
        assert_eq!(result, Ok(Action::PayLoan));
    }

    #[test]
    fn error_message_names_the_tag() {
        let err = RawAction::new("TELEPORT", None).parse().unwrap_err();
        assert_eq!(err.to_string(), "Invalid action type TELEPORT");
    }

    #[test]
    fn serializes_in_wire_shape() {
        let json = serde_json::to_value(Action::RequestLoan { amount: 5000 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "REQUEST_LOAN", "payload": 5000}));

        let json = serde_json::to_value(Action::PayLoan).unwrap();
        assert_eq!(json, serde_json::json!({"type": "PAY_LOAN"}));
    }

    #[test]
    fn deserializing_unknown_tag_fails() {
        let result = serde_json::from_str::<Action>(r#"{"type":"HACK","payload":1}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid action type HACK"));
    }
}
