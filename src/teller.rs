//! Teller buttons: the fixed-amount actions a front end offers.

use crate::config::TellerConfig;
use crate::core::Action;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Button {
    Open,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
    Close,
}

impl Button {
    /// The action this button dispatches with the configured amounts.
    pub fn action(self, config: &TellerConfig) -> Action {
        match self {
            Self::Open => Action::OpenAccount {
                amount: config.open_amount,
            },
            Self::Deposit => Action::Deposit {
                amount: config.deposit_amount,
            },
            Self::Withdraw => Action::Withdraw {
                amount: config.withdraw_amount,
            },
            Self::RequestLoan => Action::RequestLoan {
                amount: config.loan_amount,
            },
            Self::PayLoan => Action::PayLoan,
            Self::Close => Action::CloseAccount,
        }
    }
}
