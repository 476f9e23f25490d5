//! bank-reducer: a reducer-based state machine for a toy bank account.
//!
//! The crate follows a "pure core, imperative shell" layout. The core is a
//! single pure function, [`transition`](core::transition), mapping the
//! current [`AccountState`](core::AccountState) and an
//! [`Action`](core::Action) to the next state. The [`Store`](store::Store)
//! owns the live state and replaces it with each result.
//!
//! # Core Concepts
//!
//! - **State**: `{balance, loan, isActive}`, an immutable `Copy` value
//! - **Actions**: open, deposit, withdraw, request loan, pay loan, close
//! - **Rejections**: invalid operations return the state unchanged
//! - **Contract violations**: unknown action tags are errors, never no-ops
//!
//! # Example
//!
//! ```rust
//! use bank_reducer::core::{AccountState, Action};
//! use bank_reducer::store::AccountStore;
//!
//! let mut store = AccountStore::default();
//! store.dispatch(Action::OpenAccount { amount: 500 });
//! store.dispatch(Action::RequestLoan { amount: 5000 });
//! store.dispatch(Action::PayLoan);
//!
//! assert_eq!(store.state(), &AccountState { balance: 500, loan: 0, is_active: true });
//! ```

pub mod config;
pub mod core;
pub mod script;
pub mod store;
pub mod teller;

// Re-export commonly used types
pub use core::{transition, AccountState, Action, ActionError, RawAction};
pub use store::AccountStore;
