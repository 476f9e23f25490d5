//! End-to-end account scenarios driven through the store.

use bank_reducer::core::{transition, AccountState, Action, ActionError, RawAction, Rejection};
use bank_reducer::script::{ActionScript, ScriptError};
use bank_reducer::store::AccountStore;
use bank_reducer::teller::Button;
use bank_reducer::config::TellerConfig;

fn state(balance: i64, loan: i64, is_active: bool) -> AccountState {
    AccountState {
        balance,
        loan,
        is_active,
    }
}

#[test]
fn full_account_lifecycle() {
    let steps = [
        (Action::OpenAccount { amount: 500 }, state(500, 0, true)),
        (Action::Deposit { amount: 150 }, state(650, 0, true)),
        (Action::Withdraw { amount: 50 }, state(600, 0, true)),
        (Action::RequestLoan { amount: 5000 }, state(5600, 5000, true)),
        (Action::PayLoan, state(600, 0, true)),
        (Action::Withdraw { amount: 600 }, state(0, 0, true)),
        (Action::CloseAccount, state(0, 0, false)),
    ];

    let mut store = AccountStore::default();
    for (action, expected) in steps {
        assert_eq!(store.dispatch(action), &expected, "after {action:?}");
    }

    assert!(store.state().is_initial());
    assert_eq!(store.history().len(), 7);
    assert_eq!(store.history().rejected().count(), 0);
}

#[test]
fn close_with_balance_is_a_no_op() {
    let before = state(600, 0, true);
    assert_eq!(transition(before, Action::CloseAccount), before);
}

#[test]
fn requesting_loan_twice_equals_once() {
    let open = state(600, 0, true);
    let once = transition(open, Action::RequestLoan { amount: 5000 });
    let twice = transition(once, Action::RequestLoan { amount: 5000 });

    assert_eq!(once, twice);
}

#[test]
fn second_loan_keeps_first_amount() {
    let mut store = AccountStore::new(state(600, 0, true));
    store.dispatch(Action::RequestLoan { amount: 5000 });
    let outcome = store.apply(Action::RequestLoan { amount: 3000 });

    assert_eq!(outcome.rejection(), Some(Rejection::LoanOutstanding));
    assert_eq!(store.state(), &state(5600, 5000, true));
}

#[test]
fn overdrawn_after_payoff_cannot_close() {
    let mut store = AccountStore::default();
    store.dispatch(Action::OpenAccount { amount: 500 });
    store.dispatch(Action::RequestLoan { amount: 5000 });
    store.dispatch(Action::Withdraw { amount: 5500 });
    store.dispatch(Action::PayLoan);

    assert_eq!(store.state(), &state(-5000, 0, true));

    let outcome = store.apply(Action::CloseAccount);
    assert_eq!(outcome.rejection(), Some(Rejection::BalanceNotSettled));
    assert_eq!(store.state(), &state(-5000, 0, true));
}

#[test]
fn closed_account_can_be_reopened() {
    let mut store = AccountStore::default();
    store.dispatch(Action::OpenAccount { amount: 500 });
    store.dispatch(Action::Withdraw { amount: 500 });
    store.dispatch(Action::CloseAccount);
    store.dispatch(Action::Deposit { amount: 150 });

    assert!(store.state().is_initial());

    store.dispatch(Action::OpenAccount { amount: 500 });
    assert_eq!(store.state(), &state(500, 0, true));
}

#[test]
fn unknown_action_fails_loudly() {
    let mut store = AccountStore::new(state(600, 0, true));
    let err = store
        .dispatch_raw(&RawAction::new("TRANSFER", Some(100)))
        .unwrap_err();

    assert_eq!(
        err,
        ActionError::UnknownActionType {
            kind: "TRANSFER".to_string()
        }
    );
    assert_eq!(store.state(), &state(600, 0, true));
}

#[test]
fn reference_ui_session_as_script() {
    let script = ActionScript::from_json(
        r#"[
            {"type": "OPEN_ACCOUNT", "payload": 500},
            {"type": "DEPOSIT", "payload": 150},
            {"type": "WITHDRAW", "payload": 50},
            {"type": "REQUEST_LOAN", "payload": 5000},
            {"type": "PAY_LOAN"},
            {"type": "WITHDRAW", "payload": 600},
            {"type": "CLOSE_ACCOUNT"}
        ]"#,
    )
    .unwrap();

    let mut store = AccountStore::default();
    let states = store.run_script(&script).unwrap();

    assert_eq!(states.len(), 7);
    assert_eq!(states[3], state(5600, 5000, true));
    assert_eq!(states.last(), Some(&AccountState::initial()));
}

#[test]
fn script_with_unknown_tags_reports_each() {
    let script = ActionScript::from_json(
        r#"[{"type": "OPEN_ACCOUNT", "payload": 500}, {"type": "FREEZE"}, {"type": "EMBEZZLE"}]"#,
    )
    .unwrap();

    let mut store = AccountStore::default();
    match store.run_script(&script) {
        Err(ScriptError::Invalid(violations)) => {
            let indexes: Vec<usize> = violations.iter().map(|v| v.index).collect();
            assert_eq!(indexes, vec![1, 2]);
        }
        other => panic!("Expected invalid script, got {other:?}"),
    }
    assert!(store.state().is_initial());
}

#[test]
fn teller_buttons_drive_reference_session() {
    let config = TellerConfig::default();
    let mut store = AccountStore::default();

    for button in [Button::Open, Button::Deposit, Button::Withdraw, Button::RequestLoan] {
        store.dispatch(button.action(&config));
    }

    assert_eq!(store.state(), &state(5600, 5000, true));
}
