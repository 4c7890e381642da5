use splitpot_application::{ExpensePatch, LedgerEvent, LedgerStore, SettlementService};
use splitpot_domain::{Expense, ExpenseId, Group, GroupId, Money, ParticipantId};

const SNAPSHOT_GROUPS: &str = r#"[
    {
        "id": "weekend-trip",
        "name": "Weekend trip",
        "created_by": "anna",
        "participants": [
            { "id": "anna", "name": "Anna" },
            { "id": "ben", "name": "Ben" },
            { "id": "cora", "name": "Cora" }
        ]
    }
]"#;

const SNAPSHOT_EXPENSES: &str = r#"[
    {
        "id": "e-dinner",
        "group_id": "weekend-trip",
        "title": "Dinner",
        "description": "",
        "amount": "30.00",
        "payer_id": "anna",
        "split_between_ids": []
    }
]"#;

fn store_from_snapshot() -> LedgerStore {
    let groups: Vec<Group> =
        serde_json::from_str(SNAPSHOT_GROUPS).expect("group snapshot should deserialize");
    let expenses: Vec<Expense> =
        serde_json::from_str(SNAPSHOT_EXPENSES).expect("expense snapshot should deserialize");

    let mut store = LedgerStore::new();
    store.apply(LedgerEvent::SnapshotReplaced { groups, expenses });
    store
}

#[test]
fn snapshot_from_wire_feeds_settlement() {
    let store = store_from_snapshot();
    let overview = SettlementService::new(&store)
        .overview(&GroupId::from("weekend-trip"))
        .expect("group should be known");

    let amounts: Vec<Money> = overview.balances.iter().map(|b| b.balance).collect();
    assert_eq!(
        amounts,
        vec![
            Money::from_cents(2000),
            Money::from_cents(-1000),
            Money::from_cents(-1000)
        ]
    );
    assert_eq!(overview.debts.len(), 2);
    assert!(overview
        .debts
        .iter()
        .all(|d| d.to == ParticipantId::from("anna") && d.amount == Money::from_cents(1000)));
}

#[test]
fn remote_edits_show_up_in_the_next_derivation() {
    let mut store = store_from_snapshot();
    let service_amounts = |store: &LedgerStore| {
        SettlementService::new(store)
            .balances(&GroupId::from("weekend-trip"))
            .expect("group should be known")
            .iter()
            .map(|b| b.balance)
            .collect::<Vec<_>>()
    };

    store.apply(LedgerEvent::ExpensePatched {
        id: ExpenseId::from("e-dinner"),
        patch: ExpensePatch {
            amount: Some(Money::from_cents(6000)),
            ..ExpensePatch::default()
        },
    });
    assert_eq!(
        service_amounts(&store),
        vec![
            Money::from_cents(4000),
            Money::from_cents(-2000),
            Money::from_cents(-2000)
        ]
    );

    store.apply(LedgerEvent::ExpenseRemoved(ExpenseId::from("e-dinner")));
    let overview = SettlementService::new(&store)
        .overview(&GroupId::from("weekend-trip"))
        .expect("group should be known");
    assert!(overview.balances.iter().all(|b| b.balance.is_zero()));
    assert!(overview.debts.is_empty());
}
