use crate::{model::SettlementOverview, store::LedgerStore};
use splitpot_domain::{Balance, BalanceCalculator, DebtReducer, GroupId};

/// Read-side settlement use cases over the current ledger snapshot.
///
/// Holds no state of its own; every call re-derives its result from the
/// store, so it can run after each change event without invalidation
/// bookkeeping.
#[derive(Clone, Copy)]
pub struct SettlementService<'a> {
    store: &'a LedgerStore,
}

impl<'a> SettlementService<'a> {
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Net balances for one group, `None` when the group is unknown.
    pub fn balances(&self, group_id: &GroupId) -> Option<Vec<Balance>> {
        let group = self.store.group(group_id)?;
        Some(BalanceCalculator.compute(group, self.store.expenses_for(group_id)))
    }

    /// Balances plus the reduced settling transfers for one group.
    pub fn overview(&self, group_id: &GroupId) -> Option<SettlementOverview> {
        let balances = self.balances(group_id)?;
        let debts = DebtReducer.reduce(&balances);
        Some(SettlementOverview { balances, debts })
    }
}
