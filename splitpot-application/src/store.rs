use crate::{error::InvalidExpense, model::ExpenseDraft};
use indexmap::IndexMap;
use splitpot_domain::{Expense, ExpenseId, Group, GroupId, Money, ParticipantId};

/// Partial expense update, as delivered by the sync collaborator when a
/// remote edit touches only some fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpensePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub payer_id: Option<ParticipantId>,
    pub split_between_ids: Option<Vec<ParticipantId>>,
}

/// Change notification pushed by the external persistence/sync service.
///
/// Participant roster changes arrive as a fresh `GroupUpserted` because the
/// sync source re-reads the whole roster on any membership change.
#[derive(Clone, Debug, PartialEq)]
pub enum LedgerEvent {
    GroupUpserted(Group),
    GroupRemoved(GroupId),
    ExpenseUpserted(Expense),
    ExpensePatched { id: ExpenseId, patch: ExpensePatch },
    ExpenseRemoved(ExpenseId),
    SnapshotReplaced {
        groups: Vec<Group>,
        expenses: Vec<Expense>,
    },
}

/// In-memory snapshot of groups and expenses, fed by [`LedgerEvent`]s.
///
/// Insertion order is preserved and flows through to everything derived
/// from the snapshot. Events referencing unknown ids are dropped without
/// error; the feed is eventually consistent and a later event will carry
/// the full state.
#[derive(Debug, Default)]
pub struct LedgerStore {
    groups: IndexMap<GroupId, Group>,
    expenses: IndexMap<ExpenseId, Expense>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: LedgerEvent) {
        match event {
            LedgerEvent::GroupUpserted(group) => {
                self.groups.insert(group.id.clone(), group);
            }
            LedgerEvent::GroupRemoved(id) => {
                self.groups.shift_remove(&id);
                // Expenses of a removed group go with it.
                self.expenses.retain(|_, expense| expense.group_id != id);
            }
            LedgerEvent::ExpenseUpserted(expense) => {
                self.expenses.insert(expense.id.clone(), expense);
            }
            LedgerEvent::ExpensePatched { id, patch } => {
                let Some(expense) = self.expenses.get_mut(&id) else {
                    tracing::debug!(expense = %id, "dropping patch for unknown expense");
                    return;
                };
                if let Some(title) = patch.title {
                    expense.title = title;
                }
                if let Some(description) = patch.description {
                    expense.description = description;
                }
                if let Some(amount) = patch.amount {
                    expense.amount = amount;
                }
                if let Some(payer_id) = patch.payer_id {
                    expense.payer_id = payer_id;
                }
                if let Some(split_between_ids) = patch.split_between_ids {
                    expense.split_between_ids = split_between_ids;
                }
            }
            LedgerEvent::ExpenseRemoved(id) => {
                if self.expenses.shift_remove(&id).is_none() {
                    tracing::debug!(expense = %id, "dropping removal of unknown expense");
                }
            }
            LedgerEvent::SnapshotReplaced { groups, expenses } => {
                self.groups = groups
                    .into_iter()
                    .map(|group| (group.id.clone(), group))
                    .collect();
                self.expenses = expenses
                    .into_iter()
                    .map(|expense| (expense.id.clone(), expense))
                    .collect();
            }
        }
    }

    /// Validates a locally entered draft against its group and inserts the
    /// resulting expense, substituting an empty split list with the group's
    /// full current roster.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<ExpenseId, InvalidExpense> {
        let group = self
            .groups
            .get(&draft.group_id)
            .ok_or_else(|| InvalidExpense::UnknownGroup {
                group: draft.group_id.clone(),
            })?;
        draft.validate(group)?;

        let expense = draft.into_expense(group);
        let id = expense.id.clone();
        self.expenses.insert(id.clone(), expense);
        Ok(id)
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.get(id)
    }

    /// Expenses recorded against one group, in insertion order.
    pub fn expenses_for<'a>(
        &'a self,
        group_id: &'a GroupId,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .values()
            .filter(move |expense| &expense.group_id == group_id)
    }
}
