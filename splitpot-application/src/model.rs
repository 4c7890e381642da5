use crate::error::InvalidExpense;
use splitpot_domain::{Balance, Debt, Expense, ExpenseId, Group, GroupId, Money, ParticipantId};

/// An expense as entered upstream, before validation against its group.
///
/// The id is assigned by the persistence collaborator and travels with the
/// draft; the ledger never generates ids.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub id: ExpenseId,
    pub group_id: GroupId,
    pub title: String,
    pub description: String,
    pub amount: Money,
    pub payer_id: ParticipantId,
    /// Empty means "split across all current participants of the group".
    pub split_between_ids: Vec<ParticipantId>,
}

impl ExpenseDraft {
    pub fn validate(&self, group: &Group) -> Result<(), InvalidExpense> {
        if self.title.trim().is_empty() {
            return Err(InvalidExpense::BlankTitle);
        }
        if self.amount <= Money::ZERO {
            return Err(InvalidExpense::NonPositiveAmount {
                amount: self.amount,
            });
        }
        if !group.contains_participant(&self.payer_id) {
            return Err(InvalidExpense::PayerNotInGroup {
                payer: self.payer_id.clone(),
                group: group.id.clone(),
            });
        }
        for participant in &self.split_between_ids {
            if !group.contains_participant(participant) {
                return Err(InvalidExpense::SplitParticipantNotInGroup {
                    participant: participant.clone(),
                    group: group.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Materializes the draft, substituting an empty split list with the
    /// group's full current roster.
    pub(crate) fn into_expense(self, group: &Group) -> Expense {
        let split_between_ids = if self.split_between_ids.is_empty() {
            group.participant_ids().cloned().collect()
        } else {
            self.split_between_ids
        };

        Expense {
            id: self.id,
            group_id: self.group_id,
            title: self.title,
            description: self.description,
            amount: self.amount,
            payer_id: self.payer_id,
            split_between_ids,
        }
    }
}

/// Balances and settling transfers for one group, derived fresh from the
/// current snapshot on every call.
#[derive(Clone, Debug, PartialEq)]
pub struct SettlementOverview {
    pub balances: Vec<Balance>,
    pub debts: Vec<Debt>,
}
