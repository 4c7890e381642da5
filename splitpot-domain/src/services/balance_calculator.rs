use crate::model::{Balance, Expense, Group, Money, ParticipantId};
use fxhash::FxHashMap;
use rust_decimal::Decimal;

/// Net-balance derivation service.
///
/// Stateless and pure; safe to re-run on every data change. The output is a
/// re-derived view, never an incrementally maintained one.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Derives one net balance per participant of `group`, in participant
    /// order, from the expenses recorded against the group.
    ///
    /// Expenses belonging to other groups are ignored, so callers may pass
    /// a pre-filtered or an unfiltered sequence. Accumulation runs at full
    /// decimal precision; each emitted balance is rounded to cents.
    pub fn compute<'a, I>(&self, group: &'a Group, expenses: I) -> Vec<Balance>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut running: FxHashMap<&ParticipantId, Money> = group
            .participant_ids()
            .map(|id| (id, Money::ZERO))
            .collect();
        let mut applied = 0usize;

        for expense in expenses
            .into_iter()
            .filter(|expense| expense.group_id == group.id)
        {
            let split: Vec<&ParticipantId> = if expense.split_between_ids.is_empty() {
                group.participant_ids().collect()
            } else {
                expense.split_between_ids.iter().collect()
            };
            // Empty split and empty group: nothing to apportion.
            if split.is_empty() {
                continue;
            }

            let share =
                Money::from_decimal(expense.amount.as_decimal() / Decimal::from(split.len() as u64));
            // The payer advanced the full amount. A payer outside the split
            // set receives no offsetting debit and is fully reimbursed.
            *running.entry(&expense.payer_id).or_insert(Money::ZERO) += expense.amount;
            for id in split {
                *running.entry(id).or_insert(Money::ZERO) -= share;
            }
            applied += 1;
        }

        tracing::debug!(
            group = %group.id,
            participant_count = group.participants.len(),
            expense_count = applied,
            "derived group balances"
        );

        // Ids no longer in the group may have accumulated entries above;
        // only current participants are emitted.
        group
            .participants
            .iter()
            .map(|participant| Balance {
                participant_id: participant.id.clone(),
                balance: running
                    .get(&participant.id)
                    .copied()
                    .unwrap_or(Money::ZERO)
                    .round_to_cents(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpenseId, GroupId, Participant};
    use rstest::{fixture, rstest};

    fn group(id: &str, members: &[&str]) -> Group {
        Group {
            id: GroupId::from(id),
            name: id.to_owned(),
            created_by: None,
            participants: members
                .iter()
                .map(|member| Participant {
                    id: ParticipantId::from(*member),
                    name: member.to_uppercase(),
                })
                .collect(),
        }
    }

    fn expense(id: &str, group_id: &str, cents: i64, payer: &str, split: &[&str]) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            group_id: GroupId::from(group_id),
            title: id.to_owned(),
            description: String::new(),
            amount: Money::from_cents(cents),
            payer_id: ParticipantId::from(payer),
            split_between_ids: split.iter().copied().map(ParticipantId::from).collect(),
        }
    }

    fn cents(balances: &[Balance]) -> Vec<(&str, i64)> {
        use rust_decimal::prelude::ToPrimitive;

        balances
            .iter()
            .map(|b| {
                (
                    b.participant_id.0.as_str(),
                    (b.balance.as_decimal() * Decimal::from(100u64))
                        .to_i64()
                        .expect("balance should be whole cents after rounding"),
                )
            })
            .collect()
    }

    #[fixture]
    fn calculator() -> BalanceCalculator {
        BalanceCalculator
    }

    #[rstest]
    #[case::default_split_across_all(
        group("g1", &["a", "b", "c"]),
        vec![expense("e1", "g1", 3000, "a", &[])],
        vec![("a", 2000), ("b", -1000), ("c", -1000)]
    )]
    #[case::payer_outside_split_is_reimbursed(
        group("g1", &["a", "b"]),
        vec![expense("e1", "g1", 10000, "a", &["b"])],
        vec![("a", 10000), ("b", -10000)]
    )]
    #[case::two_payers_even_shares(
        group("g1", &["a", "b", "c"]),
        vec![
            expense("e1", "g1", 900, "a", &["a", "b", "c"]),
            expense("e2", "g1", 900, "b", &["a", "b", "c"]),
        ],
        vec![("a", 300), ("b", 300), ("c", -600)]
    )]
    #[case::no_expenses_all_zero(
        group("g1", &["a", "b", "c"]),
        vec![],
        vec![("a", 0), ("b", 0), ("c", 0)]
    )]
    #[case::empty_group_no_output(
        group("g1", &[]),
        vec![expense("e1", "g1", 3000, "a", &[])],
        vec![]
    )]
    #[case::foreign_group_expense_ignored(
        group("g1", &["a", "b"]),
        vec![
            expense("e1", "g1", 1000, "a", &["b"]),
            expense("e2", "g2", 99999, "a", &["b"]),
        ],
        vec![("a", 1000), ("b", -1000)]
    )]
    #[case::departed_payer_accumulates_without_emission(
        group("g1", &["a", "b"]),
        vec![expense("e1", "g1", 3000, "ghost", &["a", "b"])],
        vec![("a", -1500), ("b", -1500)]
    )]
    #[case::uneven_thirds_round_at_emission(
        group("g1", &["a", "b", "c"]),
        vec![expense("e1", "g1", 1000, "a", &["a", "b", "c"])],
        vec![("a", 667), ("b", -333), ("c", -333)]
    )]
    fn compute_cases(
        calculator: BalanceCalculator,
        #[case] group: Group,
        #[case] expenses: Vec<Expense>,
        #[case] expected: Vec<(&str, i64)>,
    ) {
        let balances = calculator.compute(&group, &expenses);
        assert_eq!(cents(&balances), expected);
    }

    #[rstest]
    fn empty_split_equals_explicit_full_roster(calculator: BalanceCalculator) {
        let group = group("g1", &["a", "b", "c"]);
        let implicit = vec![expense("e1", "g1", 3000, "a", &[])];
        let explicit = vec![expense("e1", "g1", 3000, "a", &["a", "b", "c"])];

        assert_eq!(
            calculator.compute(&group, &implicit),
            calculator.compute(&group, &explicit)
        );
    }

    #[rstest]
    fn expense_order_is_irrelevant(calculator: BalanceCalculator) {
        let group = group("g1", &["a", "b", "c"]);
        let forward = vec![
            expense("e1", "g1", 900, "a", &["b", "c"]),
            expense("e2", "g1", 500, "b", &[]),
            expense("e3", "g1", 1250, "c", &["a"]),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            calculator.compute(&group, &forward),
            calculator.compute(&group, &reversed)
        );
    }
}
