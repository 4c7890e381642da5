//! Debt simplification: reducing net balances to settling transfers.
//!
//! Greedy largest-creditor / largest-debtor matching. The pairing is
//! deterministic and keeps transfer counts low in practice, but it is a
//! heuristic, not a proven minimum-transaction solver.

use crate::model::{Balance, Debt, Money, ParticipantId};

/// One cent. Balances within this tolerance of zero count as settled.
///
/// Single definition so the rounding policy stays centralized.
pub fn settled_epsilon() -> Money {
    Money::new(1, 2)
}

/// Debt reduction service.
pub struct DebtReducer;

impl DebtReducer {
    /// Reduces net balances into directed payments that drive every balance
    /// to (approximately) zero.
    ///
    /// Applying each debt (subtracting its amount from `from`, adding it to
    /// `to`) settles all participants within the one-cent tolerance.
    /// Balances already within tolerance contribute nothing to the output.
    pub fn reduce(&self, balances: &[Balance]) -> Vec<Debt> {
        let epsilon = settled_epsilon();

        let mut creditors: Vec<(&ParticipantId, Money)> = balances
            .iter()
            .filter(|b| b.balance > epsilon)
            .map(|b| (&b.participant_id, b.balance))
            .collect();
        let mut debtors: Vec<(&ParticipantId, Money)> = balances
            .iter()
            .filter(|b| b.balance < -epsilon)
            .map(|b| (&b.participant_id, b.balance))
            .collect();

        // Largest outstanding creditor against largest outstanding debtor.
        creditors.sort_by(|a, b| b.1.cmp(&a.1));
        debtors.sort_by(|a, b| a.1.cmp(&b.1));

        let mut debts = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < creditors.len() && j < debtors.len() {
            let amount = creditors[i].1.min(-debtors[j].1);
            if amount < epsilon {
                // One side is within tolerance of settled; advance it
                // without emitting (creditor first when both qualify).
                if creditors[i].1 <= epsilon {
                    i += 1;
                } else {
                    j += 1;
                }
                continue;
            }

            debts.push(Debt {
                from: debtors[j].0.clone(),
                to: creditors[i].0.clone(),
                amount: amount.round_to_cents(),
            });
            creditors[i].1 -= amount;
            debtors[j].1 += amount;

            if creditors[i].1 <= epsilon {
                i += 1;
            }
            if debtors[j].1 >= -epsilon {
                j += 1;
            }
        }

        tracing::debug!(
            creditor_count = creditors.len(),
            debtor_count = debtors.len(),
            debt_count = debts.len(),
            "reduced balances to transfers"
        );

        debts
    }
}
