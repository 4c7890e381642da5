use splitpot_application::{ParticipantDirectory, SettlementOverview};
use splitpot_domain::{Debt, Money, ParticipantId};
use std::borrow::Cow;

pub struct SettlementPresenter;

/// Display rows for one group's settlement state.
pub struct SettlementSummary {
    pub balance_lines: Vec<String>,
    pub debt_lines: Vec<String>,
}

impl SettlementPresenter {
    /// Renders with raw participant ids as labels.
    pub fn render(overview: &SettlementOverview) -> SettlementSummary {
        Self::render_with_names(overview, &EmptyDirectory)
    }

    /// Renders with display names resolved through `directory`, falling
    /// back to the raw id for participants the directory does not know.
    pub fn render_with_names(
        overview: &SettlementOverview,
        directory: &dyn ParticipantDirectory,
    ) -> SettlementSummary {
        let balance_lines = overview
            .balances
            .iter()
            .map(|balance| {
                let sign = if balance.balance >= Money::ZERO { "+" } else { "" };
                format!(
                    "{}: {sign}{}",
                    participant_label(&balance.participant_id, directory),
                    balance.balance
                )
            })
            .collect();

        let mut debts = overview.debts.clone();
        sort_debts(&mut debts);
        let debt_lines = debts
            .iter()
            .map(|debt| {
                format!(
                    "{} -> {}: {}",
                    participant_label(&debt.from, directory),
                    participant_label(&debt.to, directory),
                    debt.amount
                )
            })
            .collect();

        SettlementSummary {
            balance_lines,
            debt_lines,
        }
    }
}

struct EmptyDirectory;

impl ParticipantDirectory for EmptyDirectory {
    fn display_name(&self, _id: &ParticipantId) -> Option<&str> {
        None
    }
}

fn participant_label<'a>(
    id: &'a ParticipantId,
    directory: &'a dyn ParticipantDirectory,
) -> Cow<'a, str> {
    match directory.display_name(id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Borrowed(id.0.as_str()),
    }
}

// Reducer output order is an algorithm detail; rows are sorted for a
// stable on-screen order.
fn sort_debts(debts: &mut [Debt]) {
    debts.sort_by(|lhs, rhs| {
        lhs.from
            .cmp(&rhs.from)
            .then_with(|| lhs.to.cmp(&rhs.to))
            .then_with(|| lhs.amount.cmp(&rhs.amount))
    });
}
