use splitpot_domain::{GroupId, Money, ParticipantId};
use thiserror::Error;

/// Rejection reasons for an expense draft.
///
/// Drafts are validated here, before an expense enters the ledger; the
/// settlement services downstream assume well-formed data and never
/// re-validate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidExpense {
    #[error("expense title must not be blank")]
    BlankTitle,
    #[error("expense amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Money },
    #[error("group {group} is not known to this ledger")]
    UnknownGroup { group: GroupId },
    #[error("payer {payer} is not a participant of group {group}")]
    PayerNotInGroup {
        payer: ParticipantId,
        group: GroupId,
    },
    #[error("split participant {participant} is not a participant of group {group}")]
    SplitParticipantNotInGroup {
        participant: ParticipantId,
        group: GroupId,
    },
}
