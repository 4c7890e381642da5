#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balance, Debt, Expense, ExpenseId, Group, GroupId, Money, Participant, ParticipantId,
};
pub use services::{settled_epsilon, BalanceCalculator, DebtReducer};
