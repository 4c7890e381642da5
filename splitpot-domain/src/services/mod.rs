pub mod balance_calculator;
pub mod debt_reducer;

pub use balance_calculator::BalanceCalculator;
pub use debt_reducer::{settled_epsilon, DebtReducer};
