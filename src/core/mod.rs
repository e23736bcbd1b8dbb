//! Core ledger logic
//!
//! Pure computation lives in [`split_calculator`], [`balance_aggregator`],
//! and [`debt_simplifier`]; record storage in [`expense_store`] and
//! [`settlement_ledger`]; and [`engine`] ties them together behind the
//! per-group [`LedgerEngine`] facade.

pub mod balance_aggregator;
pub mod debt_simplifier;
pub mod engine;
pub mod expense_store;
pub mod settlement_ledger;
pub mod split_calculator;

pub use balance_aggregator::{compute_balances, BalanceMap};
pub use debt_simplifier::simplify_debts;
pub use engine::LedgerEngine;
pub use expense_store::ExpenseStore;
pub use settlement_ledger::{authorize_expense, SettlementLedger};
pub use split_calculator::compute_split;
