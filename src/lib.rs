//! Split Ledger Engine Library
//! # Overview
//!
//! This library splits shared group expenses, aggregates them into net
//! member balances, and reduces the resulting debt web to a minimal list of
//! settling payments.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Money, Group, Expense, Settlement, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::split_calculator`] - Splitting an expense into exact shares
//!   - [`core::balance_aggregator`] - Folding records into net balances
//!   - [`core::debt_simplifier`] - Greedy reduction to a payment plan
//!   - [`core::settlement_ledger`] - Settlement records and lifecycle gating
//!   - [`core::engine`] - Per-group orchestration
//! - [`io`] - CSV input parsing and report output
//!
//! # Split Strategies
//!
//! An expense is divided among its participants by one of three strategies:
//!
//! - **Equal**: The amount divided evenly, any rounding remainder assigned
//!   to the last listed participant so the shares sum exactly
//! - **Percentage**: Proportional shares that must sum to 100 percent
//! - **Custom**: Explicit per-member amounts that must sum to the total
//!
//! # Balances
//!
//! Balances are always derived from the full current record set: the payer
//! of each expense is credited the full amount, each participant is debited
//! their share, and each settlement moves credit from the receiving member
//! to the paying one. The resulting map sums to zero and feeds the debt
//! simplifier, which emits the payment plan.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::{compute_balances, compute_split, simplify_debts, BalanceMap, LedgerEngine};
pub use io::{write_balances_csv, write_plan_csv};
pub use types::{
    Expense, ExpenseDraft, ExpenseId, Group, GroupId, LedgerError, Member, MemberId, Money,
    Settlement, SettlementDraft, SettlementId, SimplifiedTransaction, SplitStrategy,
};
