//! Types module
//!
//! Contains core data structures used throughout the engine.
//! This module organizes types into logical submodules:
//! - `money`: minor-unit monetary amounts
//! - `group`: groups, members, and lifecycle state
//! - `expense`: expenses and splitting strategies
//! - `settlement`: settlements and simplified transactions
//! - `error`: error types for the engine

pub mod error;
pub mod expense;
pub mod group;
pub mod money;
pub mod settlement;

pub use error::LedgerError;
pub use expense::{
    CustomShare, Expense, ExpenseDraft, ExpenseId, PercentageShare, Split, SplitStrategy,
};
pub use group::{Group, GroupId, GroupStatus, Member, MemberId};
pub use money::{Money, MINOR_UNIT_SCALE};
pub use settlement::{Settlement, SettlementDraft, SettlementId, SimplifiedTransaction};
