//! Expense types and splitting strategies
//!
//! An expense records one shared cost: who paid, how much, and how the cost
//! divides among participants. The division rule is a tagged
//! [`SplitStrategy`] variant rather than one record with optional fields, so
//! each strategy's invariants can be checked at construction time.

use super::group::{GroupId, MemberId};
use super::money::Money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's percentage of the total in a percentage split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageShare {
    /// Participating member
    pub member: MemberId,

    /// Share of the total, in percent (all shares must sum to 100)
    pub percent: Decimal,
}

/// A participant's exact amount in a custom split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomShare {
    /// Participating member
    pub member: MemberId,

    /// Exact amount owed by the member
    pub amount: Money,
}

/// How a shared cost divides among participants
///
/// Participant order is significant for the `Equal` and `Percentage`
/// strategies: the rounding residual lands on the last participant, so
/// re-running a split with the same input and order yields identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SplitStrategy {
    /// Even division among the listed participants
    Equal {
        /// Participants, in caller-supplied order
        participants: Vec<MemberId>,
    },

    /// Division by caller-supplied percentages summing to 100
    Percentage {
        /// Per-participant percentages, in caller-supplied order
        shares: Vec<PercentageShare>,
    },

    /// Caller-supplied exact amounts; validated, never redistributed
    Custom {
        /// Per-participant amounts
        shares: Vec<CustomShare>,
    },
}

impl SplitStrategy {
    /// Participants referenced by the strategy, in declaration order
    pub fn participants(&self) -> Vec<MemberId> {
        match self {
            SplitStrategy::Equal { participants } => participants.clone(),
            SplitStrategy::Percentage { shares } => {
                shares.iter().map(|share| share.member).collect()
            }
            SplitStrategy::Custom { shares } => {
                shares.iter().map(|share| share.member).collect()
            }
        }
    }

    /// Strategy name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            SplitStrategy::Equal { .. } => "equal",
            SplitStrategy::Percentage { .. } => "percentage",
            SplitStrategy::Custom { .. } => "custom",
        }
    }
}

/// One participant's computed share of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Member owing this share
    pub member: MemberId,

    /// Amount owed; all splits of an expense sum exactly to its total
    pub amount: Money,
}

/// A persisted shared expense
///
/// Expenses are created by user action and never mutated in place; deletion
/// is a hard remove and the next balance recomputation reflects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense identifier
    pub id: ExpenseId,

    /// Owning group
    pub group: GroupId,

    /// Total amount paid (always positive)
    pub amount: Money,

    /// Expense category
    pub category: String,

    /// Free-form description
    pub description: String,

    /// Date the cost was incurred
    pub date: NaiveDate,

    /// Member who paid the total
    pub payer: MemberId,

    /// Division rule the splits were computed from
    pub strategy: SplitStrategy,

    /// Per-participant shares summing exactly to `amount`
    pub splits: Vec<Split>,
}

/// Input record for a new expense, before splits are computed
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    /// Total amount paid (must be positive)
    pub amount: Money,

    /// Expense category
    pub category: String,

    /// Free-form description
    pub description: String,

    /// Date the cost was incurred
    pub date: NaiveDate,

    /// Member who paid the total
    pub payer: MemberId,

    /// Division rule to compute splits from
    pub strategy: SplitStrategy,
}
