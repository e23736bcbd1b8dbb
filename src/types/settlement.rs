//! Settlement types
//!
//! A settlement is a recorded payment between two members that reduces their
//! mutual debt. Settlement records are append-only: there is no update or
//! soft delete, only a hard remove that the next recomputation reflects.

use super::group::{GroupId, MemberId};
use super::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Settlement identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SettlementId(pub u64);

impl std::fmt::Display for SettlementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded payment between two members of a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Settlement identifier, assigned by the ledger
    pub id: SettlementId,

    /// Owning group
    pub group: GroupId,

    /// Paying member (the debtor squaring up)
    pub from: MemberId,

    /// Receiving member (the creditor being repaid)
    pub to: MemberId,

    /// Amount paid (always positive)
    pub amount: Money,

    /// Date of the payment
    pub date: NaiveDate,

    /// Optional free-form notes
    pub notes: Option<String>,
}

/// Input record for a new settlement, before the ledger assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementDraft {
    /// Paying member
    pub from: MemberId,

    /// Receiving member
    pub to: MemberId,

    /// Amount paid (must be positive)
    pub amount: Money,

    /// Date of the payment
    pub date: NaiveDate,

    /// Optional free-form notes
    pub notes: Option<String>,
}

/// A suggested payment produced by debt simplification
///
/// Derived, never persisted: `from` pays `to` the (positive) amount. Applying
/// every transaction of a simplification settles all balances to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedTransaction {
    /// Paying member
    pub from: MemberId,

    /// Receiving member
    pub to: MemberId,

    /// Amount to pay (always positive)
    pub amount: Money,
}
