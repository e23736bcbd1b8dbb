//! Error types for the split-ledger engine
//!
//! Every engine error is a deterministic validation failure, not a transient
//! fault: there is nothing to retry. The engine validates fully before any
//! write, so a failed operation never leaves a partially-split expense or a
//! malformed settlement behind. Callers surface these errors directly; the
//! engine performs no logging or suppression.
//!
//! # Error Categories
//!
//! - **Validation errors**: bad amounts, bad participant lists, mismatched
//!   percentage or custom-split totals, self-settlements, archived groups,
//!   unknown members.
//! - **File I/O errors**: raised by the CSV report pipeline only.
//! - **CSV parsing errors**: malformed rows; recoverable, the row is skipped.

use super::group::{GroupId, MemberId};
use super::money::Money;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the split-ledger engine
///
/// Each variant carries the context needed to report the failure to the end
/// user without further lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative where a positive amount is required
    ///
    /// Raised for expense totals and settlement amounts.
    #[error("Invalid amount {amount}: must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Participant list is unusable (empty, or a member listed twice)
    #[error("Invalid participants: {message}")]
    InvalidParticipants {
        /// Description of what is wrong with the list
        message: String,
    },

    /// Percentage shares do not sum to 100
    ///
    /// The sum is checked within a 0.01 tolerance; anything further off is
    /// rejected before any share is computed.
    #[error("Percentages sum to {total}, expected 100")]
    PercentageMismatch {
        /// The actual percentage sum
        total: Decimal,
    },

    /// Custom split amounts do not sum to the expense total
    ///
    /// Custom splits are caller-authoritative: the engine validates the sum
    /// and performs no redistribution.
    #[error("Split amounts sum to {actual}, expected {expected}")]
    SplitAmountMismatch {
        /// The expense total
        expected: Decimal,
        /// The actual sum of the supplied amounts
        actual: Decimal,
    },

    /// Settlement names the same member on both sides
    #[error("Settlement from and to are both member {member}")]
    SameMemberSettlement {
        /// The member appearing as both payer and receiver
        member: MemberId,
    },

    /// Group is archived and no longer accepts expenses
    ///
    /// Settlements remain permitted so debts can still be squared up.
    #[error("Group {group} is archived and does not accept new expenses")]
    GroupArchived {
        /// The archived group
        group: GroupId,
    },

    /// Record references a member outside the group roster
    #[error("Member {member} is not in the group roster")]
    UnknownMember {
        /// The unknown member id
        member: MemberId,
    },

    /// I/O error while reading or writing CSV files
    ///
    /// Fatal to the report pipeline; the engine itself performs no I/O.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error
    ///
    /// Recoverable: the malformed row is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error from a minor-unit amount
    pub fn invalid_amount(amount: Money) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_decimal(),
        }
    }

    /// Create an InvalidParticipants error for an empty participant list
    pub fn empty_participants() -> Self {
        LedgerError::InvalidParticipants {
            message: "participant list is empty".to_string(),
        }
    }

    /// Create an InvalidParticipants error for a duplicated member
    pub fn duplicate_participant(member: MemberId) -> Self {
        LedgerError::InvalidParticipants {
            message: format!("member {} appears more than once", member),
        }
    }

    /// Create a PercentageMismatch error
    pub fn percentage_mismatch(total: Decimal) -> Self {
        LedgerError::PercentageMismatch { total }
    }

    /// Create a SplitAmountMismatch error
    pub fn split_amount_mismatch(expected: Money, actual: Money) -> Self {
        LedgerError::SplitAmountMismatch {
            expected: expected.to_decimal(),
            actual: actual.to_decimal(),
        }
    }

    /// Create a SameMemberSettlement error
    pub fn same_member_settlement(member: MemberId) -> Self {
        LedgerError::SameMemberSettlement { member }
    }

    /// Create a GroupArchived error
    pub fn group_archived(group: GroupId) -> Self {
        LedgerError::GroupArchived { group }
    }

    /// Create an UnknownMember error
    pub fn unknown_member(member: MemberId) -> Self {
        LedgerError::UnknownMember { member }
    }
}
