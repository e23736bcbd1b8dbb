//! Split calculation
//!
//! Turns one total amount plus a splitting strategy into per-participant
//! shares that sum exactly to the total.
//!
//! Rounding an equal or percentage division to whole minor units can under-
//! or overshoot the total, so the residual (`total − Σ rounded shares`) is
//! added to the share of the last participant in caller-supplied order.
//! Participant order is therefore significant and stable: re-running with the
//! same input and order yields identical output. Custom splits are
//! caller-authoritative and only validated, never redistributed.

use crate::types::{LedgerError, MemberId, Money, Split, SplitStrategy};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashSet;

/// Tolerance for the percentage-sum check (percentages are decimals)
const PERCENT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Compute per-participant shares for one expense
///
/// # Arguments
///
/// * `total` - The total expense amount (must be positive)
/// * `strategy` - How the total divides among participants
///
/// # Returns
///
/// Splits in participant order, summing exactly to `total`.
///
/// # Errors
///
/// Returns an error if:
/// - `total` is zero or negative (`InvalidAmount`)
/// - the participant list is empty or contains a duplicate member
///   (`InvalidParticipants`)
/// - percentages do not sum to 100 within 0.01 (`PercentageMismatch`)
/// - custom amounts do not sum to `total` (`SplitAmountMismatch`)
pub fn compute_split(
    total: Money,
    strategy: &SplitStrategy,
) -> Result<Vec<Split>, LedgerError> {
    if !total.is_positive() {
        return Err(LedgerError::invalid_amount(total));
    }
    validate_participants(&strategy.participants())?;

    let mut splits = match strategy {
        SplitStrategy::Equal { participants } => equal_shares(total, participants),
        SplitStrategy::Percentage { shares } => {
            let sum: Decimal = shares.iter().map(|share| share.percent).sum();
            if (sum - Decimal::from(100)).abs() > PERCENT_EPSILON {
                return Err(LedgerError::percentage_mismatch(sum));
            }
            let mut splits = Vec::with_capacity(shares.len());
            for share in shares {
                splits.push(Split {
                    member: share.member,
                    amount: percentage_share(total, share.percent)
                        .ok_or_else(|| LedgerError::percentage_mismatch(sum))?,
                });
            }
            splits
        }
        SplitStrategy::Custom { shares } => {
            let actual: Money = shares.iter().map(|share| share.amount).sum();
            if actual != total {
                return Err(LedgerError::split_amount_mismatch(total, actual));
            }
            // Caller is authoritative; amounts pass through unchanged
            return Ok(shares
                .iter()
                .map(|share| Split {
                    member: share.member,
                    amount: share.amount,
                })
                .collect());
        }
    };

    absorb_residual(total, &mut splits);
    debug_assert_eq!(splits.iter().map(|split| split.amount).sum::<Money>(), total);
    Ok(splits)
}

/// Reject empty participant lists and duplicated members
fn validate_participants(participants: &[MemberId]) -> Result<(), LedgerError> {
    if participants.is_empty() {
        return Err(LedgerError::empty_participants());
    }
    let mut seen = HashSet::with_capacity(participants.len());
    for &member in participants {
        if !seen.insert(member) {
            return Err(LedgerError::duplicate_participant(member));
        }
    }
    Ok(())
}

/// Even shares, each rounded half away from zero to whole minor units
fn equal_shares(total: Money, participants: &[MemberId]) -> Vec<Split> {
    let units = total.minor_units();
    let count = participants.len() as i64;
    let share = (2 * units + count) / (2 * count);

    participants
        .iter()
        .map(|&member| Split {
            member,
            amount: Money::from_minor_units(share),
        })
        .collect()
}

/// One percentage share, rounded half away from zero to whole minor units
///
/// Returns `None` only for degenerate percentages whose product overflows
/// the decimal range; the percentage-sum check keeps real inputs well inside.
fn percentage_share(total: Money, percent: Decimal) -> Option<Money> {
    let raw = Decimal::from(total.minor_units())
        .checked_mul(percent)?
        .checked_div(Decimal::from(100))?;
    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .map(Money::from_minor_units)
}

/// Add the rounding residual to the last participant's share
///
/// After this correction the split amounts sum exactly to the total.
fn absorb_residual(total: Money, splits: &mut [Split]) {
    let assigned: Money = splits.iter().map(|split| split.amount).sum();
    let residual = total - assigned;
    if let Some(last) = splits.last_mut() {
        last.amount += residual;
    }
}
