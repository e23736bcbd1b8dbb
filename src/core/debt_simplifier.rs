//! Debt simplification
//!
//! Reduces a web of pairwise balances into a short list of real payments
//! that settles everyone. Uses greedy extremal matching: repeatedly settle
//! the largest remaining creditor against the largest remaining debtor for
//! `min` of the two magnitudes, until both sides are exhausted. This is the
//! standard greedy approach to the min-cash-flow problem: it minimizes the
//! number of transactions, not necessarily the total money moved in every
//! tie configuration, and product behavior depends on exactly this rule and
//! its ordering.
//!
//! Ties on magnitude break toward the smallest member id, so repeated runs
//! over unchanged input always produce the same transaction list.

use crate::core::balance_aggregator::BalanceMap;
use crate::types::{MemberId, Money, SimplifiedTransaction};
use std::cmp::Reverse;

/// Reduce a balance map to a minimal list of settling payments
///
/// Members with a zero balance are ignored (already settled). For zero-sum
/// input — which [`compute_balances`](crate::core::compute_balances) always
/// produces — the result has at most `nonzero members − 1` transactions, and
/// applying them all returns every member to zero.
///
/// # Arguments
///
/// * `balances` - Net balance per member; positive is owed, negative owes
///
/// # Returns
///
/// Settling payments, each with a positive amount, in emission order.
pub fn simplify_debts(balances: &BalanceMap) -> Vec<SimplifiedTransaction> {
    let mut creditors: Vec<(MemberId, Money)> = Vec::new();
    let mut debtors: Vec<(MemberId, Money)> = Vec::new();

    // BTreeMap iteration is id-ordered, so these vectors are too
    for (&member, &balance) in balances {
        if balance.is_positive() {
            creditors.push((member, balance));
        } else if balance.is_negative() {
            debtors.push((member, balance.abs()));
        }
    }

    let mut transactions = Vec::new();
    loop {
        let Some(creditor_idx) = index_of_largest(&creditors) else {
            break;
        };
        let Some(debtor_idx) = index_of_largest(&debtors) else {
            break;
        };

        let amount = creditors[creditor_idx].1.min(debtors[debtor_idx].1);
        transactions.push(SimplifiedTransaction {
            from: debtors[debtor_idx].0,
            to: creditors[creditor_idx].0,
            amount,
        });

        creditors[creditor_idx].1 -= amount;
        debtors[debtor_idx].1 -= amount;
        if creditors[creditor_idx].1.is_zero() {
            creditors.remove(creditor_idx);
        }
        if debtors[debtor_idx].1.is_zero() {
            debtors.remove(debtor_idx);
        }
    }

    // Zero-sum input drains both sides together
    debug_assert!(creditors.is_empty() || debtors.is_empty());
    transactions
}

/// Index of the entry with the largest remaining magnitude
///
/// Ties break toward the smallest member id for deterministic output.
fn index_of_largest(entries: &[(MemberId, Money)]) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .max_by_key(|&(_, &(member, amount))| (amount, Reverse(member)))
        .map(|(index, _)| index)
}
