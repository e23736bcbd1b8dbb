//! Balance aggregation
//!
//! Folds every expense and settlement of a group into one net balance per
//! member: positive means "is owed", negative means "owes". This is a pure
//! function over a full snapshot. There is no cached or incremental balance
//! state anywhere; every read recomputes from the current record set, so the
//! result is idempotent and immune to drift from missed partial updates.
//!
//! The fundamental double-entry invariant holds on every output: the
//! balances sum to zero, since each unit of debt has a matching unit of
//! credit.

use crate::types::{Expense, Member, MemberId, Money, Settlement};
use std::collections::BTreeMap;

/// Net balance per member
///
/// Keyed by member id in a `BTreeMap` so iteration order is stable; the debt
/// simplifier's deterministic tie-break relies on this ordering.
pub type BalanceMap = BTreeMap<MemberId, Money>;

/// Compute net balances from a full expense and settlement snapshot
///
/// Every roster member appears in the result, including members with a zero
/// balance. For each expense the payer is credited the full amount and every
/// split participant is debited their share, so a payer who also
/// participates nets only the portion paid on others' behalf. A settlement
/// credits the paying member and debits the receiving member: paying down
/// what you owe symmetrically reduces what the other side is owed.
///
/// # Arguments
///
/// * `expenses` - All expenses of the group
/// * `settlements` - All settlements of the group
/// * `members` - The group roster
///
/// # Returns
///
/// A balance map whose values sum to zero.
pub fn compute_balances<'a, 'b>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    settlements: impl IntoIterator<Item = &'b Settlement>,
    members: &[Member],
) -> BalanceMap {
    let mut balances: BalanceMap = members
        .iter()
        .map(|member| (member.id, Money::ZERO))
        .collect();

    for expense in expenses {
        *balances.entry(expense.payer).or_insert(Money::ZERO) += expense.amount;
        for split in &expense.splits {
            *balances.entry(split.member).or_insert(Money::ZERO) -= split.amount;
        }
    }

    for settlement in settlements {
        *balances.entry(settlement.from).or_insert(Money::ZERO) += settlement.amount;
        *balances.entry(settlement.to).or_insert(Money::ZERO) -= settlement.amount;
    }

    debug_assert_eq!(balances.values().copied().sum::<Money>(), Money::ZERO);
    balances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::split_calculator::compute_split;
    use crate::types::{
        Expense, ExpenseId, GroupId, Settlement, SettlementId, Split, SplitStrategy,
    };
    use chrono::NaiveDate;
    use rstest::rstest;

    fn roster(ids: &[u32]) -> Vec<Member> {
        ids.iter()
            .map(|&id| Member::new(MemberId(id), format!("member-{id}")))
            .collect()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    fn expense(id: u64, payer: u32, total_units: i64, participants: &[u32]) -> Expense {
        let strategy = SplitStrategy::Equal {
            participants: participants.iter().copied().map(MemberId).collect(),
        };
        let amount = Money::from_minor_units(total_units);
        let splits = compute_split(amount, &strategy).unwrap();
        Expense {
            id: ExpenseId(id),
            group: GroupId(1),
            amount,
            category: "groceries".to_string(),
            description: String::new(),
            date: date(),
            payer: MemberId(payer),
            strategy,
            splits,
        }
    }

    fn settlement(id: u64, from: u32, to: u32, units: i64) -> Settlement {
        Settlement {
            id: SettlementId(id),
            group: GroupId(1),
            from: MemberId(from),
            to: MemberId(to),
            amount: Money::from_minor_units(units),
            date: date(),
            notes: None,
        }
    }

    fn units(balances: &BalanceMap, id: u32) -> i64 {
        balances[&MemberId(id)].minor_units()
    }

    #[test]
    fn test_three_way_equal_expense() {
        // 300 paid by member 1, split equally with 2 and 3
        let balances = compute_balances(
            &[expense(1, 1, 30000, &[1, 2, 3])],
            &[],
            &roster(&[1, 2, 3]),
        );

        assert_eq!(units(&balances, 1), 20000);
        assert_eq!(units(&balances, 2), -10000);
        assert_eq!(units(&balances, 3), -10000);
    }

    #[test]
    fn test_payer_outside_participants_is_owed_everything() {
        let balances = compute_balances(
            &[expense(1, 1, 9000, &[2, 3])],
            &[],
            &roster(&[1, 2, 3]),
        );

        assert_eq!(units(&balances, 1), 9000);
        assert_eq!(units(&balances, 2), -4500);
        assert_eq!(units(&balances, 3), -4500);
    }

    #[test]
    fn test_settlement_transfers_credit() {
        // Member 2 owes 100 after the expense, then settles it in full
        let balances = compute_balances(
            &[expense(1, 1, 20000, &[1, 2])],
            &[settlement(1, 2, 1, 10000)],
            &roster(&[1, 2]),
        );

        assert_eq!(units(&balances, 1), 0);
        assert_eq!(units(&balances, 2), 0);
    }

    #[test]
    fn test_partial_settlement_leaves_remainder() {
        let balances = compute_balances(
            &[expense(1, 1, 20000, &[1, 2])],
            &[settlement(1, 2, 1, 4000)],
            &roster(&[1, 2]),
        );

        assert_eq!(units(&balances, 1), 6000);
        assert_eq!(units(&balances, 2), -6000);
    }

    #[test]
    fn test_roster_members_without_records_have_zero_balance() {
        let balances = compute_balances(
            &[expense(1, 1, 5000, &[1, 2])],
            &[],
            &roster(&[1, 2, 3]),
        );

        assert_eq!(units(&balances, 3), 0);
        assert_eq!(balances.len(), 3);
    }

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let balances = compute_balances(&[], &[], &roster(&[1, 2]));

        assert_eq!(balances.len(), 2);
        assert!(balances.values().all(|balance| balance.is_zero()));
    }

    #[rstest]
    #[case::single_expense(vec![expense(1, 1, 30000, &[1, 2, 3])], vec![])]
    #[case::uneven_amounts(
        vec![expense(1, 1, 10001, &[1, 2, 3]), expense(2, 2, 777, &[2, 3])],
        vec![settlement(1, 3, 1, 250)]
    )]
    #[case::settlements_only(vec![], vec![settlement(1, 1, 2, 5000), settlement(2, 2, 3, 100)])]
    #[case::dense_history(
        vec![
            expense(1, 1, 12345, &[1, 2, 3, 4]),
            expense(2, 2, 99999, &[2, 4]),
            expense(3, 3, 1, &[1, 2, 3, 4]),
            expense(4, 4, 50000, &[1, 3]),
        ],
        vec![settlement(1, 2, 1, 3000), settlement(2, 4, 3, 1)]
    )]
    fn test_balances_always_sum_to_zero(
        #[case] expenses: Vec<Expense>,
        #[case] settlements: Vec<Settlement>,
    ) {
        let balances = compute_balances(&expenses, &settlements, &roster(&[1, 2, 3, 4]));
        assert_eq!(balances.values().copied().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let expenses = vec![expense(1, 1, 10001, &[1, 2, 3]), expense(2, 3, 4242, &[2, 3])];
        let settlements = vec![settlement(1, 2, 1, 1000)];
        let members = roster(&[1, 2, 3]);

        let first = compute_balances(&expenses, &settlements, &members);
        let second = compute_balances(&expenses, &settlements, &members);

        assert_eq!(first, second);
    }
}
