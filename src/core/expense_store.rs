//! Expense storage
//!
//! In-memory store of a group's expense records. Records are append-only:
//! created once, never mutated in place. The only removal is a hard delete,
//! and the next balance recomputation reflects the absence automatically
//! because balances are always derived from the full current record set.

use crate::types::{Expense, ExpenseId};
use std::collections::HashMap;

/// Store of persisted expenses, keyed by expense id
///
/// Assigns monotonically increasing ids on insert. Listing is sorted by id
/// for deterministic output.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    /// Map of expense id to expense record
    expenses: HashMap<ExpenseId, Expense>,

    /// Next id to assign
    next_id: u64,
}

impl ExpenseStore {
    /// Create a new empty expense store
    pub fn new() -> Self {
        ExpenseStore {
            expenses: HashMap::new(),
            next_id: 1,
        }
    }

    /// Reserve the next expense id
    ///
    /// The caller builds the record with the reserved id and inserts it via
    /// [`insert`](Self::insert).
    pub fn next_id(&mut self) -> ExpenseId {
        let id = ExpenseId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a fully-built expense record
    ///
    /// First occurrence wins: inserting a record under an id that already
    /// exists leaves the stored record unchanged.
    pub fn insert(&mut self, expense: Expense) -> &Expense {
        self.expenses.entry(expense.id).or_insert(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.get(&id)
    }

    /// Hard-delete an expense, returning the removed record
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        self.expenses.remove(&id)
    }

    /// All expenses, sorted by id
    pub fn all(&self) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.expenses.values().collect();
        expenses.sort_by_key(|expense| expense.id);
        expenses
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// True when no expenses are stored
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GroupId, MemberId, Money, SplitStrategy};
    use chrono::NaiveDate;

    fn sample_expense(id: ExpenseId) -> Expense {
        Expense {
            id,
            group: GroupId(1),
            amount: Money::from_minor_units(1000),
            category: "utilities".to_string(),
            description: "electricity".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            payer: MemberId(1),
            strategy: SplitStrategy::Equal {
                participants: vec![MemberId(1)],
            },
            splits: vec![],
        }
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut store = ExpenseStore::new();

        assert_eq!(store.next_id(), ExpenseId(1));
        assert_eq!(store.next_id(), ExpenseId(2));
        assert_eq!(store.next_id(), ExpenseId(3));
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = ExpenseStore::new();
        let id = store.next_id();
        store.insert(sample_expense(id));

        assert_eq!(store.get(id).map(|e| e.id), Some(id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut store = ExpenseStore::new();
        let id = store.next_id();
        store.insert(sample_expense(id));

        let mut duplicate = sample_expense(id);
        duplicate.description = "water".to_string();
        store.insert(duplicate);

        assert_eq!(store.get(id).unwrap().description, "electricity");
    }

    #[test]
    fn test_remove_is_a_hard_delete() {
        let mut store = ExpenseStore::new();
        let id = store.next_id();
        store.insert(sample_expense(id));

        let removed = store.remove(id);
        assert_eq!(removed.map(|e| e.id), Some(id));
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_all_is_sorted_by_id() {
        let mut store = ExpenseStore::new();
        let ids: Vec<ExpenseId> = (0..3).map(|_| store.next_id()).collect();
        // Insert out of order
        store.insert(sample_expense(ids[2]));
        store.insert(sample_expense(ids[0]));
        store.insert(sample_expense(ids[1]));

        let listed: Vec<ExpenseId> = store.all().iter().map(|e| e.id).collect();
        assert_eq!(listed, ids);
    }
}
