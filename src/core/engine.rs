//! Ledger orchestration
//!
//! This module provides the LedgerEngine that coordinates the split
//! calculator, the expense store, and the settlement ledger for one group.
//!
//! The engine enforces business rules such as:
//! - Lifecycle gating (archived groups reject new expenses)
//! - Roster validation (payers, participants, and settlement parties must
//!   belong to the group)
//! - Full validation before any write, so a failed call never leaves a
//!   partially-split expense or malformed settlement behind
//!
//! The group is an explicit constructor argument: the engine carries no
//! ambient "current group" state, and every derived value (balances, the
//! payment plan) is recomputed from the full record set on each read.

use crate::core::balance_aggregator::{compute_balances, BalanceMap};
use crate::core::debt_simplifier::simplify_debts;
use crate::core::expense_store::ExpenseStore;
use crate::core::settlement_ledger::{authorize_expense, SettlementLedger};
use crate::core::split_calculator::compute_split;
use crate::types::{
    Expense, ExpenseDraft, ExpenseId, Group, LedgerError, MemberId, Settlement, SettlementDraft,
    SettlementId, SimplifiedTransaction,
};

/// Per-group ledger engine
///
/// Owns the group's expense and settlement records and exposes the derived
/// views (balances, simplified payment plan) as pure recomputations.
pub struct LedgerEngine {
    group: Group,
    expenses: ExpenseStore,
    settlements: SettlementLedger,
}

impl LedgerEngine {
    /// Create an engine for the given group with no records
    pub fn new(group: Group) -> Self {
        LedgerEngine {
            group,
            expenses: ExpenseStore::new(),
            settlements: SettlementLedger::new(),
        }
    }

    /// The group this engine operates on
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Archive the group (one-way)
    ///
    /// New expenses are rejected from this point on; settlements and
    /// balance computation remain available.
    pub fn archive_group(&mut self) {
        self.group.archive();
    }

    /// Validate and persist a new expense
    ///
    /// Computes the expense's splits from its strategy; the stored splits
    /// sum exactly to the expense amount.
    ///
    /// # Arguments
    ///
    /// * `draft` - The expense input record
    ///
    /// # Returns
    ///
    /// The persisted expense with its assigned id and computed splits.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the group is archived (`GroupArchived`)
    /// - the payer or a participant is not on the roster (`UnknownMember`)
    /// - the split computation rejects the input (`InvalidAmount`,
    ///   `InvalidParticipants`, `PercentageMismatch`, `SplitAmountMismatch`)
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<&Expense, LedgerError> {
        authorize_expense(&self.group)?;
        self.require_member(draft.payer)?;
        for member in draft.strategy.participants() {
            self.require_member(member)?;
        }

        let splits = compute_split(draft.amount, &draft.strategy)?;

        let id = self.expenses.next_id();
        Ok(self.expenses.insert(Expense {
            id,
            group: self.group.id,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
            payer: draft.payer,
            strategy: draft.strategy,
            splits,
        }))
    }

    /// Hard-delete an expense
    ///
    /// The next balance recomputation reflects the removal.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        self.expenses.remove(id)
    }

    /// Validate and append a settlement
    ///
    /// Permitted even when the group is archived.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either party is not on the roster (`UnknownMember`)
    /// - both parties are the same member (`SameMemberSettlement`)
    /// - the amount is not positive (`InvalidAmount`)
    pub fn record_settlement(
        &mut self,
        draft: SettlementDraft,
    ) -> Result<&Settlement, LedgerError> {
        self.require_member(draft.from)?;
        self.require_member(draft.to)?;
        self.settlements.record_settlement(self.group.id, draft)
    }

    /// Hard-delete a settlement
    pub fn remove_settlement(&mut self, id: SettlementId) -> Option<Settlement> {
        self.settlements.remove(id)
    }

    /// All expenses, sorted by id
    pub fn expenses(&self) -> Vec<&Expense> {
        self.expenses.all()
    }

    /// All settlements, in append order
    pub fn settlements(&self) -> &[Settlement] {
        self.settlements.all()
    }

    /// Net balance per member, recomputed from the full record set
    pub fn balances(&self) -> BalanceMap {
        compute_balances(
            self.expenses.all(),
            self.settlements.all(),
            &self.group.members,
        )
    }

    /// Minimal payment plan settling the current balances
    pub fn settlement_plan(&self) -> Vec<SimplifiedTransaction> {
        simplify_debts(&self.balances())
    }

    /// Reject members outside the group roster
    fn require_member(&self, member: MemberId) -> Result<(), LedgerError> {
        if !self.group.has_member(member) {
            return Err(LedgerError::unknown_member(member));
        }
        Ok(())
    }
}
