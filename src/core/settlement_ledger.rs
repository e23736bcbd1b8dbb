//! Settlement ledger and the group lifecycle gate
//!
//! The ledger validates and appends settlement records. Settlements are
//! always permitted, even for an archived group: members must still be able
//! to square up debts after the group stops accruing costs. Expense
//! creation, by contrast, is gated on the group lifecycle via
//! [`authorize_expense`], which lives beside the ledger because the two
//! rules form one state machine: `active → archived` is terminal, archived
//! blocks new expenses, permits new settlements, and never blocks balance or
//! debt computation.

use crate::types::{
    Group, GroupId, LedgerError, MemberId, Settlement, SettlementDraft, SettlementId,
};

/// Check whether a group currently accepts new expenses
///
/// # Errors
///
/// Returns `GroupArchived` once the group's lifecycle state is archived.
pub fn authorize_expense(group: &Group) -> Result<(), LedgerError> {
    if group.is_archived() {
        return Err(LedgerError::group_archived(group.id));
    }
    Ok(())
}

/// Append-only store of a group's settlement records
///
/// Validates fully before any write; a rejected settlement leaves the ledger
/// untouched. No update or soft-delete exists: the only removal is a hard
/// delete, and the next balance recomputation reflects the absence.
#[derive(Debug, Default)]
pub struct SettlementLedger {
    /// Settlement records in append order
    settlements: Vec<Settlement>,

    /// Next id to assign
    next_id: u64,
}

impl SettlementLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        SettlementLedger {
            settlements: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate and append a settlement record
    ///
    /// Permitted regardless of the group's lifecycle state.
    ///
    /// # Arguments
    ///
    /// * `group` - The owning group's id
    /// * `draft` - The settlement input record
    ///
    /// # Returns
    ///
    /// The appended record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the paying and receiving member are the same (`SameMemberSettlement`)
    /// - the amount is zero or negative (`InvalidAmount`)
    pub fn record_settlement(
        &mut self,
        group: GroupId,
        draft: SettlementDraft,
    ) -> Result<&Settlement, LedgerError> {
        if draft.from == draft.to {
            return Err(LedgerError::same_member_settlement(draft.from));
        }
        if !draft.amount.is_positive() {
            return Err(LedgerError::invalid_amount(draft.amount));
        }

        let id = SettlementId(self.next_id);
        self.next_id += 1;
        self.settlements.push(Settlement {
            id,
            group,
            from: draft.from,
            to: draft.to,
            amount: draft.amount,
            date: draft.date,
            notes: draft.notes,
        });

        // Just pushed, so the last element exists
        Ok(&self.settlements[self.settlements.len() - 1])
    }

    /// Hard-delete a settlement, returning the removed record
    pub fn remove(&mut self, id: SettlementId) -> Option<Settlement> {
        let index = self
            .settlements
            .iter()
            .position(|settlement| settlement.id == id)?;
        Some(self.settlements.remove(index))
    }

    /// All settlements, in append order
    pub fn all(&self) -> &[Settlement] {
        &self.settlements
    }

    /// Settlements involving the given member, in append order
    pub fn involving(&self, member: MemberId) -> Vec<&Settlement> {
        self.settlements
            .iter()
            .filter(|settlement| settlement.from == member || settlement.to == member)
            .collect()
    }
}
