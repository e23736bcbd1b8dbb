//! Group and member types
//!
//! A group is the unit of cost sharing: a roster of members, a category
//! list, and a one-way lifecycle from active to archived. Member identity is
//! stable within a group; display names are not assumed unique.

use super::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Member identifier, stable within a group
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Group identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member of a cost-sharing group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable identifier within the group
    pub id: MemberId,

    /// Display name, not assumed unique
    pub name: String,

    /// Optional contact detail (email, phone)
    pub contact: Option<String>,

    /// Whether this member administers the group
    pub admin: bool,
}

impl Member {
    /// Create a plain (non-admin) member with no contact detail
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Member {
            id,
            name: name.into(),
            contact: None,
            admin: false,
        }
    }
}

/// Group lifecycle state
///
/// The only transition is `Active` to `Archived`, and it is one-way.
/// Archived groups stop accepting new expenses but still accept settlements,
/// so members can square up debts after the group stops accruing costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    /// Accepting both expenses and settlements
    Active,

    /// Terminal state: expenses rejected, settlements still permitted
    Archived,
}

/// A cost-sharing group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier
    pub id: GroupId,

    /// Member roster; identity source for every balance computation
    pub members: Vec<Member>,

    /// Expense categories configured for the group
    pub categories: Vec<String>,

    /// Lifecycle state
    pub status: GroupStatus,

    /// Optional spending budget
    pub budget: Option<Money>,
}

impl Group {
    /// Create an active group with the given roster and no categories
    pub fn new(id: GroupId, members: Vec<Member>) -> Self {
        Group {
            id,
            members,
            categories: Vec::new(),
            status: GroupStatus::Active,
            budget: None,
        }
    }

    /// Archive the group
    ///
    /// One-way transition; archiving an already-archived group is a no-op.
    pub fn archive(&mut self) {
        self.status = GroupStatus::Archived;
    }

    /// True once the group has been archived
    pub fn is_archived(&self) -> bool {
        self.status == GroupStatus::Archived
    }

    /// Look up a roster member by id
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// True if the id belongs to the roster
    pub fn has_member(&self, id: MemberId) -> bool {
        self.member(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group() -> Group {
        Group::new(
            GroupId(1),
            vec![Member::new(MemberId(1), "Ana"), Member::new(MemberId(2), "Ben")],
        )
    }

    #[test]
    fn test_new_group_is_active() {
        let group = sample_group();
        assert_eq!(group.status, GroupStatus::Active);
        assert!(!group.is_archived());
    }

    #[test]
    fn test_archive_is_one_way() {
        let mut group = sample_group();

        group.archive();
        assert!(group.is_archived());

        // A second archive call changes nothing
        group.archive();
        assert_eq!(group.status, GroupStatus::Archived);
    }

    #[test]
    fn test_member_lookup() {
        let group = sample_group();

        assert_eq!(group.member(MemberId(2)).map(|m| m.name.as_str()), Some("Ben"));
        assert!(group.has_member(MemberId(1)));
        assert!(!group.has_member(MemberId(9)));
    }
}
