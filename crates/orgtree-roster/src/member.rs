//! Roster members.

use serde::{Deserialize, Serialize};

use crate::order::position_rank;

/// The unit a member was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Code of the unit.
    pub org_code: String,
    /// Name of the unit.
    pub org_name: String,
    /// Level of the unit (0 for top-level units).
    pub level: usize,
}

/// One employee row of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Employee name.
    pub name: String,
    /// Employee number, kept as text.
    pub employee_number: String,
    /// Position code, kept as text.
    pub position_code: String,
    /// Position title.
    pub position_title: String,
    /// Unit this member is filed under, set once when attached to the tree.
    placement: Option<Placement>,
}

impl Member {
    /// Creates an unattached member.
    pub fn new(
        name: impl Into<String>,
        employee_number: impl Into<String>,
        position_code: impl Into<String>,
        position_title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            employee_number: employee_number.into(),
            position_code: position_code.into(),
            position_title: position_title.into(),
            placement: None,
        }
    }

    /// Returns the unit this member is filed under, if attached.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Records the unit this member is filed under.
    pub(crate) fn place(&mut self, placement: Placement) {
        debug_assert!(self.placement.is_none(), "member placed twice");
        self.placement = Some(placement);
    }

    /// Returns true when the member's position code is at or below `threshold`.
    ///
    /// Members with no usable position code rank as 9999 and are never leaders unless the
    /// threshold reaches that value.
    pub fn is_leader(&self, threshold: u32) -> bool {
        position_rank(&self.position_code) <= i64::from(threshold)
    }
}
