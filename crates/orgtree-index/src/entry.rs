//! Searchable index entries.
//!
//! An entry denormalizes everything a query needs to score it (unit name and code, or the
//! member's fields) together with the path shown in results and a [`NodeRef`] back to the unit.

use orgtree_roster::{Member, NodeRef};
use serde::{Deserialize, Serialize};

/// What an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// An organizational unit.
    Org,
    /// A member filed under a unit.
    Member,
}

/// One searchable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Whether this entry is a unit or a member.
    pub kind: EntryKind,
    /// Unit names from the top level down to the entry's unit, inclusive.
    pub path: Vec<String>,
    /// Name of the entry's unit.
    pub org_name: String,
    /// Code of the entry's unit.
    pub org_code: String,
    /// The member, for member entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
    /// Reference to the entry's unit in the tree the index was built from.
    pub node: NodeRef,
}

impl SearchEntry {
    /// Returns the entry's path joined for display, e.g. `総務部 > 人事課`.
    pub fn path_text(&self) -> String {
        self.path.join(" > ")
    }

    /// Returns the name shown for this entry: the member name or the unit name.
    pub fn title(&self) -> &str {
        match &self.member {
            Some(member) => &member.name,
            None => &self.org_name,
        }
    }
}
