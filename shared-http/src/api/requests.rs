use serde::{Deserialize, Serialize};

/// Identifiers carried by an action request.
///
/// Serialized untagged: names become `["g1", "g2"]` and pairs become
/// `[["u1", "g1"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupSelection {
    Names(Vec<String>),
    Pairs(Vec<(String, String)>),
}

impl GroupSelection {
    pub fn len(&self) -> usize {
        match self {
            GroupSelection::Names(names) => names.len(),
            GroupSelection::Pairs(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Body of every action POST: `{"groups": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsRequest {
    pub groups: GroupSelection,
}

impl GroupsRequest {
    pub fn names(names: Vec<String>) -> Self {
        Self {
            groups: GroupSelection::Names(names),
        }
    }

    pub fn pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            groups: GroupSelection::Pairs(pairs),
        }
    }
}
