use serde::{Deserialize, Serialize};

/// Response body of `/getGroups.js?...&encoding=json`.
///
/// Each entry is a tuple whose shape depends on the listing type, e.g.
/// `[group, managed_by]` or `[user, group]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsResponse {
    #[serde(rename = "Groups", default, deserialize_with = "null_as_empty")]
    pub groups: Vec<Vec<String>>,
}

/// Response body of `/getUsers.js?type=all&encoding=json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(rename = "Users", default, deserialize_with = "null_as_empty")]
    pub users: Vec<String>,
}

// The server encodes an empty listing as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
