use shared::{Error, Result};
use shared_http::api::GroupsRequest;
use strum_macros::{Display, EnumIter};

use crate::cell::Row;

/// Everything a user can submit from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Action {
    #[strum(to_string = "Request access")]
    RequestAccess,
    #[strum(to_string = "Delete requests")]
    DeleteRequests,
    #[strum(to_string = "Exit group")]
    ExitGroup,
    #[strum(to_string = "Reject")]
    RejectRequest,
    #[strum(to_string = "Approve")]
    ApproveRequest,
    #[strum(to_string = "Join group")]
    JoinGroup,
}

impl Action {
    pub fn endpoint(self) -> &'static str {
        match self {
            Action::RequestAccess => "/requestaccess",
            Action::DeleteRequests => "/deleterequests",
            Action::ExitGroup => "/exitgroup",
            Action::RejectRequest => "/reject-request",
            Action::ApproveRequest => "/approve-request",
            Action::JoinGroup => "/join_group",
        }
    }

    /// Whether the payload carries `[user, group]` pairs rather than names.
    pub fn submits_pairs(self) -> bool {
        matches!(self, Action::RejectRequest | Action::ApproveRequest)
    }

    /// Builds the request body from the selected rows.
    ///
    /// Name actions read column 0; pair actions read columns 0 and 1. An
    /// empty selection produces an empty list, except for
    /// [`Action::JoinGroup`] which needs exactly one row.
    pub fn build_request(self, rows: &[&Row]) -> Result<GroupsRequest> {
        if self == Action::JoinGroup && rows.len() != 1 {
            return Err(Error::InvalidSelection(format!(
                "join group needs exactly one group, got {}",
                rows.len()
            )));
        }

        if self.submits_pairs() {
            Ok(GroupsRequest::pairs(
                rows.iter()
                    .map(|r| (r.identifier(0).to_string(), r.identifier(1).to_string()))
                    .collect(),
            ))
        } else {
            Ok(GroupsRequest::names(
                rows.iter().map(|r| r.identifier(0).to_string()).collect(),
            ))
        }
    }

    /// Body naming one group picked outside a table, e.g. joining or
    /// leaving the group whose membership page is open.
    pub fn for_group(self, group: &str) -> Result<GroupsRequest> {
        if self.submits_pairs() {
            return Err(Error::InvalidSelection(format!(
                "{} needs [user, group] pairs",
                self
            )));
        }
        let group = group.trim();
        if group.is_empty() {
            return Err(Error::InvalidSelection("no group chosen".to_string()));
        }
        Ok(GroupsRequest::names(vec![group.to_string()]))
    }
}
