use async_trait::async_trait;
use shared::Result;
use shared_http::api::GroupsRequest;

use crate::action::Action;

// Ports are the seams between the console logic and its host: the HTTP
// server on one side, the browser page on the other.

/// Which listing `/getGroups.js` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupListing {
    /// Groups the caller belongs to, as `[group, managed_by]`.
    Mine,
    /// Every group with its manager, as `[group, managed_by]`.
    All,
    /// Groups the caller has asked to join.
    PendingRequests,
    /// One entry holding every group name.
    AllNoManager,
    /// Requests awaiting the caller's decision, as `[user, group]`.
    PendingActions,
    /// Groups managed by a group the caller belongs to.
    ManagedByMe,
}

impl GroupListing {
    /// Value of the `type` query parameter, `None` for the server default.
    pub fn query_type(self) -> Option<&'static str> {
        match self {
            GroupListing::Mine => None,
            GroupListing::All => Some("all"),
            GroupListing::PendingRequests => Some("pendingRequests"),
            GroupListing::AllNoManager => Some("allNoManager"),
            GroupListing::PendingActions => Some("pendingActions"),
            GroupListing::ManagedByMe => Some("managedByMe"),
        }
    }
}

/// Port for the access-request server
#[async_trait(?Send)]
pub trait ConsoleApi {
    /// POSTs `body` to the action's endpoint and returns the HTTP status.
    async fn post_action(&self, action: Action, body: &GroupsRequest) -> Result<u16>;

    async fn fetch_groups(&self, listing: GroupListing) -> Result<Vec<Vec<String>>>;

    async fn fetch_users(&self) -> Result<Vec<String>>;

    /// Members of one group, for the group membership table.
    async fn fetch_group_members(&self, group: &str) -> Result<Vec<String>>;

    /// Number of requests awaiting the caller, shown as a badge.
    async fn pending_action_count(&self) -> Result<usize> {
        Ok(self.fetch_groups(GroupListing::PendingActions).await?.len())
    }
}

/// Port for the page the console is rendered in
pub trait PageHost {
    fn reload(&self);
    fn alert(&self, message: &str);
}

impl<T: PageHost + ?Sized> PageHost for &T {
    fn reload(&self) {
        (**self).reload()
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}
