pub mod all_groups;
pub mod group_users;
pub mod managed_groups;
pub mod my_groups;
pub mod pending_actions;
pub mod pending_requests;
pub mod users;

pub use all_groups::AllGroups;
pub use group_users::GroupUsers;
pub use managed_groups::ManagedGroups;
pub use my_groups::MyGroups;
pub use pending_actions::PendingActions;
pub use pending_requests::PendingRequests;
pub use users::Users;

pub(crate) const GROUP_COLUMNS: &[&str] = &["groups", "managed by"];
