pub mod requests;
pub mod responses;

pub use requests::{GroupSelection, GroupsRequest};
pub use responses::{GroupsResponse, UsersResponse};
