use shared::Result;
use shared_http::api::GroupsRequest;
use tracing::{info, warn};

use crate::action::Action;
use crate::cell::Row;
use crate::ports::{ConsoleApi, PageHost};
use crate::table::SelectableTable;

/// The only message a failed submission ever shows.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred!";

/// Terminal state of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// HTTP 200, the page was reloaded.
    Reloaded,
    /// Anything else, the user was alerted.
    Alerted,
}

/// Sends action requests and settles each one with a reload or an alert.
///
/// Submissions are independent: there is no retry, no de-duplication of
/// overlapping clicks and no rollback of the selection.
pub struct ActionSubmitter<A, H> {
    api: A,
    host: H,
}

impl<A: ConsoleApi, H: PageHost> ActionSubmitter<A, H> {
    pub fn new(api: A, host: H) -> Self {
        Self { api, host }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn submit(&self, action: Action, table: &SelectableTable) -> SubmitOutcome {
        self.submit_rows(action, &table.selected_rows()).await
    }

    pub async fn submit_rows(&self, action: Action, rows: &[&Row]) -> SubmitOutcome {
        self.submit_request(action, action.build_request(rows)).await
    }

    /// Joins the single group picked from the group list.
    pub async fn join_group(&self, group: &str) -> SubmitOutcome {
        self.submit_for_group(Action::JoinGroup, group).await
    }

    pub async fn submit_for_group(&self, action: Action, group: &str) -> SubmitOutcome {
        self.submit_request(action, action.for_group(group)).await
    }

    /// Sends a body built ahead of time; a body that could not be built is
    /// reported like any other failure.
    pub async fn submit_request(
        &self,
        action: Action,
        body: Result<GroupsRequest>,
    ) -> SubmitOutcome {
        match body {
            Ok(body) => self.send(action, &body).await,
            Err(e) => {
                warn!("{} not sent: {}", action, e);
                self.fail()
            }
        }
    }

    pub async fn send(&self, action: Action, body: &GroupsRequest) -> SubmitOutcome {
        match self.api.post_action(action, body).await {
            Ok(200) => {
                info!("{} accepted for {} item(s)", action, body.groups.len());
                self.host.reload();
                SubmitOutcome::Reloaded
            }
            Ok(status) => {
                warn!("{} rejected with status {}", action, status);
                self.fail()
            }
            Err(e) => {
                warn!("{} failed: {}", action, e);
                self.fail()
            }
        }
    }

    fn fail(&self) -> SubmitOutcome {
        self.host.alert(GENERIC_ERROR_MESSAGE);
        SubmitOutcome::Alerted
    }
}
