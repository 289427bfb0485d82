use access_console::{ActionSubmitter, ConsoleApi, GroupListing, HttpConsoleClient};
use dioxus::prelude::{info, warn};
use shared::Result;
use shared::config::Config;

use super::BrowserPage;

#[derive(Clone)]
pub struct ApiClient {
    http: HttpConsoleClient,
}

impl ApiClient {
    pub fn new() -> Self {
        let config = Config::from_env();
        info!("Using access server at {}", config.http_server);
        Self {
            http: HttpConsoleClient::new(config),
        }
    }
}

impl ApiClient {
    pub fn page_size(&self) -> usize {
        self.http.config().page_size
    }

    pub fn submitter(&self) -> ActionSubmitter<HttpConsoleClient, BrowserPage> {
        ActionSubmitter::new(self.http.clone(), BrowserPage)
    }

    pub async fn groups(&self, listing: GroupListing) -> Result<Vec<Vec<String>>> {
        self.http.fetch_groups(listing).await.inspect_err(|e| {
            warn!("Loading {:?} groups failed: {}", listing, e);
        })
    }

    /// Every group name, for the join-group picker.
    pub async fn group_names(&self) -> Result<Vec<String>> {
        let mut listing = self.groups(GroupListing::AllNoManager).await?;
        Ok(if listing.is_empty() {
            Vec::new()
        } else {
            listing.swap_remove(0)
        })
    }

    pub async fn users(&self) -> Result<Vec<String>> {
        self.http.fetch_users().await.inspect_err(|e| {
            warn!("Loading users failed: {}", e);
        })
    }

    pub async fn group_members(&self, group: &str) -> Result<Vec<String>> {
        self.http.fetch_group_members(group).await.inspect_err(|e| {
            warn!("Loading members of {} failed: {}", group, e);
        })
    }

    pub async fn pending_action_count(&self) -> Result<usize> {
        self.http.pending_action_count().await
    }
}
