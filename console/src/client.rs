use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::config::Config;
use shared::{Error, Result};
use shared_http::api::{GroupsRequest, GroupsResponse, UsersResponse};
use tracing::{debug, warn};

use crate::action::Action;
use crate::ports::{ConsoleApi, GroupListing};

pub const CSRF_HEADER: &str = "X-CSRF-Token";
const GET_GROUPS_PATH: &str = "/getGroups.js";
const GET_USERS_PATH: &str = "/getUsers.js";

/// [`ConsoleApi`] over HTTP.
#[derive(Clone)]
pub struct HttpConsoleClient {
    client: Client,
    config: Config,
}

impl HttpConsoleClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.http_server, path)
    }

    async fn get_listing<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(path);
        let mut query = params.to_vec();
        query.push(("encoding", "json"));
        debug!("Fetching listing from {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                warn!("Listing request to {} failed: {}", url, e);
                Error::Transport(e.to_string())
            })?;

        if response.status() != StatusCode::OK {
            warn!("Status error: {}", response.status().as_u16());
            return Err(Error::UnexpectedStatus(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ConsoleApi for HttpConsoleClient {
    async fn post_action(&self, action: Action, body: &GroupsRequest) -> Result<u16> {
        let url = self.url(action.endpoint());
        debug!("Submitting {} item(s) to {}", body.groups.len(), url);

        // `.json()` sets `Content-Type: application/json`.
        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.config.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} request failed: {}", action, e);
            Error::Transport(e.to_string())
        })?;
        Ok(response.status().as_u16())
    }

    async fn fetch_groups(&self, listing: GroupListing) -> Result<Vec<Vec<String>>> {
        let params: Vec<(&str, &str)> = listing
            .query_type()
            .map(|t| ("type", t))
            .into_iter()
            .collect();
        let response: GroupsResponse = self.get_listing(GET_GROUPS_PATH, &params).await?;
        Ok(response.groups)
    }

    async fn fetch_users(&self) -> Result<Vec<String>> {
        let response: UsersResponse = self.get_listing(GET_USERS_PATH, &[("type", "all")]).await?;
        Ok(response.users)
    }

    async fn fetch_group_members(&self, group: &str) -> Result<Vec<String>> {
        let response: UsersResponse = self
            .get_listing(GET_USERS_PATH, &[("type", "group"), ("groupName", group)])
            .await?;
        Ok(response.users)
    }
}
