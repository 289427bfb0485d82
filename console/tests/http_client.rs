use access_console::{Action, ActionSubmitter, ConsoleApi, GroupListing, HttpConsoleClient, PageHost, SubmitOutcome};
use serde_json::json;
use shared::Error;
use shared::config::Config;
use shared_http::api::GroupsRequest;
use std::cell::Cell;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, csrf_token: Option<&str>) -> HttpConsoleClient {
    HttpConsoleClient::new(Config {
        http_server: server.uri(),
        page_size: Config::DEFAULT_PAGE_SIZE,
        csrf_token: csrf_token.map(str::to_string),
    })
}

#[derive(Default)]
struct CountingHost {
    reloads: Cell<usize>,
    alerts: Cell<usize>,
}

impl PageHost for CountingHost {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn alert(&self, _message: &str) {
        self.alerts.set(self.alerts.get() + 1);
    }
}

#[tokio::test]
async fn test_post_action_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/requestaccess"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"groups": ["g1", "g2"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let body = GroupsRequest::names(vec!["g1".into(), "g2".into()]);
    let status = client.post_action(Action::RequestAccess, &body).await.unwrap();
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_post_action_sends_csrf_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/approve-request"))
        .and(header("X-CSRF-Token", "secret"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("secret"));
    let body = GroupsRequest::pairs(vec![("u1".into(), "g1".into())]);
    assert_eq!(client.post_action(Action::ApproveRequest, &body).await.unwrap(), 200);
}

#[tokio::test]
async fn test_submitter_reloads_on_200_and_alerts_on_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exitgroup"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/deleterequests"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let host = CountingHost::default();
    let submitter = ActionSubmitter::new(client_for(&server, None), &host);

    assert_eq!(submitter.submit_rows(Action::ExitGroup, &[]).await, SubmitOutcome::Reloaded);
    assert_eq!((host.reloads.get(), host.alerts.get()), (1, 0));

    assert_eq!(
        submitter.submit_rows(Action::DeleteRequests, &[]).await,
        SubmitOutcome::Alerted
    );
    assert_eq!((host.reloads.get(), host.alerts.get()), (1, 1));
}

#[tokio::test]
async fn test_join_group_posts_single_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/join_group"))
        .and(body_json(json!({"groups": ["devs"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let host = CountingHost::default();
    let submitter = ActionSubmitter::new(client_for(&server, None), &host);
    assert_eq!(submitter.join_group("devs").await, SubmitOutcome::Reloaded);
}

#[tokio::test]
async fn test_fetch_pending_actions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getGroups.js"))
        .and(query_param("type", "pendingActions"))
        .and(query_param("encoding", "json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Groups": [["alice", "devs"], ["bob", "ops"]]})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let groups = client.fetch_groups(GroupListing::PendingActions).await.unwrap();
    assert_eq!(groups[1], vec!["bob", "ops"]);
    assert_eq!(client.pending_action_count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_fetch_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getUsers.js"))
        .and(query_param("type", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Users": ["alice", "bob"]})))
        .mount(&server)
        .await;

    let users = client_for(&server, None).fetch_users().await.unwrap();
    assert_eq!(users, vec!["alice", "bob"]);
}

#[tokio::test]
async fn test_own_groups_use_server_default_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getGroups.js"))
        .and(query_param_is_missing("type"))
        .and(query_param("encoding", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Groups": [["devs", "admins"]]})))
        .expect(1)
        .mount(&server)
        .await;

    let groups = client_for(&server, None).fetch_groups(GroupListing::Mine).await.unwrap();
    assert_eq!(groups, vec![vec!["devs", "admins"]]);
}

#[tokio::test]
async fn test_fetch_group_members() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getUsers.js"))
        .and(query_param("type", "group"))
        .and(query_param("groupName", "devs"))
        .and(query_param("encoding", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Users": ["alice", "carol"]})))
        .expect(1)
        .mount(&server)
        .await;

    let members = client_for(&server, None).fetch_group_members("devs").await.unwrap();
    assert_eq!(members, vec!["alice", "carol"]);
}

#[tokio::test]
async fn test_listing_non_200_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getGroups.js"))
        .and(query_param_is_missing("type"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = client_for(&server, None).fetch_groups(GroupListing::Mine).await;
    assert!(matches!(result, Err(Error::UnexpectedStatus(403))));
}

#[tokio::test]
async fn test_listing_with_bad_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getGroups.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string("var groupnames = [];"))
        .mount(&server)
        .await;

    let result = client_for(&server, None).fetch_groups(GroupListing::All).await;
    assert!(matches!(result, Err(Error::Decode(_))));
}
