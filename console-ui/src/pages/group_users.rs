use access_console::cell::{Cell, name_rows};
use access_console::{Action, SelectableTable};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::widgets::data_table::DataTable;
use crate::widgets::empty_state::EmptyState;

/// Membership page of one group, reached from any group cell.
#[component]
pub fn GroupUsers(groupname: String) -> Element {
    rsx! {
        // Keyed so that moving to another group reloads the members.
        GroupMembers { key: "{groupname}", groupname: groupname.clone() }
    }
}

#[component]
fn GroupMembers(groupname: String) -> Element {
    let api = use_context::<ApiClient>();
    let page_size = api.page_size();
    let mut table = use_signal(|| SelectableTable::new(["members"], Vec::new()));
    let mut loaded = use_resource({
        let api = api.clone();
        let group = groupname.clone();
        move || {
            let api = api.clone();
            let group = group.clone();
            async move {
                let members = api.group_members(&group).await?;
                table.set(SelectableTable::new(["members"], name_rows(&members, Cell::user)));
                shared::Result::Ok(members.len())
            }
        }
    });

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Group {groupname}" }
            }
            div { class: "action-bar",
                for action in [Action::JoinGroup, Action::ExitGroup] {
                    GroupActionButton { action, groupname: groupname.clone() }
                }
            }
            div { class: "page-content",
                match &*loaded.read() {
                    None => rsx! {
                        p { class: "loading", "Loading..." }
                    },
                    Some(Err(_)) => rsx! {
                        EmptyState {
                            title: "Could not load members".to_string(),
                            description: "The group may not exist, or the server did not answer.".to_string(),
                            failed: true,
                            on_retry: Some(EventHandler::new(move |_| loaded.restart())),
                        }
                    },
                    Some(Ok(0)) => rsx! {
                        EmptyState {
                            title: "No members".to_string(),
                            description: "This group has no members yet.".to_string(),
                        }
                    },
                    Some(Ok(_)) => rsx! {
                        DataTable { table, page_size }
                    },
                }
            }
        }
    }
}

#[component]
fn GroupActionButton(action: Action, groupname: String) -> Element {
    let api = use_context::<ApiClient>();

    rsx! {
        button {
            class: "button",
            onclick: move |_| {
                let submitter = api.submitter();
                let group = groupname.clone();
                spawn(async move {
                    submitter.submit_for_group(action, &group).await;
                });
            },
            {action.to_string()}
        }
    }
}
