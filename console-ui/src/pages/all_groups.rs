use access_console::cell::group_rows;
use access_console::{Action, GroupListing};
use dioxus::prelude::*;

use super::GROUP_COLUMNS;
use crate::api::ApiClient;
use crate::widgets::data_table::{listing_view, use_listing_table};

#[component]
pub fn AllGroups() -> Element {
    let page_size = use_context::<ApiClient>().page_size();
    let (table, loaded) = use_listing_table(GroupListing::All, GROUP_COLUMNS, group_rows);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "All Groups" }
            }
            JoinGroup {}
            div { class: "page-content",
                {listing_view(loaded, table, page_size, vec![Action::RequestAccess], "No groups found")}
            }
        }
    }
}

/// Picker for joining a single group by name.
#[component]
fn JoinGroup() -> Element {
    let api = use_context::<ApiClient>();
    let mut chosen = use_signal(String::new);
    let names = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.group_names().await.unwrap_or_default() }
        }
    });

    rsx! {
        div { class: "join-group",
            select {
                id: "select_groups",
                onchange: move |e| chosen.set(e.value()),
                option { value: "", "Select a group" }
                for name in names.read().clone().unwrap_or_default() {
                    option { value: "{name}", "{name}" }
                }
            }
            button {
                class: "button",
                onclick: move |_| {
                    let group = chosen();
                    let submitter = api.submitter();
                    spawn(async move {
                        submitter.join_group(&group).await;
                    });
                },
                {Action::JoinGroup.to_string()}
            }
        }
    }
}
