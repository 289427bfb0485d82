use access_console::cell::pending_action_rows;
use access_console::{Action, GroupListing};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::widgets::data_table::{listing_view, use_listing_table};

const PENDING_COLUMNS: &[&str] = &["username", "groupname"];

/// Access requests waiting for the signed-in manager to approve or reject.
#[component]
pub fn PendingActions() -> Element {
    let page_size = use_context::<ApiClient>().page_size();
    let (table, loaded) = use_listing_table(
        GroupListing::PendingActions,
        PENDING_COLUMNS,
        pending_action_rows,
    );

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Pending Actions" }
            }
            div { class: "page-content",
                {
                    listing_view(
                        loaded,
                        table,
                        page_size,
                        vec![Action::ApproveRequest, Action::RejectRequest],
                        "Nothing is waiting for your approval",
                    )
                }
            }
        }
    }
}
