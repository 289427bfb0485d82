use access_console::cell::group_rows;
use access_console::{Action, GroupListing};
use dioxus::prelude::*;

use super::GROUP_COLUMNS;
use crate::api::ApiClient;
use crate::widgets::data_table::{listing_view, use_listing_table};

/// Requests the user has made that are still waiting for a manager.
#[component]
pub fn PendingRequests() -> Element {
    let page_size = use_context::<ApiClient>().page_size();
    let (table, loaded) =
        use_listing_table(GroupListing::PendingRequests, GROUP_COLUMNS, group_rows);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "My Pending Requests" }
            }
            div { class: "page-content",
                {listing_view(loaded, table, page_size, vec![Action::DeleteRequests], "No pending requests")}
            }
        }
    }
}
