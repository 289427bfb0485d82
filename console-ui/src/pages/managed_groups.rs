use access_console::cell::group_rows;
use access_console::GroupListing;
use dioxus::prelude::*;

use super::GROUP_COLUMNS;
use crate::api::ApiClient;
use crate::widgets::data_table::{listing_view, use_listing_table};

#[component]
pub fn ManagedGroups() -> Element {
    let page_size = use_context::<ApiClient>().page_size();
    let (table, loaded) = use_listing_table(GroupListing::ManagedByMe, GROUP_COLUMNS, group_rows);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Groups I Manage" }
            }
            div { class: "page-content",
                {listing_view(loaded, table, page_size, Vec::new(), "You do not manage any group")}
            }
        }
    }
}
