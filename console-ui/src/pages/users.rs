use access_console::cell::{Cell, name_rows};
use access_console::SelectableTable;
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::widgets::data_table::DataTable;
use crate::widgets::empty_state::EmptyState;

#[component]
pub fn Users() -> Element {
    let api = use_context::<ApiClient>();
    let page_size = api.page_size();
    let mut table = use_signal(|| SelectableTable::new(["username"], Vec::new()));
    let mut loaded = use_resource(move || {
        let api = api.clone();
        async move {
            let users = api.users().await?;
            table.set(SelectableTable::new(["username"], name_rows(&users, Cell::user)));
            shared::Result::Ok(users.len())
        }
    });

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Users" }
            }
            div { class: "page-content",
                match &*loaded.read() {
                    None => rsx! {
                        p { class: "loading", "Loading..." }
                    },
                    Some(Err(_)) => rsx! {
                        EmptyState {
                            title: "Could not load users".to_string(),
                            description: "The server did not answer with a user list.".to_string(),
                            failed: true,
                            on_retry: Some(EventHandler::new(move |_| loaded.restart())),
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
