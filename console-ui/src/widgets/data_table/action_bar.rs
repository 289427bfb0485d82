use access_console::{Action, SelectableTable};
use dioxus::prelude::*;

use crate::api::ApiClient;

/// Selection readout plus one button per action.
#[component]
pub fn ActionBar(mut table: Signal<SelectableTable>, actions: Vec<Action>) -> Element {
    let displayed = table.read().displayed_count();

    rsx! {
        div { class: "action-bar",
            button {
                class: "button secondary",
                onclick: move |_| {
                    table.write().refresh_count();
                },
                "Count selected"
            }
            span { class: "selected-count", "{displayed} selected" }
            for action in actions {
                ActionButton { table, action }
            }
        }
    }
}

#[component]
fn ActionButton(table: Signal<SelectableTable>, action: Action) -> Element {
    let api = use_context::<ApiClient>();

    rsx! {
        button {
            class: "button",
            onclick: move |_| {
                let body = action.build_request(&table.read().selected_rows());
                let submitter = api.submitter();
                spawn(async move {
                    submitter.submit_request(action, body).await;
                });
            },
            "{action}"
        }
    }
}
