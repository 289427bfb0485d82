use access_console::Sidebar as SidebarState;
use dioxus::prelude::*;

use crate::Route;
use crate::api::ApiClient;

#[component]
pub fn Header(mut sidebar: Signal<SidebarState>) -> Element {
    let api = use_context::<ApiClient>();
    let pending = use_resource(move || {
        let api = api.clone();
        async move { api.pending_action_count().await }
    });

    rsx! {
        header { class: "app-header",
            button {
                id: "menu-button",
                class: "menu-button",
                aria_label: "Toggle navigation",
                onclick: move |_| sidebar.write().open(),
                "☰"
            }
            h1 { class: "header-title", "Access Request Console" }
            div { class: "header-actions",
                Link { to: Route::PendingActions {}, class: "pending-link",
                    "Pending actions"
                    match &*pending.read() {
                        Some(Ok(count)) if *count > 0 => rsx! {
                            span { class: "badge", "{count}" }
                        },
                        _ => rsx! {},
                    }
                }
            }
        }
    }
}
