use access_console::Sidebar as SidebarState;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Sidebar(mut state: Signal<SidebarState>) -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();
    let panel = state().panel.display();
    let overlay = state().overlay.display();

    let nav_class = |active: bool| if active { "nav-item active" } else { "nav-item" };

    rsx! {
        aside { id: "sidebar", class: "sidebar", display: "{panel}",
            div { class: "sidebar-header",
                h2 { "Access Console" }
            }
            nav { class: "sidebar-nav",
                Link {
                    to: Route::MyGroups {},
                    class: nav_class(current_path == "/"),
                    "My Groups"
                }
                Link {
                    to: Route::AllGroups {},
                    class: nav_class(current_path.contains("allGroups")),
                    "All Groups"
                }
                Link {
                    to: Route::ManagedGroups {},
                    class: nav_class(current_path.contains("my_managed_groups")),
                    "Managed Groups"
                }
                Link {
                    to: Route::PendingRequests {},
                    class: nav_class(current_path.contains("pending-requests")),
                    "My Pending Requests"
                }
                Link {
                    to: Route::PendingActions {},
                    class: nav_class(current_path.contains("pending-actions")),
                    "Pending Actions"
                }
                Link {
                    to: Route::Users {},
                    class: nav_class(current_path.contains("users")),
                    "Users"
                }
            }
        }
        div {
            id: "overlay",
            class: "overlay",
            display: "{overlay}",
            onclick: move |_| state.write().close(),
        }
    }
}
