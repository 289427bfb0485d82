use access_console::Sidebar as SidebarState;
use dioxus::prelude::*;

mod api;
mod pages;
mod widgets;

use pages::{
    AllGroups, GroupUsers, ManagedGroups, MyGroups, PendingActions, PendingRequests, Users,
};
use widgets::header::Header;
use widgets::sidebar::Sidebar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    MyGroups {},
    #[route("/allGroups")]
    AllGroups {},
    #[route("/my_managed_groups")]
    ManagedGroups {},
    #[route("/pending-requests")]
    PendingRequests {},
    #[route("/pending-actions")]
    PendingActions {},
    #[route("/users")]
    Users {},
    #[route("/group_users?:groupname")]
    GroupUsers { groupname: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api_client = api::ApiClient::new();
    use_context_provider(|| api_client);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Header, sidebar and overlay around every page.
#[component]
fn Shell() -> Element {
    let sidebar = use_signal(SidebarState::default);

    rsx! {
        Header { sidebar }
        div { class: "layout",
            Sidebar { state: sidebar }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
