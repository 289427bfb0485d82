mod action_bar;
mod component;

pub use action_bar::ActionBar;
pub use component::DataTable;

use access_console::{Action, GroupListing, Row, SelectableTable};
use dioxus::prelude::*;
use shared::Result;

use crate::api::ApiClient;
use crate::widgets::empty_state::EmptyState;

/// Loads a group listing into a fresh table.
///
/// The resource resolves to the number of rows loaded; the table signal is
/// replaced wholesale, so a reload also clears the selection.
pub fn use_listing_table(
    listing: GroupListing,
    columns: &'static [&'static str],
    to_rows: fn(&[Vec<String>]) -> Vec<Row>,
) -> (Signal<SelectableTable>, Resource<Result<usize>>) {
    let api = use_context::<ApiClient>();
    let mut table = use_signal(|| SelectableTable::new(columns.iter().copied(), Vec::new()));
    let loaded = use_resource(move || {
        let api = api.clone();
        async move {
            let rows = to_rows(&api.groups(listing).await?);
            let count = rows.len();
            table.set(SelectableTable::new(columns.iter().copied(), rows));
            shared::Result::Ok(count)
        }
    });
    (table, loaded)
}

/// Loading, failure, empty or populated view of a listing table.
pub fn listing_view(
    loaded: Resource<Result<usize>>,
    table: Signal<SelectableTable>,
    page_size: usize,
    actions: Vec<Action>,
    empty_title: &str,
) -> Element {
    let mut retry = loaded;
    match &*loaded.read() {
        None => rsx! {
            p { class: "loading", "Loading..." }
        },
        Some(Err(_)) => rsx! {
            EmptyState {
                title: "Could not load this list".to_string(),
                description: "The server did not answer with a listing. Check the console log for the status.".to_string(),
                failed: true,
                on_retry: Some(EventHandler::new(move |_| retry.restart())),
            }
        },
        Some(Ok(0)) => rsx! {
            EmptyState {
                title: empty_title.to_string(),
                description: "Nothing to show here yet.".to_string(),
            }
        },
        Some(Ok(_)) => rsx! {
            ActionBar { table, actions }
            DataTable { table, page_size }
        },
    }
}
