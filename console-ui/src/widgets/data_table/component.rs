use access_console::{Row, SelectableTable, SortOrder, paginate};
use dioxus::prelude::*;

use crate::widgets::pager::Pager;

#[component]
pub fn DataTable(mut table: Signal<SelectableTable>, page_size: usize) -> Element {
    let current_page = use_signal(|| 1usize);

    let (columns, sorted_by, entries) = {
        let t = table.read();
        let entries: Vec<(usize, Row, bool)> = t
            .rows()
            .enumerate()
            .map(|(index, (row, selected))| (index, row.clone(), selected))
            .collect();
        (t.columns().to_vec(), t.sorted_by(), entries)
    };
    let all_selected = table.read().all_selected();
    let page = paginate(&entries, page_size, current_page());
    let visible = page.items.to_vec();
    let links = page.links;

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { class: "select-column",
                        input {
                            r#type: "checkbox",
                            aria_label: "Select all rows",
                            checked: all_selected,
                            onclick: move |_| table.write().toggle_all(),
                        }
                    }
                    for (column, title) in columns.into_iter().enumerate() {
                        th {
                            class: "sortable",
                            onclick: move |_| table.write().sort_toggle(column),
                            "{title}"
                            span { class: "sort-indicator", {sort_indicator(sorted_by, column)} }
                        }
                    }
                }
            }
            tbody {
                for (index, row, selected) in visible {
                    tr {
                        key: "{index}",
                        class: if selected { "selected" } else { "" },
                        onclick: move |_| {
                            table.write().toggle(index);
                        },
                        td { class: "select-column",
                            input {
                                r#type: "checkbox",
                                checked: selected,
                                onclick: move |e: MouseEvent| {
                                    e.stop_propagation();
                                    table.write().toggle(index);
                                },
                            }
                        }
                        for cell in row.cells {
                            td {
                                if let Some(href) = cell.href {
                                    // Following a link must not toggle the row.
                                    span { onclick: move |e: MouseEvent| e.stop_propagation(),
                                        Link { to: href, "{cell.label}" }
                                    }
                                } else {
                                    "{cell.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
        Pager { current: current_page, links }
    }
}

fn sort_indicator(sorted_by: Option<(usize, SortOrder)>, column: usize) -> &'static str {
    match sorted_by {
        Some((c, SortOrder::Ascending)) if c == column => " ▲",
        Some((c, SortOrder::Descending)) if c == column => " ▼",
        _ => "",
    }
}
