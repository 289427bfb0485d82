use access_console::PageLink;
use dioxus::prelude::*;

#[component]
pub fn Pager(mut current: Signal<usize>, links: Vec<PageLink>) -> Element {
    rsx! {
        div { class: "pager",
            for link in links {
                match link {
                    PageLink::Previous(target) => rsx! {
                        button {
                            class: "page-link",
                            disabled: target.is_none(),
                            onclick: move |_| {
                                if let Some(page) = target {
                                    current.set(page);
                                }
                            },
                            "«"
                        }
                    },
                    PageLink::Number { page, active } => rsx! {
                        button {
                            class: if active { "page-link active" } else { "page-link" },
                            onclick: move |_| current.set(page),
                            "{page}"
                        }
                    },
                    PageLink::Next(target) => rsx! {
                        button {
                            class: "page-link",
                            disabled: target.is_none(),
                            onclick: move |_| {
                                if let Some(page) = target {
                                    current.set(page);
                                }
                            },
                            "»"
                        }
                    },
                }
            }
        }
    }
}
