use dioxus::prelude::*;

/// Placeholder shown instead of a table that has nothing to display.
#[component]
pub fn EmptyState(
    title: String,
    description: String,
    #[props(default)] failed: bool,
    on_retry: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        div { class: if failed { "empty-state failed" } else { "empty-state" },
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            if let Some(handler) = on_retry {
                button {
                    class: "button",
                    onclick: move |e| handler.call(e),
                    "Retry"
                }
            }
        }
    }
}
