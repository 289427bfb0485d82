use access_console::PageHost;
use dioxus::prelude::*;

/// The browser window hosting the console.
#[derive(Clone, Copy, Default)]
pub struct BrowserPage;

impl PageHost for BrowserPage {
    fn reload(&self) {
        _ = document::eval("window.location.reload();");
    }

    fn alert(&self, message: &str) {
        // JSON string literals are valid JS string literals.
        let quoted = serde_json::Value::String(message.to_string());
        _ = document::eval(&format!("window.alert({quoted});"));
    }
}
