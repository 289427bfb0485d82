mod client;
mod page;

pub use client::ApiClient;
pub use page::BrowserPage;
