//! UI-independent core of the access-request console.
//!
//! Everything here runs without a browser: the Dioxus front end binds these
//! types to the page, and tests drive them directly.

pub mod action;
pub mod cell;
pub mod client;
pub mod markup;
pub mod paginator;
pub mod ports;
pub mod sidebar;
pub mod submitter;
pub mod table;

pub use action::Action;
pub use cell::{Cell, Row};
pub use client::HttpConsoleClient;
pub use paginator::{Page, PageLink, paginate};
pub use ports::{ConsoleApi, GroupListing, PageHost};
pub use sidebar::{Sidebar, Visibility};
pub use submitter::{ActionSubmitter, GENERIC_ERROR_MESSAGE, SubmitOutcome};
pub use table::{SelectableTable, SortOrder};
