//! Chat-specific UI components.
//!
//! These components render one widget instance. All interaction goes
//! through HTMX requests against the `/widget/{id}` routes, each of which
//! answers with a re-rendered [`ChatShell`].

mod greeting;
mod header;
mod input_area;
mod message_list;
mod shell;

pub use greeting::Greeting;
pub use header::ChatHeader;
pub use input_area::ChatInputArea;
pub use message_list::{MessageList, MessageRow, ThinkingIndicator};
pub use shell::ChatShell;

/// Base route of a widget instance.
#[must_use]
pub fn widget_url(widget_id: &str) -> String {
    format!("/widget/{widget_id}")
}

/// Route the input form posts to.
#[must_use]
pub fn submit_url(widget_id: &str) -> String {
    format!("/widget/{widget_id}/submit")
}

/// Route that resolves once the in-flight query settles.
#[must_use]
pub fn settled_url(widget_id: &str) -> String {
    format!("/widget/{widget_id}/settled")
}

/// Route that copies sample prompt `index` into the input.
#[must_use]
pub fn sample_url(widget_id: &str, index: usize) -> String {
    format!("/widget/{widget_id}/samples/{index}")
}
