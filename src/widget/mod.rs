//! Chat widget state and instance management.
//!
//! Every widget instance owns its own conversation: the message thread, the
//! input text, the in-flight flag and the "conversation started" flag.
//! Instances are identified by UUID and indexed in a [`WidgetStore`].
//!
//! # Architecture
//!
//! - [`ChatWidget`]: the synchronous `{Idle, Waiting}` state machine
//! - [`WidgetHandle`]: shared handle to one instance, drives the async query
//! - [`PendingQuery`]: guard for the in-flight flag
//! - [`WidgetStore`]: thread-safe index of all live instances
//!
//! # Example
//!
//! ```rust
//! use mongomuse::widget::WidgetStore;
//!
//! let store = WidgetStore::default();
//! let widget = store.create();
//!
//! let pending = widget.begin_submit("check the status of testbedmongo?").unwrap();
//! assert!(widget.is_in_flight());
//! assert_eq!(pending.query(), "check the status of testbedmongo?");
//! ```

mod message;
mod state;
mod store;

pub use message::{Message, Sender};
pub use state::{
    CONNECTION_ERROR_REPLY, ChatWidget, DEFAULT_SAMPLE_PROMPTS, FALLBACK_REPLY, Phase,
};
pub use store::{DEFAULT_IDLE_TIMEOUT, PendingQuery, WidgetHandle, WidgetStore};
