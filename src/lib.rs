//! MongoMuse chat widget
//!
//! A server-rendered chat widget that forwards user queries to a MongoDB
//! assistant backend and renders its replies.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server owning one widget instance per page
//! - **Widget**: Idle/Waiting state machine, one request in flight at most
//! - **Backend**: reqwest client for the `POST /query` JSON protocol
//! - **UI**: Leptos SSR + HTMX
//!
//! # Modules
//!
//! - [`backend`]: Query backend trait and HTTP client
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`server`]: Router and handlers
//! - [`ui`]: Leptos components, including the leaf icon glyph
//! - [`widget`]: Widget state, instances, and the instance store

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::assigning_clones)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod backend;
pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod ui;
pub mod widget;

pub use error::{BackendError, Error, Result};
pub use server::AppState;
