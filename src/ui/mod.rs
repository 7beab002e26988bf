//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the chat
//! widget, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat widget layout components
//! - [`page`]: Page shell and fragment rendering
//! - [`assets`]: Client script served at `/static/widget.js`

pub mod assets;
pub mod chat;
pub mod components;
pub mod page;

pub use components::leaf_icon_svg;
pub use page::{render_page, render_widget};
