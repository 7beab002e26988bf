//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable UI components inspired by
//! shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Input`]: Text input field
//! - [`icons`]: SVG icon components, including the [`LeafIcon`] glyph

mod button;
mod icons;
mod input;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::*;
pub use input::Input;
