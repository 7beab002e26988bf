//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements for optimal performance
//! and styling flexibility.

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Outer leaf silhouette.
const LEAF_OUTER_PATH: &str =
    "M12 2C8.5 2 6 4.5 6 8C6 12 12 22 12 22S18 12 18 8C18 4.5 15.5 2 12 2Z";

/// Inner leaf silhouette.
const LEAF_INNER_PATH: &str =
    "M12 4C9.8 4 8 5.8 8 8C8 10.5 12 18 12 18S16 10.5 16 8C16 5.8 14.2 4 12 4Z";

/// Two-layer leaf glyph used as the agent's mark.
///
/// # Example
///
/// ```rust,ignore
/// view! { <LeafIcon size=32 class="mr-3" /> }
/// ```
#[component]
pub fn LeafIcon(
    /// Width and height in pixels.
    #[prop(default = 24)]
    size: u32,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let size = size.to_string();

    view! {
        <svg
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            class=class
        >
            <path d=LEAF_OUTER_PATH fill="#00684A" opacity="0.9" />
            <path d=LEAF_INNER_PATH fill="#4F9A85" opacity="0.7" />
        </svg>
    }
}

/// Render the leaf glyph to an SVG string.
#[must_use]
pub fn leaf_icon_svg(size: u32, class: &str) -> String {
    let class = class.to_string();
    view! { <LeafIcon size=size class=class /> }.to_html()
}

/// Send/arrow-right icon.
#[component]
pub fn SendIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <line x1="22" y1="2" x2="11" y2="13" />
            <polygon points="22 2 15 22 11 13 2 9 22 2" />
        </svg>
    }
}

/// User icon.
#[component]
pub fn UserIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </svg>
    }
}
