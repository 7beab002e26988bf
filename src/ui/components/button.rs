//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Send action.
    #[default]
    Primary,
    /// Bordered button used for sample prompts.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-send-button text-white hover:bg-send-button/90",
            Self::Outline => "bg-transparent border border-border text-foreground hover:bg-muted",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
        }
    }
}

/// ShadCN-style button component.
///
/// When `hx_post` is set the button posts to that URL and swaps the
/// returned fragment over the widget.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Outline hx_post="/widget/abc/samples/0">
///         "check the status of testbedmongo?"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// HTMX POST target.
    #[prop(optional, into)]
    hx_post: Option<String>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center rounded-lg font-medium \
                        transition-colors focus-visible:outline-none focus-visible:ring-2 \
                        focus-visible:ring-primary focus-visible:ring-offset-2 \
                        disabled:pointer-events-none disabled:opacity-50";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );
    let hx_target = hx_post.as_ref().map(|_| "#chat-widget");
    let hx_swap = hx_post.as_ref().map(|_| "outerHTML");

    view! {
        <button
            type=button_type
            class=classes
            disabled=disabled
            hx-post=hx_post
            hx-target=hx_target
            hx-swap=hx_swap
        >
            {children()}
        </button>
    }
}
