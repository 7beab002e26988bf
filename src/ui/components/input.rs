//! Input component for text fields.

use leptos::prelude::*;

/// Text input component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         name="query"
///         placeholder="ask me anything about MongoDB..."
///         value=current_input
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Current value.
    #[prop(optional, into)]
    value: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let base_classes = "flex h-10 w-full rounded-lg border border-border bg-background \
                        px-3 py-2 text-sm text-foreground placeholder:text-muted-foreground \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
                        focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

    let classes = format!("{base_classes} {class}");

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            disabled=disabled
            value=value
            autocomplete=autocomplete
        />
    }
}
