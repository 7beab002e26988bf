//! Chat input area component.

use leptos::prelude::*;

use super::submit_url;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, Input, SendIcon};

/// Fixed bottom input with HTMX form submission.
///
/// Both controls are disabled while a query is in flight; the submit button
/// is also disabled while the input is blank (kept in sync client-side as
/// the user types).
#[component]
pub fn ChatInputArea(
    /// Widget the form submits to.
    #[prop(into)]
    widget_id: String,
    /// Current input text.
    #[prop(into)]
    input: String,
    /// Placeholder shown in the empty input.
    #[prop(into)]
    placeholder: String,
    /// Whether a query is in flight.
    in_flight: bool,
) -> impl IntoView {
    let submit_disabled = in_flight || input.trim().is_empty();

    view! {
        <div class="fixed bottom-0 left-0 right-0 bg-background border-t border-border p-4">
            <div class="max-w-4xl mx-auto">
                <form
                    class="flex gap-2"
                    hx-post=submit_url(&widget_id)
                    hx-target="#chat-widget"
                    hx-swap="outerHTML"
                >
                    <Input
                        name="query"
                        value=input
                        placeholder=placeholder
                        disabled=in_flight
                        class="flex-1 h-12 text-base px-4"
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Lg
                        button_type="submit"
                        disabled=submit_disabled
                    >
                        <SendIcon class="w-5 h-5" />
                    </Button>
                </form>
            </div>
        </div>
    }
}
