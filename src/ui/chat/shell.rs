//! Chat shell layout component.

use leptos::prelude::*;

use super::{ChatInputArea, Greeting, MessageList, widget_url};
use crate::widget::ChatWidget;

/// The swappable widget body.
///
/// Every HTMX interaction replaces this element (`#chat-widget`) with a
/// freshly rendered copy. `data-message-count` lets the client script
/// scroll to the newest message whenever the thread grows.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ChatShell
///         widget_id=handle.id()
///         widget=handle.snapshot()
///         placeholder="ask me anything about MongoDB..."
///     />
/// }
/// ```
#[component]
pub fn ChatShell(
    /// Widget instance ID.
    #[prop(into)]
    widget_id: String,
    /// State snapshot to render.
    widget: ChatWidget,
    /// Input placeholder.
    #[prop(into)]
    placeholder: String,
) -> impl IntoView {
    let message_count = widget.messages().len().to_string();
    let in_flight = widget.is_in_flight();
    let show_samples = widget.shows_sample_prompts();
    let prompts = widget.sample_prompts().to_vec();
    let messages = widget.messages().to_vec();
    let input = widget.input().to_string();

    let url = widget_url(&widget_id);
    let greeting_id = widget_id.clone();
    let list_id = widget_id.clone();

    view! {
        <div
            id="chat-widget"
            class="flex-1 overflow-y-auto pb-24"
            data-widget-url=url
            data-message-count=message_count
            data-in-flight=in_flight.to_string()
        >
            <div class="max-w-4xl mx-auto px-6 py-6">
                {show_samples.then(move || view! { <Greeting widget_id=greeting_id prompts=prompts /> })}
                <MessageList widget_id=list_id messages=messages in_flight=in_flight />
                <div id="messages-end"></div>
            </div>
            <ChatInputArea
                widget_id=widget_id
                input=input
                placeholder=placeholder
                in_flight=in_flight
            />
        </div>
    }
}
