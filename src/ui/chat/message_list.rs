//! Chat message list component.

use leptos::prelude::*;

use super::settled_url;
use crate::ui::components::{LeafIcon, UserIcon};
use crate::widget::Message;

/// Agent mark: the leaf glyph plus a `.ai` label.
#[component]
fn AgentMark() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-1">
            <LeafIcon size=24 />
            <span class="text-sm text-muted-foreground">".ai"</span>
        </div>
    }
}

/// One message bubble, aligned by sender.
#[component]
pub fn MessageRow(message: Message) -> impl IntoView {
    let is_user = message.is_user();
    let Message { id, content, .. } = message;

    if is_user {
        view! {
            <div class="flex items-start space-x-3 justify-end" data-sender="user" data-message-id=id>
                <div class="max-w-3xl rounded-lg px-4 py-3 bg-user-message text-white ml-auto">
                    <p class="whitespace-pre-wrap">{content}</p>
                </div>
                <div class="flex-shrink-0">
                    <div class="w-8 h-8 bg-white rounded-full flex items-center justify-center">
                        <UserIcon class="w-5 h-5 text-primary" />
                    </div>
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="flex items-start space-x-3 justify-start" data-sender="agent" data-message-id=id>
                <AgentMark />
                <div class="max-w-3xl rounded-lg px-4 py-3 bg-transparent text-foreground">
                    <p class="whitespace-pre-wrap">{content}</p>
                </div>
            </div>
        }
        .into_any()
    }
}

/// Busy indicator shown after the last message while a query is in flight.
///
/// Loading it asks the server to hold the request until the query settles,
/// then swaps the refreshed widget in.
#[component]
pub fn ThinkingIndicator(
    /// Widget waiting on the backend.
    #[prop(into)]
    widget_id: String,
) -> impl IntoView {
    view! {
        <div
            class="flex items-start space-x-3"
            id="thinking-indicator"
            hx-get=settled_url(&widget_id)
            hx-trigger="load"
            hx-target="#chat-widget"
            hx-swap="outerHTML"
        >
            <AgentMark />
            <div class="bg-transparent text-foreground rounded-lg px-4 py-3">
                <div class="flex items-center space-x-2">
                    <div class="flex space-x-1">
                        <div class="w-2 h-2 bg-primary rounded-full animate-bounce"></div>
                        <div
                            class="w-2 h-2 bg-primary rounded-full animate-bounce"
                            style="animation-delay: 0.1s"
                        ></div>
                        <div
                            class="w-2 h-2 bg-primary rounded-full animate-bounce"
                            style="animation-delay: 0.2s"
                        ></div>
                    </div>
                    <span class="text-muted-foreground">"Thinking..."</span>
                </div>
            </div>
        </div>
    }
}

/// Conversation thread, followed by the busy indicator when in flight.
#[component]
pub fn MessageList(
    /// Widget the thread belongs to.
    #[prop(into)]
    widget_id: String,
    /// Messages in insertion order.
    messages: Vec<Message>,
    /// Whether a query is in flight.
    in_flight: bool,
) -> impl IntoView {
    let has_messages = !messages.is_empty();

    view! {
        <div class="space-y-4" id="messages" aria-live="polite" aria-label="Chat messages">
            {messages
                .into_iter()
                .map(|message| view! { <MessageRow message=message /> })
                .collect_view()}
            {(has_messages && in_flight).then(move || view! { <ThinkingIndicator widget_id=widget_id /> })}
        </div>
    }
}
