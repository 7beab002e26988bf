//! Full-page and fragment rendering.

use leptos::prelude::*;

use super::chat::{ChatHeader, ChatShell};
use crate::config::WidgetConfig;
use crate::widget::WidgetHandle;

/// HTMX bundle loaded by the page shell.
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";

/// Tailwind runtime for the utility classes used by the components.
const TAILWIND_SRC: &str = "https://cdn.tailwindcss.com";

/// Generate the HTML shell for the application.
fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="{TAILWIND_SRC}"></script>
    <script src="{HTMX_SRC}"></script>
    <script defer src="/static/widget.js"></script>
</head>
<body class="min-h-screen bg-background flex flex-col">
{content}
</body>
</html>"#
    )
}

/// Render just the swappable widget body.
#[must_use]
pub fn render_widget(widget: &WidgetHandle, config: &WidgetConfig) -> String {
    let widget_id = widget.id().to_string();
    let snapshot = widget.snapshot();
    let placeholder = config.placeholder.clone();

    view! { <ChatShell widget_id=widget_id widget=snapshot placeholder=placeholder /> }.to_html()
}

/// Render the complete page for a freshly mounted widget.
#[must_use]
pub fn render_page(widget: &WidgetHandle, config: &WidgetConfig) -> String {
    let title = config.title.clone();
    let header = view! { <ChatHeader title=title /> }.to_html();
    let body = format!("{header}\n{}", render_widget(widget, config));
    html_shell(&config.title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::QueryReply;
    use crate::widget::{CONNECTION_ERROR_REPLY, WidgetStore};

    fn widget_config() -> WidgetConfig {
        WidgetConfig {
            title: "MongoMuse.ai".to_string(),
            placeholder: "ask me anything about MongoDB...".to_string(),
            sample_prompts: Vec::new(),
            idle_timeout_secs: 60,
        }
    }

    #[test]
    fn test_fresh_page_shows_greeting_and_samples() {
        let widget = WidgetStore::default().create();
        let html = render_page(&widget, &widget_config());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>MongoMuse.ai</title>"));
        assert!(html.contains("Hello there!👋"));
        assert!(html.contains("check the status of testbedmongo?"));
        assert!(html.contains("list all databases in testbedmongo!"));
        assert!(html.contains(&format!("/widget/{}/samples/1", widget.id())));
        assert!(html.contains(&format!("/widget/{}/submit", widget.id())));
        assert!(html.contains(r#"placeholder="ask me anything about MongoDB...""#));
        assert!(html.contains(r#"data-message-count="0""#));
        assert!(!html.contains("Thinking..."));
    }

    #[test]
    fn test_in_flight_render() {
        let widget = WidgetStore::default().create();
        let _pending = widget.begin_submit("check the status of testbedmongo?").unwrap();

        let html = render_widget(&widget, &widget_config());

        assert!(html.contains(r#"id="chat-widget""#));
        assert!(!html.contains("Hello there!"));
        assert!(html.contains(r#"data-sender="user""#));
        assert!(html.contains("Thinking..."));
        assert!(html.contains(&format!("/widget/{}/settled", widget.id())));
        assert!(html.contains(r#"data-in-flight="true""#));
    }

    #[test]
    fn test_settled_render() {
        let widget = WidgetStore::default().create();
        widget
            .begin_submit("hi")
            .unwrap()
            .settle(Ok(QueryReply::answer("Status: healthy")));

        let html = render_widget(&widget, &widget_config());

        assert!(html.contains("Status: healthy"));
        assert!(html.contains(r#"data-sender="agent""#));
        assert!(html.contains(r#"data-message-count="2""#));
        assert!(!html.contains("Thinking..."));
        assert!(!html.contains("Hello there!"));
    }

    #[test]
    fn test_message_content_is_escaped() {
        let widget = WidgetStore::default().create();
        widget
            .begin_submit("<script>alert(1)</script>")
            .unwrap()
            .settle(Err(crate::error::BackendError::Cancelled));

        let html = render_widget(&widget, &widget_config());

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(CONNECTION_ERROR_REPLY));
    }
}
