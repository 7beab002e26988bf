//! Chat widget state machine.
//!
//! The widget is either [`Phase::Idle`] or [`Phase::Waiting`]. `submit`
//! moves it from idle to waiting; `settle` moves it back, on both the
//! success and the failure path.

use tracing::{error, warn};

use super::message::Message;
use crate::backend::QueryReply;
use crate::error::BackendError;

/// Agent reply when the backend answered without a usable `response`.
pub const FALLBACK_REPLY: &str = "Sorry, I could not process your request.";

/// Agent reply when the backend could not be reached or parsed.
pub const CONNECTION_ERROR_REPLY: &str = "Sorry, there was an error connecting to the server.";

/// Example questions offered before the first submission.
pub const DEFAULT_SAMPLE_PROMPTS: [&str; 2] = [
    "check the status of testbedmongo?",
    "list all databases in testbedmongo!",
];

/// Request phase of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No request in flight.
    #[default]
    Idle,
    /// A query has been sent and not yet settled.
    Waiting,
}

/// State owned by one chat widget instance.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    messages: Vec<Message>,
    input: String,
    phase: Phase,
    started: bool,
    sample_prompts: Vec<String>,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_PROMPTS.iter().map(ToString::to_string).collect())
    }
}

impl ChatWidget {
    /// Create an empty widget offering the given sample prompts.
    #[must_use]
    pub fn new(sample_prompts: Vec<String>) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            phase: Phase::Idle,
            started: false,
            sample_prompts,
        }
    }

    /// Conversation so far, in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a query is waiting on the backend.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.phase == Phase::Waiting
    }

    /// Whether anything has been submitted in this session.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Whether the sample-prompt panel is visible.
    #[must_use]
    pub fn shows_sample_prompts(&self) -> bool {
        !self.started
    }

    #[must_use]
    pub fn sample_prompts(&self) -> &[String] {
        &self.sample_prompts
    }

    /// Replace the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Copy a sample prompt into the input. Never submits.
    ///
    /// Returns `None` when the index is out of range or the panel is
    /// already hidden.
    pub fn select_sample(&mut self, index: usize) -> Option<&str> {
        if self.started {
            return None;
        }
        let prompt = self.sample_prompts.get(index)?;
        self.input.clone_from(prompt);
        Some(&self.input)
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_in_flight() && !self.input.trim().is_empty()
    }

    /// Start a submission of `text`.
    ///
    /// Returns the query to send, or `None` (and changes nothing) when the
    /// text is blank or a request is already in flight.
    pub fn submit(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.is_in_flight() {
            return None;
        }

        self.messages.push(Message::user(text));
        self.input.clear();
        self.phase = Phase::Waiting;
        self.started = true;

        Some(text.to_string())
    }

    /// Finish the in-flight submission with the backend's outcome.
    ///
    /// Always appends exactly one agent message and returns the widget to
    /// [`Phase::Idle`].
    pub fn settle(&mut self, outcome: Result<QueryReply, BackendError>) -> &Message {
        if self.phase != Phase::Waiting {
            warn!(name: "widget.settle.unexpected", "Settle called with no query in flight");
        }

        let content = match outcome {
            Ok(reply) => reply.response.unwrap_or_else(|| FALLBACK_REPLY.to_string()),
            Err(err) => {
                error!(name: "widget.query.failed", error = %err, "Query to backend failed");
                CONNECTION_ERROR_REPLY.to_string()
            }
        };

        self.messages.push(Message::agent(content));
        self.phase = Phase::Idle;

        let last = self.messages.len() - 1;
        &self.messages[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Sender;

    #[test]
    fn test_blank_submit_is_noop() {
        let mut widget = ChatWidget::default();
        widget.set_input("   ");

        assert!(!widget.can_submit());
        assert!(widget.submit("").is_none());
        assert!(widget.submit(" \n\t ").is_none());

        assert!(widget.messages().is_empty());
        assert_eq!(widget.phase(), Phase::Idle);
        assert!(widget.shows_sample_prompts());
        assert_eq!(widget.input(), "   ");
    }

    #[test]
    fn test_submit_appends_user_message_untrimmed() {
        let mut widget = ChatWidget::default();
        widget.set_input("  hello  ");

        let query = widget.submit("  hello  ").unwrap();

        assert_eq!(query, "  hello  ");
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.messages()[0].content, "  hello  ");
        assert_eq!(widget.messages()[0].sender, Sender::User);
        assert!(widget.is_in_flight());
        assert!(widget.input().is_empty());
        assert!(!widget.shows_sample_prompts());
    }

    #[test]
    fn test_submit_while_in_flight_is_noop() {
        let mut widget = ChatWidget::default();
        widget.submit("first").unwrap();

        assert!(widget.submit("second").is_none());
        assert_eq!(widget.messages().len(), 1);

        widget.set_input("second");
        assert!(!widget.can_submit());
    }

    #[test]
    fn test_settle_with_answer() {
        let mut widget = ChatWidget::default();
        widget.submit("check the status of testbedmongo?").unwrap();

        let reply = widget.settle(Ok(QueryReply::answer("Status: healthy")));
        assert_eq!(reply.content, "Status: healthy");
        assert_eq!(reply.sender, Sender::Agent);
        assert!(!widget.is_in_flight());
    }

    #[test]
    fn test_settle_without_response_uses_fallback() {
        let mut widget = ChatWidget::default();
        widget.submit("hi").unwrap();

        let reply = widget.settle(Ok(QueryReply::default()));
        assert_eq!(reply.content, FALLBACK_REPLY);
    }

    #[test]
    fn test_settle_with_error_releases_flag() {
        let mut widget = ChatWidget::default();
        widget.submit("hi").unwrap();

        let reply = widget.settle(Err(BackendError::Cancelled));
        assert_eq!(reply.content, CONNECTION_ERROR_REPLY);
        assert_eq!(widget.phase(), Phase::Idle);
        assert!(!widget.shows_sample_prompts());
        assert!(widget.input().is_empty());

        // Immediately retryable.
        assert!(widget.submit("hi again").is_some());
    }

    #[test]
    fn test_samples_hidden_for_rest_of_session() {
        let mut widget = ChatWidget::default();
        widget.submit("hi").unwrap();
        widget.settle(Ok(QueryReply::answer("hello")));

        assert!(widget.has_started());
        assert!(!widget.shows_sample_prompts());
        assert!(widget.select_sample(0).is_none());
        assert!(widget.input().is_empty());
    }

    #[test]
    fn test_select_sample_populates_input() {
        let mut widget = ChatWidget::default();

        assert_eq!(
            widget.select_sample(1),
            Some("list all databases in testbedmongo!")
        );
        assert_eq!(widget.input(), "list all databases in testbedmongo!");
        assert!(widget.messages().is_empty());
        assert!(!widget.is_in_flight());

        assert!(widget.select_sample(7).is_none());
        assert_eq!(widget.input(), "list all databases in testbedmongo!");
    }

    #[test]
    fn test_history_is_append_only() {
        let mut widget = ChatWidget::default();
        widget.submit("one").unwrap();
        widget.settle(Ok(QueryReply::answer("1")));
        widget.submit("two").unwrap();
        widget.settle(Err(BackendError::Cancelled));

        let contents: Vec<_> = widget.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["one", "1", "two", CONNECTION_ERROR_REPLY]);
    }
}
