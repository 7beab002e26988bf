//! Conversation messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the person using the widget.
    User,
    /// Returned by the query backend.
    Agent,
}

/// A single entry in the conversation thread.
///
/// Messages are immutable once created; the thread only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// Text body, exactly as submitted or received.
    pub content: String,
    /// Author of the message.
    pub sender: Sender,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Sender::User)
    }

    /// Create an agent message.
    pub fn agent(content: impl Into<String>) -> Self {
        Self::new(content, Sender::Agent)
    }

    /// Whether the user authored this message.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
