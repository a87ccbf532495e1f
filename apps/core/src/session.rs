//! In-memory conversation state for one open chat widget.
//!
//! A session is an append-only log of [`ChatMessage`]s, seeded with the
//! Krotoa greeting when the widget opens and reset back to that single
//! greeting when it reopens. Messages are never mutated and never persisted;
//! closing the widget discards the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// The greeting the widget shows as soon as it opens.
pub const WELCOME_MESSAGE: &str =
    "Sawubona! I'm Krotoa, your friendly Peoples Bank assistant. How can I help you today?";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat bubble. Created on every send or reply, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique within the session, strictly increasing.
    pub id: u64,
    /// The message text. Never empty.
    pub text: String,
    /// Who authored the message.
    pub sender: Sender,
    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
}

/// One open chat widget's conversation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// Random session identifier.
    pub id: String,
    messages: Vec<ChatMessage>,
    next_id: u64,
    /// Whether the assistant is currently composing a reply.
    is_typing: bool,
    closed: bool,
}

impl ChatSession {
    /// Opens a session seeded with the welcome greeting.
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            next_id: 1,
            is_typing: false,
            closed: false,
        };
        session.seed_greeting();
        session
    }

    fn seed_greeting(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text: WELCOME_MESSAGE.to_string(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
        });
    }

    fn push(&mut self, text: String, sender: Sender) -> Result<&ChatMessage, AppError> {
        if self.closed {
            return Err(AppError::SessionClosed);
        }
        if text.trim().is_empty() {
            return Err(AppError::EmptyMessage);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        // push extended the vec, so last() is the new message
        Ok(self.messages.last().expect("just pushed"))
    }

    /// Appends a user message. The text must not be empty or
    /// whitespace-only; nothing is recorded for such input.
    pub fn push_user(&mut self, text: impl Into<String>) -> Result<&ChatMessage, AppError> {
        self.push(text.into(), Sender::User)
    }

    /// Appends a bot reply.
    pub fn push_bot(&mut self, text: impl Into<String>) -> Result<&ChatMessage, AppError> {
        self.push(text.into(), Sender::Bot)
    }

    /// The full history, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the log, greeting included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether the composing indicator should be shown.
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub(crate) fn set_typing(&mut self, typing: bool) {
        self.is_typing = typing;
    }

    /// Whether the widget has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closes the session. Further appends fail with
    /// [`AppError::SessionClosed`]; the log keeps its final contents.
    pub fn close(&mut self) {
        self.closed = true;
        self.is_typing = false;
    }

    /// Restarts the session: back to the single seeded greeting.
    ///
    /// Message ids keep increasing across restarts so every id handed out by
    /// one session stays unique.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.is_typing = false;
        self.closed = false;
        self.seed_greeting();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
