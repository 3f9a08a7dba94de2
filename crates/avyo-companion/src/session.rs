//! Chat session management.
//!
//! A `ChatSession` holds the message history, validates input, asks a
//! [`Responder`] for replies, and classifies the mood of each message.

use avyo_common::{MessageId, MoodLabel, SessionId};
use avyo_config::schema::ChatConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::mood::MoodLexicon;
use crate::responder::Responder;
use crate::ChatError;

/// Notice shown instead of a reply when the responder fails.
pub const RESPONSE_FAILED_NOTICE: &str = "Failed to generate a response. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: MessageId::new(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Result of one submitted message.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: ChatMessage,
    /// `None` when the responder failed; show [`RESPONSE_FAILED_NOTICE`].
    pub reply: Option<ChatMessage>,
    /// Mood of the submitted message alone.
    pub mood: MoodLabel,
}

pub struct ChatSession {
    id: SessionId,
    username: String,
    assistant_name: String,
    messages: Vec<ChatMessage>,
    history_limit: usize,
    lexicon: MoodLexicon,
}

impl ChatSession {
    /// Start a session for `username`, seeded with the assistant's welcome.
    pub fn new(username: impl Into<String>, config: &ChatConfig) -> Self {
        let username = username.into();
        let username = if username.trim().is_empty() {
            config.username.clone()
        } else {
            username.trim().to_string()
        };
        let welcome = ChatMessage {
            id: MessageId::welcome(),
            content: format!(
                "Hello {username}! I'm {}, your personal AI assistant. How can I help you today?",
                config.assistant_name
            ),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
        };
        let id = SessionId::new();
        info!(session = %id, user = %username, "chat session started");
        Self {
            id,
            username,
            assistant_name: config.assistant_name.clone(),
            messages: vec![welcome],
            history_limit: (config.history_limit as usize).max(2),
            lexicon: MoodLexicon::default(),
        }
    }

    pub fn with_lexicon(mut self, lexicon: MoodLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Submit a user message and wait for the reply.
    ///
    /// A responder failure is not an error: the user message stays in the
    /// history and the exchange carries no reply.
    pub async fn send(
        &mut self,
        responder: &dyn Responder,
        text: &str,
    ) -> Result<Exchange, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let user = ChatMessage::new(text, Sender::User);
        let mood = self.lexicon.classify(text);
        self.push(user.clone());

        let reply = match responder.respond(text, &self.username).await {
            Ok(content) => {
                let reply = ChatMessage::new(content, Sender::Assistant);
                self.push(reply.clone());
                Some(reply)
            }
            Err(e) => {
                warn!(session = %self.id, "responder failed: {e}");
                None
            }
        };

        Ok(Exchange { user, reply, mood })
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        while self.messages.len() > self.history_limit {
            // Index 0 is the welcome message.
            self.messages.remove(1);
        }
    }

    /// Mood over every user message still in the history.
    pub fn conversation_mood(&self) -> MoodLabel {
        let texts: Vec<&str> = self
            .messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .map(|m| m.content.as_str())
            .collect();
        self.lexicon.classify_history(&texts)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
