//! Assistant conversation for the analysis page.
//!
//! The history is scoped to one video and survives navigating away and back.
//! A failed request never blocks the conversation: a canned reply is appended
//! in place of the backend answer.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use wire::ChatResponse;

/// Confidence attached to locally generated replies.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Reply shown when the chat request fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't reach the analysis assistant just now. Please try asking again in a moment.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Backend confidence for assistant replies.
    pub confidence: Option<f64>,
    /// `m:ss` offset the reply points at, rendered as a seek link.
    pub related_timestamp: Option<String>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content, confidence: None, related_timestamp: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    /// Video the history belongs to.
    pub video_id: Option<String>,
    pub messages: Vec<ChatMessage>,
    /// A question is awaiting its reply.
    pub pending: bool,
}

impl ChatState {
    /// Switch the conversation to `video_id`, clearing history from another video.
    pub fn open(&mut self, video_id: &str) {
        if self.video_id.as_deref() != Some(video_id) {
            *self = Self { video_id: Some(video_id.to_owned()), ..Self::default() };
        }
    }

    /// Append a user question. Returns the trimmed text to send, or `None` for
    /// blank input or while another reply is pending.
    pub fn push_user(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, text.to_owned()));
        self.pending = true;
        Some(text.to_owned())
    }

    /// Append the assistant reply for `video_id`, substituting the fallback on
    /// failure. A reply for a conversation that has since switched videos is
    /// dropped; returns whether it was applied.
    pub fn resolve<E>(&mut self, video_id: &str, result: Result<ChatResponse, E>) -> bool {
        if self.video_id.as_deref() != Some(video_id) {
            return false;
        }
        let message = match result {
            Ok(response) => ChatMessage {
                confidence: Some(response.confidence),
                related_timestamp: response.related_timestamp.filter(|t| !t.is_empty()),
                ..ChatMessage::new(ChatRole::Assistant, response.reply)
            },
            Err(_) => ChatMessage {
                confidence: Some(FALLBACK_CONFIDENCE),
                ..ChatMessage::new(ChatRole::Assistant, FALLBACK_REPLY.to_owned())
            },
        };
        self.messages.push(message);
        self.pending = false;
        true
    }
}
