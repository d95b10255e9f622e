use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CANNED_REPLY: &str = "This is an AI response to your message.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Ai,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub content: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub messages: Vec<ChatMessage>,
}

/// Transcript shown when the widget first opens.
pub fn seed_transcript() -> Vec<ChatMessage> {
    [
        (Sender::Ai, "Hello! How can I help you today?"),
        (Sender::User, "I have a question about your products."),
        (
            Sender::Ai,
            "Sure! I'd be happy to help. What would you like to know?",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((sender, content), id)| ChatMessage {
        id,
        content: content.to_string(),
        sender,
    })
    .collect()
}

#[derive(Debug, Clone)]
pub struct Assistant {
    delay: Duration,
    history_cap: usize,
}

impl Assistant {
    pub fn new(delay: Duration, history_cap: usize) -> Self {
        Self { delay, history_cap }
    }

    /// Appends the user's message and the assistant's reply. Blank input
    /// leaves the history untouched.
    pub async fn exchange(&self, mut history: Vec<ChatMessage>, input: &str) -> Vec<ChatMessage> {
        let input = input.trim();
        if input.is_empty() {
            return history;
        }

        if history.len() > self.history_cap {
            let excess = history.len() - self.history_cap;
            history.drain(..excess);
        }

        push(&mut history, Sender::User, input);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        push(&mut history, Sender::Ai, CANNED_REPLY);
        tracing::debug!(len = history.len(), "chat exchange");
        history
    }
}

fn push(history: &mut Vec<ChatMessage>, sender: Sender, content: &str) {
    let id = history.last().map_or(1, |m| m.id.saturating_add(1));
    history.push(ChatMessage {
        id,
        content: content.to_string(),
        sender,
    });
}
