//! Agribot conversation models
//!
//! A conversation is a value: every exchange produces a new conversation
//! rather than mutating the one it was given.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Instructions sent ahead of every user question
pub const FARMING_CONTEXT: &str = "You are Agribot, an expert AI assistant specializing in agriculture and farming.
Provide helpful, accurate, and concise information about farming practices,
crop management, pest control, sustainable agriculture, modern farming technology,
climate-resilient agriculture, and market trends.

Keep your answers practical and actionable for farmers.
Include specific recommendations where appropriate.
If discussing chemicals or treatments, always mention safety precautions.";

/// Full prompt forwarded to the language model
pub fn build_prompt(question: &str) -> String {
    format!("{}\n\nUser question: {}", FARMING_CONTEXT, question)
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Assistant message reporting a failed reply
    pub fn error(reason: impl std::fmt::Display) -> Self {
        Self::new(ChatRole::Assistant, format!("Error: {}", reason))
    }
}

/// Ordered chat history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Conversation {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this conversation with `message` appended
    pub fn with_message(&self, message: ChatMessage) -> Self {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self { messages }
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Canned question offered next to the chat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickQuestion {
    pub title: String,
    pub query: String,
}

/// Quick questions, in display order
pub fn quick_questions() -> Vec<QuickQuestion> {
    [
        (
            "Pest Control",
            "What are organic methods to control aphids on vegetable crops?",
        ),
        (
            "Irrigation Tips",
            "What are the most water-efficient irrigation systems for small farms?",
        ),
        (
            "Crop Rotation",
            "How should I plan my crop rotation for a vegetable garden?",
        ),
        (
            "Climate Resilience",
            "Which crops are most resilient to drought conditions?",
        ),
    ]
    .into_iter()
    .map(|(title, query)| QuickQuestion {
        title: title.to_string(),
        query: query.to_string(),
    })
    .collect()
}
