//! Agribot farming assistant
//!
//! Each exchange takes the conversation so far and returns a new one with the
//! user's message and the assistant's reply appended. A failed reply is
//! recorded in the conversation as an "Error: ..." message.

use shared::{build_prompt, validate_prompt, ChatMessage, Conversation};

use crate::error::{AppError, AppResult};
use crate::external::ChatClient;

/// Agribot chat service
#[derive(Clone)]
pub struct AgribotService {
    chat_client: Option<ChatClient>,
}

impl AgribotService {
    /// Create a new AgribotService instance
    pub fn new(chat_client: Option<ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Ask a question within a conversation
    pub async fn send(&self, conversation: &Conversation, prompt: &str) -> AppResult<Conversation> {
        validate_prompt(prompt).map_err(|e| AppError::invalid("prompt", e))?;

        let reply = match &self.chat_client {
            Some(client) => client.generate(&build_prompt(prompt)).await,
            None => Err(AppError::Configuration(
                "no chat API key configured".to_string(),
            )),
        };

        Ok(append_exchange(conversation, prompt, reply))
    }
}

/// New conversation with the question and its reply (or failure) appended
pub fn append_exchange(
    conversation: &Conversation,
    prompt: &str,
    reply: AppResult<String>,
) -> Conversation {
    let with_question = conversation.with_message(ChatMessage::user(prompt));
    let answer = match reply {
        Ok(text) => ChatMessage::assistant(text),
        Err(e) => {
            tracing::warn!("Agribot reply failed: {}", e);
            ChatMessage::error(e)
        }
    };
    with_question.with_message(answer)
}
