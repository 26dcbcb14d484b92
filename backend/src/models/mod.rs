//! API models for the agricultural advisory server
//!
//! Re-exports models from the shared crate and adds backend-specific models

use serde::{Deserialize, Serialize};

pub use shared::models::*;

/// Which optional integrations are active
#[derive(Debug, Clone, Copy, Serialize, Default)]
pub struct Integrations {
    pub market_feed: bool,
    pub weather: bool,
    pub chat: bool,
    pub classifier: bool,
}

/// Agribot request: the conversation so far and the next question
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub conversation: Conversation,
    pub prompt: String,
}
