//! HTTP handlers for the Agribot assistant

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::{quick_questions, ChatRequest, Conversation, QuickQuestion};
use crate::AppState;

/// Ask Agribot a question; returns the updated conversation
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<Conversation>> {
    let conversation = state
        .agribot
        .send(&request.conversation, &request.prompt)
        .await?;
    Ok(Json(conversation))
}

/// Suggested questions
pub async fn get_suggestions() -> Json<Vec<QuickQuestion>> {
    Json(quick_questions())
}
