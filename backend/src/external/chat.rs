//! Generative language API client (Gemini `generateContent`)

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Chat model client
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl ChatClient {
    /// Create a new ChatClient
    pub fn new(api_key: String, base_url: String, model: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Chat HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Send a full prompt and return the model's reply text
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key
                let e = e.without_url();
                tracing::warn!(error = %e, "Chat request failed");
                AppError::ExternalService(format!("Chat API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Chat API error: {} - {}",
                status, body
            )));
        }

        let data: GenerateResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!(
                "Failed to parse chat response: {}",
                e.without_url()
            ))
        })?;

        extract_reply(data)
    }
}

/// Concatenate the text parts of the first candidate
fn extract_reply(data: GenerateResponse) -> AppResult<String> {
    let text: String = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AppError::ExternalService(
            "Chat API returned no text".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::agribot::append_exchange;
    use shared::Conversation;

    #[tokio::test]
    async fn test_connection_error_hides_api_key() {
        let client = ChatClient::new(
            "SECRETKEY123".to_string(),
            "http://127.0.0.1:1".to_string(),
            "gemini-1.5-flash".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        let reply = client.generate("hello").await;
        let err = reply.as_ref().unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
        assert!(!err.to_string().contains("SECRETKEY123"));

        // The failure is shown to the user inside the conversation
        let conversation = append_exchange(&Conversation::new(), "hello", reply);
        let shown = &conversation.last().unwrap().content;
        assert!(shown.starts_with("Error: "));
        assert!(!shown.contains("SECRETKEY123"));
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn test_reply_joins_parts() {
        let data: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Use neem "}, {"text": "oil."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(data).unwrap(), "Use neem oil.");
    }

    #[test]
    fn test_empty_reply_is_an_error() {
        let data: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(extract_reply(data).is_err());
    }
}
