//! Ollama chat adapter for name classification.
//!
//! Sends one non-streaming `/api/chat` request per name and recovers the answer with the
//! two-stage parser in [`super::reply_parser`].

use super::reply_parser::analysis_from_reply;
use crate::domain::{DomainError, NameAnalysis, UpstreamError};
use crate::ports::NameClassifierPort;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Chars of an upstream error body kept in logs.
const LOG_BODY_CHARS: usize = 200;

/// Ollama-backed classifier.
///
/// One `reqwest::Client` is reused for every call; its timeout bounds the whole exchange
/// (connect, send, and reading the body).
pub struct OllamaAdapter {
    client: reqwest::Client,
    chat_url: String,
    model: String,
}

impl OllamaAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - Ollama base address (e.g. "http://localhost:11434"); `/api/chat` is appended
    /// * `model` - Model name (e.g. "mistral")
    /// * `timeout` - Total budget for one call; exceeding it is a transport failure
    pub fn new(base_url: &str, model: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            chat_url: format!("{}/api/chat", base_url.trim_end_matches('/')),
            model,
        })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Fixed instruction: answer with bare JSON, one worked example.
    fn system_prompt() -> &'static str {
        "Ты — модуль анализа имён. Возвращай JSON с полом, официальным именем и очищенной \
         версией имени. Никаких объяснений. Пример ввода: Саша. Пример ответа: {\"gender\": \"мужской\", \
         \"full_name\": \"Александр\", \"corrected_input\": \"Саша\"}"
    }

    fn build_request<'a>(&'a self, name: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: Self::system_prompt(),
                },
                ChatMessage {
                    role: "user",
                    content: name,
                },
            ],
            stream: false,
        }
    }
}

/// Ollama `/api/chat` request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[async_trait::async_trait]
impl NameClassifierPort for OllamaAdapter {
    async fn classify(&self, name: &str) -> Result<NameAnalysis, DomainError> {
        debug!(
            model = %self.model,
            name_len = name.chars().count(),
            "sending name to model"
        );

        let response = self
            .client
            .post(&self.chat_url)
            .json(&self.build_request(name))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, url = %self.chat_url, "model request failed");
                UpstreamError::Transport(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(
                status = %status,
                body = %text.chars().take(LOG_BODY_CHARS).collect::<String>(),
                "model returned error"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let analysis = analysis_from_reply(&text).map_err(|e| {
            warn!(
                error = %e,
                body = %text.chars().take(LOG_BODY_CHARS).collect::<String>(),
                "model reply is not JSON"
            );
            e
        })?;

        info!(
            gender = ?analysis.gender,
            full_name = ?analysis.full_name,
            "name classified"
        );
        Ok(analysis)
    }

    fn mode(&self) -> &'static str {
        "ollama"
    }
}
