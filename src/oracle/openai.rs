// OpenAI chat completions oracle
//
// Works against any OpenAI-compatible endpoint. One request per `ask`,
// no retries, no timeout.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::history::SessionLog;
use super::types::ChatMessage;
use super::{Oracle, OracleError};
use crate::config::constants::{FREQUENCY_PENALTY, PRESENCE_PENALTY, TOP_P};
use crate::config::OracleConfig;

/// Documentation oracle backed by the chat completions API
pub struct OpenAIOracle {
    client: Client,
    api_key: String,
    config: OracleConfig,
    session: SessionLog,
}

impl OpenAIOracle {
    /// Create an oracle. The credential is passed in by the caller.
    pub fn new(api_key: impl Into<String>, config: OracleConfig) -> Result<Self, OracleError> {
        let client = Client::builder().build().map_err(OracleError::Http)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
            session: SessionLog::new(),
        })
    }

    /// Turns recorded so far (always empty when memory is off)
    pub fn session(&self) -> &SessionLog {
        &self.session
    }

    /// Build the message list for one call: system, injected, history, prompt
    pub fn compile_messages(&self, prompt: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::new();

        if let Some(system) = &self.config.system_message {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.extend(self.config.injected_messages.iter().cloned());
        if self.config.save_messages {
            messages.extend(self.session.messages().iter().cloned());
        }
        messages.push(ChatMessage::user(prompt));

        messages
    }

    fn to_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            messages: self.compile_messages(prompt),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        }
    }

    async fn send(&self, request: &CompletionRequest) -> Result<String, OracleError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending request to chat completions API"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(OracleError::Http)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse =
            response.json().await.map_err(OracleError::Decode)?;

        tracing::debug!(id = %completion.id, "Received completion");

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(OracleError::EmptyChoices)?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl Oracle for OpenAIOracle {
    async fn ask(&mut self, prompt: &str) -> Result<String> {
        let request = self.to_request(prompt);
        let answer = self.send(&request).await?;

        if self.config.save_messages {
            self.session.record_turn(prompt, &answer);
        }

        Ok(answer)
    }

    fn reset_session(&mut self) {
        self.session.clear();
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

// Chat completions API types

#[derive(Debug, Clone, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    id: String,
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}
