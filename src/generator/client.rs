//! The HTTP client for the external text-generation service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shared handle on the text-generation client, managed as Rocket state.
pub type SharedGenerator = Arc<dyn TextGenerator>;

/// A single request/response call into the external text-generation
/// service. One call, no retries; transport failures surface as
/// [`Error::Upstream`].
#[rocket::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, session_id: &str, system_message: &str, prompt: &str)
        -> Result<String>;
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct HttpTextGenerator {
    http: reqwest::Client,
    url: String,
    key: String,
    model: String,
}

impl HttpTextGenerator {
    pub fn new(url: String, key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
            key,
            model,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    // Per-call session identifier; never reused across calls.
    user: &'a str,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[rocket::async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn complete(
        &self,
        session_id: &str,
        system_message: &str,
        prompt: &str,
    ) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_message,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            user: session_id,
        };

        debug!("Requesting a completion for session {session_id}");
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "Generator responded with status {status}"
            )));
        }

        let completion = response.json::<ChatResponse>().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Upstream("Generator returned an empty completion".to_string()))
    }
}

/// Canned generator for tests.
#[cfg(test)]
pub struct StubGenerator {
    pub reply: std::result::Result<String, String>,
}

#[cfg(test)]
#[rocket::async_trait]
impl TextGenerator for StubGenerator {
    async fn complete(
        &self,
        _session_id: &str,
        _system_message: &str,
        _prompt: &str,
    ) -> Result<String> {
        self.reply.clone().map_err(Error::Upstream)
    }
}
