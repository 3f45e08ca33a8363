//! OpenAI Responses API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::provider::ChatProvider;
use crate::core::error::AppError;
use crate::core::Result;
use crate::modules::countries::models::Country;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

const NO_RESPONSE: &str = "Sorry, no response generated.";
const REQUEST_FAILED: &str = "OpenAI request failed";

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 2],
}

#[derive(Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: &'a str,
}

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    /// Overrides the per-country model when set
    model: Option<String>,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: String, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn responses_url(&self) -> String {
        format!("{}/v1/responses", self.base_url)
    }
}

/// Reply text of a Responses API payload: the flattened `output_text` when
/// present, else the first content part of the first output item.
pub fn extract_reply(body: &Value) -> String {
    if let Some(text) = body["output_text"].as_str().filter(|t| !t.is_empty()) {
        return text.to_string();
    }

    body["output"][0]["content"][0]["text"]
        .as_str()
        .filter(|t| !t.is_empty())
        .unwrap_or(NO_RESPONSE)
        .to_string()
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(&self, country: &Country, message: &str) -> Result<String> {
        let request = ResponsesRequest {
            model: self.model.as_deref().unwrap_or(country.model),
            input: [
                InputMessage {
                    role: "system",
                    content: country.system_prompt,
                },
                InputMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        let response = self
            .client
            .post(self.responses_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Chat completion request rejected");

            return Err(AppError::upstream(if error_body.trim().is_empty() {
                REQUEST_FAILED.to_string()
            } else {
                error_body
            }));
        }

        let body: Value = response.json().await?;
        Ok(extract_reply(&body))
    }

    fn name(&self) -> &str {
        "openai"
    }
}
