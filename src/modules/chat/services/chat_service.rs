use std::sync::Arc;

use chrono::Utc;

use super::provider::ChatProvider;
use crate::core::error::AppError;
use crate::core::{CountryCode, Result};
use crate::modules::chat::models::{ChatRequest, ChatResponse};
use crate::modules::countries::services::country_catalog;

pub const USER_MESSAGE_REQUIRED: &str = "`user` message is required and must be a string";

/// Relays user messages to the configured provider with the prompt of the
/// resolved country
pub struct ChatService {
    provider: Arc<dyn ChatProvider>,
}

impl ChatService {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Country of a chat request: the explicit code when given, else the
    /// subdomain of `host`, else UAE
    pub fn resolve_country(request: &ChatRequest, host: Option<&str>) -> CountryCode {
        match request.country.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => CountryCode::resolve(code),
            _ => host
                .map(country_catalog::country_from_subdomain)
                .unwrap_or(CountryCode::DEFAULT),
        }
    }

    pub async fn reply(&self, request: ChatRequest, host: Option<&str>) -> Result<ChatResponse> {
        let message = request
            .user
            .as_deref()
            .filter(|user| !user.is_empty())
            .ok_or_else(|| AppError::validation(USER_MESSAGE_REQUIRED))?;

        let code = Self::resolve_country(&request, host);
        let country = country_catalog::country(code);

        let reply = self.provider.complete(country, message).await.map_err(|e| {
            tracing::error!(
                country = %code,
                provider = self.provider.name(),
                error = %e,
                "Chat completion failed"
            );
            e
        })?;

        tracing::debug!(country = %code, provider = self.provider.name(), "Chat reply sent");

        Ok(ChatResponse {
            message: reply,
            country: code,
            timestamp: Utc::now(),
        })
    }
}
