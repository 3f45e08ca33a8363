//! Wiring of services, shared state and routes.
//!
//! Used by the binary and by the integration tests so both serve the same
//! application.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::config::{ChatConfig, Config, MailConfig};
use crate::core::Result;
use crate::middleware::{json_error_handler, RateLimiter};
use crate::modules;
use crate::modules::chat::services::openai::DEFAULT_OPENAI_BASE_URL;
use crate::modules::chat::{ChatProvider, ChatService, MockChatProvider, OpenAiProvider};
use crate::modules::invoices::services::{InvoiceService, SimulatedMailer};

/// Services shared by every worker
#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<InvoiceService>,
    pub chat: Arc<ChatService>,
    pub chat_limiter: RateLimiter,
}

impl AppState {
    pub fn new(chat: &ChatConfig, mail: &MailConfig) -> Result<Self> {
        let provider: Arc<dyn ChatProvider> = match &chat.openai_api_key {
            Some(api_key) => Arc::new(OpenAiProvider::new(
                api_key.clone(),
                chat.openai_base_url.clone(),
                chat.openai_model.clone(),
            )),
            None => Arc::new(MockChatProvider::new(chat.mock_delay)),
        };

        Ok(Self {
            invoices: Arc::new(InvoiceService::new(Arc::new(SimulatedMailer::new(
                mail.simulated_delay,
            )))),
            chat: Arc::new(ChatService::new(provider)),
            chat_limiter: RateLimiter::new(chat.rate_limit_per_minute)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.chat, &config.mail)
    }

    /// Mock chat, instant mail, and the given chat quota
    pub fn for_tests(chat_rate_limit_per_minute: u32) -> Result<Self> {
        Self::new(
            &ChatConfig {
                openai_api_key: None,
                openai_model: None,
                openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
                rate_limit_per_minute: chat_rate_limit_per_minute,
                mock_delay: Duration::ZERO,
            },
            &MailConfig {
                simulated_delay: Duration::ZERO,
            },
        )
    }

    pub fn chat_provider(&self) -> &str {
        self.chat.provider_name()
    }

    /// Register shared data, the JSON error mapping and all routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.invoices.clone()))
            .app_data(web::Data::new(self.chat.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));

        modules::configure(cfg, self.chat_limiter.clone());
    }
}
