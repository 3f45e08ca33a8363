use crate::core::{AppError, Result};
use crate::modules::chat::services::openai::DEFAULT_OPENAI_BASE_URL;
use std::env;
use std::time::Duration;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub chat: ChatConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` switches log output to JSON lines
    pub log_format: String,
}

/// Chat relay settings
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Without a key the canned mock provider answers
    pub openai_api_key: Option<String>,
    /// Overrides the per-country model when set
    pub openai_model: Option<String>,
    pub openai_base_url: String,
    pub rate_limit_per_minute: u32,
    pub mock_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub simulated_delay: Duration,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid {}", key)))
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            },
            server: ServerConfig::from_env()?,
            chat: ChatConfig {
                openai_api_key: non_empty_var("OPENAI_API_KEY"),
                openai_model: non_empty_var("OPENAI_MODEL"),
                openai_base_url: env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
                rate_limit_per_minute: parse_var("CHAT_RATE_LIMIT_PER_MINUTE", "60")?,
                mock_delay: Duration::from_millis(parse_var("CHAT_MOCK_DELAY_MS", "1000")?),
            },
            mail: MailConfig {
                simulated_delay: Duration::from_millis(parse_var(
                    "MAIL_SIMULATED_DELAY_MS",
                    "2000",
                )?),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.chat.rate_limit_per_minute == 0 {
            return Err(AppError::Configuration(
                "Rate limit must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if !self.chat.openai_base_url.starts_with("http") {
            return Err(AppError::Configuration(
                "OPENAI_BASE_URL must be an http(s) URL".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}
