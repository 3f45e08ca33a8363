use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::CountryCode;

/// Request to chat with the country consultant
///
/// POST /chat
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// The user's message
    #[serde(default)]
    pub user: Option<String>,
    /// Country code; when absent the request host decides
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub country: CountryCode,
    pub timestamp: DateTime<Utc>,
}
