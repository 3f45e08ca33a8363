use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

const GENERIC_SERVER_ERROR: &str = "Internal server error. Please try again later.";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A single malformed request field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Accumulated input violations (item and client validation)
    #[error("Validation failed: {}", .0.join("; "))]
    InvalidInput(Vec<String>),

    /// Chat completion API answered with a non-success status
    #[error("{0}")]
    Upstream(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document template rendering errors
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to hand back to the caller. Internal failures collapse
    /// into a generic text; the full error is only logged.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidInput(_) => "Validation failed".to_string(),
            AppError::Upstream(msg) if !msg.trim().is_empty() => msg.clone(),
            AppError::Upstream(_) => "Chat completion request failed".to_string(),
            AppError::RateLimitExceeded(msg) => msg.clone(),
            AppError::Configuration(_)
            | AppError::HttpClient(_)
            | AppError::Json(_)
            | AppError::Template(_)
            | AppError::Internal(_) => GENERIC_SERVER_ERROR.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let mut error = serde_json::json!({
            "message": self.public_message(),
            "code": status_code.as_u16(),
        });
        if let AppError::InvalidInput(details) = self {
            error["details"] = serde_json::json!(details);
        }

        HttpResponse::build(status_code).json(serde_json::json!({ "error": error }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
