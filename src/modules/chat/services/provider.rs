use async_trait::async_trait;

use crate::core::Result;
use crate::modules::countries::models::Country;

/// Chat completion backend.
///
/// Implementations make a single attempt per message; there is no retry.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Answer `message` as the consultant of `country`, using the country's
    /// system prompt
    async fn complete(&self, country: &Country, message: &str) -> Result<String>;

    /// Provider name for logs
    fn name(&self) -> &str;
}
