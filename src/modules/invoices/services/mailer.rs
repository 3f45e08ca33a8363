use async_trait::async_trait;
use std::time::Duration;

use crate::core::Result;

/// A rendered email ready for delivery
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Delivery backend for invoice emails
#[async_trait]
pub trait InvoiceMailer: Send + Sync {
    /// Deliver a single email. One attempt, no retry.
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;

    /// Backend name for logs
    fn name(&self) -> &str;
}

/// Stand-in for a real delivery provider: waits, logs what would have been
/// sent, and reports success.
pub struct SimulatedMailer {
    delay: Duration,
}

impl SimulatedMailer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl InvoiceMailer for SimulatedMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        tracing::info!(
            to = %email.to,
            from = %email.from,
            subject = %email.subject,
            content_length = email.html_body.len(),
            "Simulated invoice email delivery"
        );

        Ok(())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
