//! Canned chat replies for running without an API key.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use super::provider::ChatProvider;
use crate::core::Result;
use crate::modules::countries::models::Country;

/// Upper bound of the random extra delay added to the base delay
const MAX_JITTER_MS: u64 = 2000;

pub struct MockChatProvider {
    delay: Duration,
}

impl MockChatProvider {
    /// `delay` is the minimum simulated thinking time; a random jitter is
    /// added unless it is zero.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn replies(country_name: &str) -> [String; 4] {
        [
            format!(
                "Thank you for your inquiry about {name}! As an expert business consultant for SKV \
                 Business Services, I'd be happy to help you with business setup, compliance, and \
                 regulations in {name}.",
                name = country_name
            ),
            format!(
                "I understand you're interested in business services in {}. Our team specializes \
                 in company formation, tax compliance, and business licensing. What specific \
                 aspect of business setup would you like to know more about?",
                country_name
            ),
            format!(
                "Great question! In {}, there are several business structures and compliance \
                 requirements to consider. I can help you understand the registration process, \
                 tax obligations, and regulatory requirements. What's your specific business need?",
                country_name
            ),
            format!(
                "As your AI business consultant for {}, I can provide guidance on various business \
                 services including company incorporation, VAT registration, licensing, and \
                 compliance. How can I assist you today?",
                country_name
            ),
        ]
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, country: &Country, _message: &str) -> Result<String> {
        if !self.delay.is_zero() {
            let jitter = rand::thread_rng().gen_range(0..=MAX_JITTER_MS);
            tokio::time::sleep(self.delay + Duration::from_millis(jitter)).await;
        }

        let replies = Self::replies(country.name);
        let reply = replies
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default();

        Ok(reply)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
