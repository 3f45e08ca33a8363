use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::core::{CountryCode, Result};
use crate::modules::invoices::models::{ClientInfo, Invoice, InvoiceLineItem, InvoiceStatus};
use crate::modules::taxes::services::{tax_config, TaxCalculator};

/// Calendar days between issue and due date
pub const PAYMENT_TERM_DAYS: i64 = 30;

const INVOICE_NUMBER_PREFIX: &str = "SKV";

/// `SKV-{country}-{yyyymm}-{nnnn}` with a random zero-padded suffix.
///
/// Not unique: two invoices in the same month may collide.
pub fn generate_invoice_number<R: Rng + ?Sized>(
    country: CountryCode,
    issued_at: DateTime<Utc>,
    rng: &mut R,
) -> String {
    let suffix: u16 = rng.gen_range(0..=9999);
    format!(
        "{}-{}-{}-{:04}",
        INVOICE_NUMBER_PREFIX,
        country,
        issued_at.format("%Y%m"),
        suffix
    )
}

/// Builds complete invoices in one step. Performs no validation; callers run
/// the item and client validators first. Fails only when the amounts do not
/// fit in a `Decimal`.
pub struct InvoiceAssembler {
    calculator: TaxCalculator,
}

impl InvoiceAssembler {
    pub fn new() -> Self {
        Self {
            calculator: TaxCalculator::new(),
        }
    }

    /// Assemble an invoice issued at `now`, drawing the number suffix from `rng`
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        items: Vec<InvoiceLineItem>,
        client: ClientInfo,
        country_code: &str,
        notes: Option<String>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Invoice> {
        let profile = tax_config::lookup(country_code);
        let country = profile.country_code;

        let subtotal = self.calculator.subtotal(&items)?;
        let taxes = self.calculator.tax_lines(&items, country.as_str())?;
        let total_tax = self.calculator.total_tax(&taxes)?;
        let total = self.calculator.total(subtotal, &taxes)?;

        let invoice_number = generate_invoice_number(country, now, rng);
        let due_date = now + Duration::days(PAYMENT_TERM_DAYS);

        Ok(Invoice {
            id: Uuid::new_v4().to_string(),
            invoice_number,
            issue_date: now,
            due_date,
            company: tax_config::issuer_company(),
            client,
            items,
            subtotal,
            taxes,
            total_tax,
            total,
            currency: profile.currency,
            locale: profile.locale,
            payment_terms: profile.payment_terms.to_string(),
            notes,
            country,
            status: InvoiceStatus::Draft,
            created_at: now,
            updated_at: now,
        })
    }

    /// Assemble an invoice issued now
    pub fn create_invoice(
        &self,
        items: Vec<InvoiceLineItem>,
        client: ClientInfo,
        country_code: &str,
        notes: Option<String>,
    ) -> Result<Invoice> {
        self.assemble(
            items,
            client,
            country_code,
            notes,
            Utc::now(),
            &mut rand::thread_rng(),
        )
    }
}

impl Default for InvoiceAssembler {
    fn default() -> Self {
        Self::new()
    }
}
