// An invoice is assembled once from line items, client details and a country
// code, then treated as immutable: regenerating means assembling a new one.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::{InvoiceLineItem, LineItemDraft};
use super::party::{ClientInfo, CompanyInfo};
use crate::core::{CountryCode, Currency, Locale};
use crate::modules::taxes::models::{CountryTaxProfile, TaxLine};
use crate::modules::taxes::services::tax_config;

/// Invoice status lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Freshly assembled; the only status this service produces
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Draft => write!(f, "draft"),
            InvoiceStatus::Sent => write!(f, "sent"),
            InvoiceStatus::Paid => write!(f, "paid"),
            InvoiceStatus::Overdue => write!(f, "overdue"),
            InvoiceStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            "cancelled" => Ok(InvoiceStatus::Cancelled),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// A fully assembled invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique invoice ID (UUID). Empty only when a client posts an invoice
    /// without one, which the document endpoints reject.
    #[serde(default)]
    pub id: String,

    /// `SKV-{country}-{yyyymm}-{nnnn}`
    pub invoice_number: String,

    pub issue_date: DateTime<Utc>,

    /// issue_date + 30 calendar days
    pub due_date: DateTime<Utc>,

    pub company: CompanyInfo,

    pub client: ClientInfo,

    pub items: Vec<InvoiceLineItem>,

    /// Sum of all line totals, taxable or not
    pub subtotal: Decimal,

    pub taxes: Vec<TaxLine>,

    pub total_tax: Decimal,

    /// subtotal + total_tax
    pub total: Decimal,

    pub currency: Currency,

    pub locale: Locale,

    pub payment_terms: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub country: CountryCode,

    #[serde(default)]
    pub status: InvoiceStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Tax profile of the invoice's country (legal notices, display name)
    pub fn tax_profile(&self) -> &'static CountryTaxProfile {
        tax_config::profile(self.country)
    }
}

/// Request to assemble an invoice
///
/// POST /invoice
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    #[serde(default)]
    pub items: Vec<LineItemDraft>,
    #[serde(default)]
    pub client: ClientInfo,
    /// Falls back to the client's country, then to UAE
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to email an invoice
///
/// POST /invoice/email
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInvoiceRequest {
    #[serde(default)]
    pub invoice: Option<Invoice>,
    #[serde(default)]
    pub recipient_email: Option<String>,
}

/// Delivery confirmation returned by POST /invoice/email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailReceipt {
    pub invoice_number: String,
    pub recipient: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendInvoiceResponse {
    pub success: bool,
    pub message: String,
    pub details: EmailReceipt,
}
