use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{CountryCode, Currency, Locale};

/// The single tax rule active for a country.
///
/// The display label ("VAT", "ÁFA", "GST") travels with the rule so tax-line
/// construction never has to branch on the country code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaxRule {
    /// Flat-rate value-added tax
    Vat {
        rate: Decimal,
        label: &'static str,
        description: &'static str,
    },

    /// Goods and services tax with central/state/integrated components.
    /// Only the integrated (`igst`) rate is charged; `cgst`/`sgst` are kept
    /// as reference data.
    Gst {
        cgst: Decimal,
        sgst: Decimal,
        igst: Decimal,
        label: &'static str,
        description: &'static str,
    },
}

impl TaxRule {
    pub fn label(&self) -> &'static str {
        match self {
            TaxRule::Vat { label, .. } | TaxRule::Gst { label, .. } => label,
        }
    }

    /// Percentage applied to the taxable amount
    pub fn effective_rate(&self) -> Decimal {
        match self {
            TaxRule::Vat { rate, .. } => *rate,
            TaxRule::Gst { igst, .. } => *igst,
        }
    }

    /// Text printed next to the tax amount on documents
    pub fn line_description(&self) -> String {
        match self {
            TaxRule::Vat { description, .. } => description.to_string(),
            TaxRule::Gst {
                igst, description, ..
            } => format!("{} (IGST {}%)", description, igst.normalize()),
        }
    }
}

/// Currency, locale, tax rule and legal boilerplate for one jurisdiction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTaxProfile {
    pub country_code: CountryCode,
    pub display_name: &'static str,
    pub currency: Currency,
    pub locale: Locale,
    pub tax_rule: TaxRule,
    pub payment_terms: &'static str,
    pub legal_notices: &'static [&'static str],
}
