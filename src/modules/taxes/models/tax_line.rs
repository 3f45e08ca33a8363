use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One computed tax charge on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxLine {
    /// Display label, e.g. "VAT", "ÁFA", "GST"
    pub tax_type: String,
    /// Percentage, e.g. 5 for 5%
    pub rate: Decimal,
    pub amount: Decimal,
    pub description: String,
}
